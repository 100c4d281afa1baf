use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::{CatalogRepository, ProductFilter};
use crate::domain::catalog::use_cases::get_products::{GetProductsParams, GetProductsUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetProductsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsUseCase for GetProductsUseCaseImpl {
    async fn execute(&self, params: GetProductsParams) -> Vec<Product> {
        let category_id = match &params.category_slug {
            Some(slug) => match self.repository.get_category_by_slug(slug).await {
                Ok(category) if category.is_active => Some(category.id),
                Ok(_) | Err(RepositoryError::NotFound) => {
                    self.logger
                        .info(&format!("No active category for slug: {}", slug));
                    return Vec::new();
                }
                Err(e) => {
                    self.logger.recovered("Loading category", &e);
                    return Vec::new();
                }
            },
            None => None,
        };

        let filter = ProductFilter {
            category_id,
            active_only: true,
            exclude_id: None,
            listing: params.listing,
            limit: params.limit,
        };

        match self.repository.find_products(&filter).await {
            Ok(products) => {
                self.logger
                    .info(&format!("Found {} active products", products.len()));
                products
            }
            Err(e) => {
                self.logger.recovered("Listing products", &e);
                Vec::new()
            }
        }
    }
}
