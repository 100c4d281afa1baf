use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::hierarchy::category_trail;
use crate::domain::catalog::repository::{CatalogRepository, ProductFilter, ProductListing};
use crate::domain::catalog::use_cases::get_product_page::{
    GetProductPageParams, GetProductPageUseCase, ProductPage,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::projection::seo::seo_text;
use crate::domain::projection::site::{SiteProfile, category_path, product_path};
use crate::domain::projection::structured_data::{
    BreadcrumbItem, breadcrumb_structured_data, product_structured_data,
};

const RELATED_PRODUCTS_LIMIT: usize = 4;

pub struct GetProductPageUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub site: Arc<SiteProfile>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductPageUseCase for GetProductPageUseCaseImpl {
    async fn execute(&self, params: GetProductPageParams) -> Result<ProductPage, CatalogError> {
        self.logger
            .info(&format!("Fetching product page: {}", params.slug));

        let product = self
            .repository
            .get_product_by_slug(&params.slug)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CatalogError::ProductNotFound,
                other => CatalogError::Repository(other),
            })?;

        if !product.is_active {
            return Err(CatalogError::ProductNotFound);
        }

        let related_filter = product.category_id.clone().map(|category_id| ProductFilter {
            category_id: Some(category_id),
            active_only: true,
            exclude_id: Some(product.id.clone()),
            listing: ProductListing::All,
            limit: Some(RELATED_PRODUCTS_LIMIT),
        });

        let (categories, related) = tokio::join!(
            self.repository.get_categories(false),
            async {
                match &related_filter {
                    Some(filter) => self.repository.find_products(filter).await,
                    None => Ok(Vec::new()),
                }
            }
        );

        let categories = categories.unwrap_or_else(|e| {
            self.logger.recovered("Loading categories", &e);
            Vec::new()
        });
        let related = related.unwrap_or_else(|e| {
            self.logger.recovered("Loading related products", &e);
            Vec::new()
        });

        let trail = match &product.category_id {
            Some(category_id) => category_trail(&categories, category_id).unwrap_or_else(|e| {
                self.logger.recovered("Resolving category trail", &e);
                Vec::new()
            }),
            None => Vec::new(),
        };

        let mut breadcrumbs = vec![
            BreadcrumbItem::new("Home", "/"),
            BreadcrumbItem::new("Products", "/products"),
        ];
        breadcrumbs.extend(
            trail
                .iter()
                .map(|c| BreadcrumbItem::new(c.name.clone(), category_path(&c.slug))),
        );
        breadcrumbs.push(BreadcrumbItem::new(
            product.name.clone(),
            product_path(&product.slug),
        ));

        let category = trail.last().map(|c| (*c).clone());

        Ok(ProductPage {
            pricing: product.pricing(),
            seo: seo_text(&product),
            product_json_ld: product_structured_data(&product, &self.site, Utc::now()),
            breadcrumb_json_ld: breadcrumb_structured_data(&breadcrumbs, &self.site.base_url),
            breadcrumbs,
            category,
            related,
            product,
        })
    }
}
