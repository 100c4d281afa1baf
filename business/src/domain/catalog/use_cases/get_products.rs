use async_trait::async_trait;

use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::ProductListing;

pub struct GetProductsParams {
    pub category_slug: Option<String>,
    pub listing: ProductListing,
    pub limit: Option<usize>,
}

/// Lists active products. Repository failures degrade to an empty list.
#[async_trait]
pub trait GetProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetProductsParams) -> Vec<Product>;
}
