use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{CategoryId, ProductId};

use super::model::{Category, Product};

/// Which product list to fetch and in which order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductListing {
    /// Newest first.
    #[default]
    All,
    /// `is_featured` products ordered by `featured_order`.
    Featured,
    /// `is_new` products ordered by `new_arrival_order`.
    NewArrivals,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category_id: Option<CategoryId>,
    pub active_only: bool,
    pub exclude_id: Option<ProductId>,
    pub listing: ProductListing,
    pub limit: Option<usize>,
}

impl ProductFilter {
    pub fn active() -> Self {
        Self {
            active_only: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogCounts {
    pub products: u64,
    pub active_products: u64,
    pub categories: u64,
}

/// Read-only catalog query port. Mutation is owned by the back office.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn get_product_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
    async fn get_product_by_slug(&self, slug: &str) -> Result<Product, RepositoryError>;
    async fn find_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
    async fn get_categories(&self, active_only: bool) -> Result<Vec<Category>, RepositoryError>;
    async fn get_category_by_slug(&self, slug: &str) -> Result<Category, RepositoryError>;
    async fn count_catalog(&self) -> Result<CatalogCounts, RepositoryError>;
}
