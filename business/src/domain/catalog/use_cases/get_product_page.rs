use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::{Category, Product};
use crate::domain::pricing::engine::PriceBreakdown;
use crate::domain::projection::seo::SeoText;
use crate::domain::projection::structured_data::{
    BreadcrumbItem, BreadcrumbListJsonLd, ProductJsonLd,
};

pub struct GetProductPageParams {
    pub slug: String,
}

/// Everything a product detail page renders, derived from one product record.
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub product: Product,
    pub pricing: PriceBreakdown,
    pub category: Option<Category>,
    pub breadcrumbs: Vec<BreadcrumbItem>,
    pub seo: SeoText,
    pub product_json_ld: ProductJsonLd,
    pub breadcrumb_json_ld: BreadcrumbListJsonLd,
    pub related: Vec<Product>,
}

#[async_trait]
pub trait GetProductPageUseCase: Send + Sync {
    async fn execute(&self, params: GetProductPageParams) -> Result<ProductPage, CatalogError>;
}
