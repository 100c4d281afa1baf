use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::catalog::model::{Category, Product};
use business::domain::catalog::repository::{CatalogCounts, ProductListing};
use business::domain::catalog::use_cases::get_product_page::ProductPage;
use business::domain::pricing::engine::PriceBreakdown;
use business::domain::pricing::format::{format_price, plain_amount};
use business::domain::projection::structured_data::BreadcrumbItem;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum ProductListingDto {
    #[oai(rename = "all")]
    All,
    #[oai(rename = "featured")]
    Featured,
    #[oai(rename = "new_arrivals")]
    NewArrivals,
}

impl From<ProductListingDto> for ProductListing {
    fn from(dto: ProductListingDto) -> Self {
        match dto {
            ProductListingDto::All => ProductListing::All,
            ProductListingDto::Featured => ProductListing::Featured,
            ProductListingDto::NewArrivals => ProductListing::NewArrivals,
        }
    }
}

/// Prices as exact decimal strings plus their display form
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct PricingResponse {
    pub base_price: String,
    pub cash_price: String,
    pub monthly_installment: String,
    pub installment_months: i32,
    pub savings_percent: u32,
    /// e.g. "Rs. 250,000"
    pub formatted_base_price: String,
    pub formatted_cash_price: String,
    pub formatted_monthly_installment: String,
}

impl From<PriceBreakdown> for PricingResponse {
    fn from(pricing: PriceBreakdown) -> Self {
        Self {
            formatted_base_price: format_price(&pricing.base_price),
            formatted_cash_price: format_price(&pricing.cash_price),
            formatted_monthly_installment: format_price(&pricing.monthly_installment),
            base_price: plain_amount(&pricing.base_price),
            cash_price: plain_amount(&pricing.cash_price),
            monthly_installment: plain_amount(&pricing.monthly_installment),
            installment_months: pricing.installment_months,
            savings_percent: pricing.savings_percent,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub brand: Option<String>,
    pub stock_status: String,
    pub sku: Option<String>,
    pub images: Vec<String>,
    pub primary_image: Option<String>,
    pub specifications: BTreeMap<String, String>,
    pub is_featured: bool,
    pub is_new: bool,
    pub pricing: PricingResponse,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            pricing: product.pricing().into(),
            primary_image: product.primary_image().map(str::to_string),
            id: product.id.to_string(),
            category_id: product.category_id.map(|id| id.to_string()),
            stock_status: product.stock_status.to_string(),
            name: product.name,
            slug: product.slug,
            description: product.description,
            brand: product.brand,
            sku: product.sku,
            images: product.images,
            specifications: product.specifications,
            is_featured: product.is_featured,
            is_new: product.is_new,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    /// Icon identifier, "package" when the category has no known icon
    pub icon: String,
    pub display_order: i32,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            icon: category.icon().identifier().to_string(),
            id: category.id.to_string(),
            parent_id: category.parent_id.map(|id| id.to_string()),
            name: category.name,
            slug: category.slug,
            description: category.description,
            image: category.image,
            display_order: category.display_order,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct BreadcrumbResponse {
    pub name: String,
    pub path: String,
}

impl From<BreadcrumbItem> for BreadcrumbResponse {
    fn from(item: BreadcrumbItem) -> Self {
        Self {
            name: item.name,
            path: item.path,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SeoResponse {
    pub title: String,
    pub description: String,
}

/// Product detail page with its search-engine projections
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductPageResponse {
    pub product: ProductResponse,
    pub category: Option<CategoryResponse>,
    pub breadcrumbs: Vec<BreadcrumbResponse>,
    pub seo: SeoResponse,
    /// schema.org Product JSON-LD
    pub product_json_ld: serde_json::Value,
    /// schema.org BreadcrumbList JSON-LD
    pub breadcrumb_json_ld: serde_json::Value,
    pub related: Vec<ProductResponse>,
}

impl From<ProductPage> for ProductPageResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            product_json_ld: serde_json::to_value(&page.product_json_ld).unwrap_or_default(),
            breadcrumb_json_ld: serde_json::to_value(&page.breadcrumb_json_ld)
                .unwrap_or_default(),
            product: page.product.into(),
            category: page.category.map(Into::into),
            breadcrumbs: page.breadcrumbs.into_iter().map(Into::into).collect(),
            seo: SeoResponse {
                title: page.seo.title,
                description: page.seo.description,
            },
            related: page.related.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CatalogStatsResponse {
    pub products: u64,
    pub active_products: u64,
    pub categories: u64,
}

impl From<CatalogCounts> for CatalogStatsResponse {
    fn from(counts: CatalogCounts) -> Self {
        Self {
            products: counts.products,
            active_products: counts.active_products,
            categories: counts.categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::CategoryId;
    use std::str::FromStr;

    fn product() -> Product {
        let now = Utc::now();
        Product {
            id: "p1".into(),
            name: "Sony Bravia 55".to_string(),
            slug: "sony-bravia-55".to_string(),
            description: None,
            category_id: Some(CategoryId::new("tvs")),
            brand: Some("Sony".to_string()),
            base_price: bigdecimal::BigDecimal::from_str("100000").unwrap(),
            cash_price: None,
            installment_months: 12,
            stock_status: Default::default(),
            sku: None,
            images: vec![" ".to_string(), "/uploads/tv.jpg".to_string()],
            featured_image: None,
            specifications: BTreeMap::new(),
            is_featured: false,
            is_new: true,
            is_active: true,
            featured_order: 0,
            new_arrival_order: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn should_expose_exact_and_formatted_prices() {
        let response = ProductResponse::from(product());

        assert_eq!(response.pricing.cash_price, "80000.00");
        assert_eq!(response.pricing.formatted_cash_price, "Rs. 80,000");
        assert_eq!(response.pricing.monthly_installment, "8333.33");
        assert_eq!(response.pricing.savings_percent, 20);
        assert_eq!(response.stock_status, "in_stock");
        assert_eq!(response.primary_image.as_deref(), Some("/uploads/tv.jpg"));
        assert_eq!(response.category_id.as_deref(), Some("tvs"));
    }

    #[test]
    fn should_map_listing_dto_onto_domain_listing() {
        assert_eq!(
            ProductListing::from(ProductListingDto::NewArrivals),
            ProductListing::NewArrivals
        );
    }
}
