use std::collections::BTreeMap;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;

use business::domain::catalog::model::{Category, Product};
use business::domain::catalog::value_objects::StockStatus;
use business::domain::shared::value_objects::{CategoryId, ProductId};

pub const PRODUCT_COLUMNS: &str = "id, name, slug, description, category_id, brand, base_price, \
     cash_price, installment_months, stock_status, sku, images, featured_image, specifications, \
     is_featured, is_new, is_active, featured_order, new_arrival_order, created_at, updated_at";

pub const CATEGORY_COLUMNS: &str = "id, name, slug, parent_id, description, image, icon_key, \
     display_order, is_active, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub brand: Option<String>,
    pub base_price: BigDecimal,
    pub cash_price: Option<BigDecimal>,
    pub installment_months: i32,
    pub stock_status: String,
    pub sku: Option<String>,
    pub images: Vec<String>,
    pub featured_image: Option<String>,
    pub specifications: Json<BTreeMap<String, String>>,
    pub is_featured: bool,
    pub is_new: bool,
    pub is_active: bool,
    pub featured_order: i32,
    pub new_arrival_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product {
            id: ProductId::new(&self.id),
            name: self.name,
            slug: self.slug,
            description: self.description,
            category_id: self.category_id.as_deref().map(CategoryId::new),
            brand: self.brand,
            base_price: self.base_price,
            cash_price: self.cash_price,
            installment_months: self.installment_months,
            stock_status: self
                .stock_status
                .parse::<StockStatus>()
                .unwrap_or_default(),
            sku: self.sku,
            images: self.images,
            featured_image: self.featured_image,
            specifications: self.specifications.0,
            is_featured: self.is_featured,
            is_new: self.is_new,
            is_active: self.is_active,
            featured_order: self.featured_order,
            new_arrival_order: self.new_arrival_order,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct CategoryEntity {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub icon_key: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryEntity {
    pub fn into_domain(self) -> Category {
        Category {
            id: CategoryId::new(&self.id),
            name: self.name,
            slug: self.slug,
            parent_id: self.parent_id.as_deref().map(CategoryId::new),
            description: self.description,
            image: self.image,
            icon_key: self.icon_key,
            display_order: self.display_order,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
