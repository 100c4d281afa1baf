use std::collections::BTreeMap;

use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::CatalogError;
use super::value_objects::{CategoryIcon, StockStatus};
use crate::domain::pricing::engine::{DEFAULT_INSTALLMENT_MONTHS, PriceBreakdown, derive_pricing};
use crate::domain::shared::value_objects::{CategoryId, ProductId, is_valid_slug};

fn default_installment_months() -> i32 {
    DEFAULT_INSTALLMENT_MONTHS
}

fn default_true() -> bool {
    true
}

/// Canonical catalog product.
///
/// The same shape is stored as a wishlist snapshot, so optional and collection
/// fields tolerate being absent in older snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub brand: Option<String>,
    pub base_price: BigDecimal,
    /// Stored cash price. Authoritative when valid, otherwise derived from `base_price`.
    #[serde(default)]
    pub cash_price: Option<BigDecimal>,
    #[serde(default = "default_installment_months")]
    pub installment_months: i32,
    #[serde(default)]
    pub stock_status: StockStatus,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub featured_order: i32,
    #[serde(default)]
    pub new_arrival_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub category_id: Option<CategoryId>,
    pub brand: Option<String>,
    pub base_price: BigDecimal,
    pub cash_price: Option<BigDecimal>,
    pub installment_months: Option<i32>,
    pub stock_status: StockStatus,
    pub sku: Option<String>,
    pub images: Vec<String>,
    pub featured_image: Option<String>,
    pub specifications: BTreeMap<String, String>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, CatalogError> {
        if props.name.trim().is_empty() {
            return Err(CatalogError::NameEmpty);
        }

        if !is_valid_slug(&props.slug) {
            return Err(CatalogError::InvalidSlug);
        }

        if props.base_price <= BigDecimal::zero() {
            return Err(CatalogError::InvalidBasePrice);
        }

        if let Some(cash) = &props.cash_price
            && (cash > &props.base_price || cash <= &BigDecimal::zero())
        {
            return Err(CatalogError::CashPriceAboveBase);
        }

        let installment_months = props
            .installment_months
            .unwrap_or(DEFAULT_INSTALLMENT_MONTHS);
        if installment_months < 1 {
            return Err(CatalogError::InvalidInstallmentMonths);
        }

        let now = Utc::now();
        Ok(Self {
            id: ProductId::generate(),
            name: props.name,
            slug: props.slug,
            description: props.description,
            category_id: props.category_id,
            brand: props.brand,
            base_price: props.base_price,
            cash_price: props.cash_price,
            installment_months,
            stock_status: props.stock_status,
            sku: props.sku,
            images: props.images,
            featured_image: props.featured_image,
            specifications: props.specifications,
            is_featured: false,
            is_new: false,
            is_active: true,
            featured_order: 0,
            new_arrival_order: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Cash price, installment and savings derived from the stored prices.
    pub fn pricing(&self) -> PriceBreakdown {
        derive_pricing(
            &self.base_price,
            Some(self.installment_months),
            self.cash_price.as_ref(),
        )
    }

    /// Featured image when set, otherwise the first gallery image. Blank URLs are skipped.
    pub fn primary_image(&self) -> Option<&str> {
        self.featured_image
            .iter()
            .chain(self.images.iter())
            .map(|url| url.trim())
            .find(|url| !url.is_empty())
    }

    pub fn brand_name(&self) -> Option<&str> {
        self.brand
            .as_deref()
            .map(str::trim)
            .filter(|brand| !brand.is_empty())
    }
}

/// Node of the category tree. `parent_id` is a weak reference; the tree must stay acyclic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<CategoryId>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub icon_key: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn icon(&self) -> CategoryIcon {
        self.icon_key
            .as_deref()
            .map(CategoryIcon::from_key)
            .unwrap_or(CategoryIcon::Package)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use std::str::FromStr;

    pub fn price(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    pub fn product(id: &str, slug: &str, base_price: &str) -> Product {
        let now = Utc::now();
        Product {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            slug: slug.to_string(),
            description: None,
            category_id: None,
            brand: None,
            base_price: price(base_price),
            cash_price: None,
            installment_months: DEFAULT_INSTALLMENT_MONTHS,
            stock_status: StockStatus::InStock,
            sku: None,
            images: Vec::new(),
            featured_image: None,
            specifications: BTreeMap::new(),
            is_featured: false,
            is_new: false,
            is_active: true,
            featured_order: 0,
            new_arrival_order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn category(id: &str, slug: &str, parent: Option<&str>) -> Category {
        let now = Utc::now();
        Category {
            id: CategoryId::new(id),
            name: format!("Category {}", id),
            slug: slug.to_string(),
            parent_id: parent.map(CategoryId::new),
            description: None,
            image: None,
            icon_key: None,
            display_order: 0,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
