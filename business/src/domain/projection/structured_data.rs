use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::domain::catalog::model::Product;
use crate::domain::catalog::value_objects::StockStatus;
use crate::domain::pricing::format::plain_amount;

use super::site::{GeoCoordinates, PostalAddress, SiteProfile, absolute_url};

const SCHEMA_CONTEXT: &str = "https://schema.org";
pub const PRICE_CURRENCY: &str = "LKR";
pub const FALLBACK_BRAND: &str = "Generic";
pub const PRICE_VALIDITY_DAYS: i64 = 90;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductJsonLd {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub sku: String,
    pub brand: BrandJsonLd,
    pub offers: OfferJsonLd,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandJsonLd {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferJsonLd {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
    pub price_currency: &'static str,
    pub price: String,
    pub price_valid_until: String,
    pub availability: &'static str,
    pub item_condition: &'static str,
    pub seller: OrganizationJsonLd,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationJsonLd {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

pub fn availability(status: StockStatus) -> &'static str {
    match status {
        StockStatus::InStock => "https://schema.org/InStock",
        StockStatus::PreOrder => "https://schema.org/PreOrder",
        StockStatus::OutOfStock => "https://schema.org/OutOfStock",
    }
}

/// schema.org `Product` for a product page. The offered price is the cash price.
pub fn product_structured_data(
    product: &Product,
    site: &SiteProfile,
    now: DateTime<Utc>,
) -> ProductJsonLd {
    let description = product
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(product.name.as_str())
        .to_string();

    let sku = product
        .sku
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| product.id.to_string());

    ProductJsonLd {
        context: SCHEMA_CONTEXT,
        kind: "Product",
        name: product.name.clone(),
        description,
        image: product
            .primary_image()
            .map(|image| absolute_url(&site.base_url, image)),
        sku,
        brand: BrandJsonLd {
            kind: "Brand",
            name: product.brand_name().unwrap_or(FALLBACK_BRAND).to_string(),
        },
        offers: OfferJsonLd {
            kind: "Offer",
            url: site.product_url(&product.slug),
            price_currency: PRICE_CURRENCY,
            price: plain_amount(&product.pricing().cash_price),
            price_valid_until: (now + Duration::days(PRICE_VALIDITY_DAYS))
                .format("%Y-%m-%d")
                .to_string(),
            availability: availability(product.stock_status),
            item_condition: "https://schema.org/NewCondition",
            seller: OrganizationJsonLd {
                kind: "Organization",
                name: site.store_name.clone(),
            },
        },
    }
}

/// One step of a breadcrumb trail; `path` is site-relative or absolute.
#[derive(Debug, Clone, PartialEq)]
pub struct BreadcrumbItem {
    pub name: String,
    pub path: String,
}

impl BreadcrumbItem {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbListJsonLd {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub item_list_element: Vec<ListItemJsonLd>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItemJsonLd {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: u32,
    pub name: String,
    pub item: String,
}

/// schema.org `BreadcrumbList` with 1-based, gap-free positions.
pub fn breadcrumb_structured_data(items: &[BreadcrumbItem], base_url: &str) -> BreadcrumbListJsonLd {
    BreadcrumbListJsonLd {
        context: SCHEMA_CONTEXT,
        kind: "BreadcrumbList",
        item_list_element: items
            .iter()
            .zip(1u32..)
            .map(|(item, position)| ListItemJsonLd {
                kind: "ListItem",
                position,
                name: item.name.clone(),
                item: absolute_url(base_url, &item.path),
            })
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBusinessJsonLd {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddressJsonLd>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoJsonLd>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub opening_hours: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    pub currencies_accepted: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddressJsonLd {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub street_address: String,
    pub address_locality: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub address_country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoJsonLd {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&PostalAddress> for PostalAddressJsonLd {
    fn from(address: &PostalAddress) -> Self {
        Self {
            kind: "PostalAddress",
            street_address: address.street.clone(),
            address_locality: address.locality.clone(),
            address_region: address.region.clone(),
            postal_code: address.postal_code.clone(),
            address_country: address.country.clone(),
        }
    }
}

impl From<GeoCoordinates> for GeoJsonLd {
    fn from(geo: GeoCoordinates) -> Self {
        Self {
            kind: "GeoCoordinates",
            latitude: geo.latitude,
            longitude: geo.longitude,
        }
    }
}

/// schema.org `LocalBusiness` describing the physical store.
pub fn local_business_structured_data(site: &SiteProfile) -> LocalBusinessJsonLd {
    LocalBusinessJsonLd {
        context: SCHEMA_CONTEXT,
        kind: "LocalBusiness",
        name: site.store_name.clone(),
        url: site.url("/"),
        description: site.description.clone(),
        telephone: site.telephone.clone(),
        image: site.logo.as_deref().map(|logo| site.url(logo)),
        address: site.address.as_ref().map(PostalAddressJsonLd::from),
        geo: site.geo.map(GeoJsonLd::from),
        opening_hours: site.opening_hours.clone(),
        price_range: site.price_range.clone(),
        currencies_accepted: PRICE_CURRENCY,
    }
}
