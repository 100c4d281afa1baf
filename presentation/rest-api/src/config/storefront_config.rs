use std::env;

use thiserror::Error;

use business::domain::order_intent::link::DEFAULT_LOCATION;
use business::domain::projection::site::{GeoCoordinates, PostalAddress, SiteProfile};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config.invalid_value: {0}")]
    InvalidValue(&'static str),
}

/// Public storefront identity and order hand-off settings
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub site: SiteProfile,
    /// WhatsApp deep-link endpoint including the shop number.
    pub messaging_base: String,
    pub default_location: String,
}

impl StorefrontConfig {
    /// Load storefront configuration from environment variables
    ///
    /// Environment variables:
    /// - SITE_BASE_URL: Public origin of the shop (default: "http://localhost:5173")
    /// - STORE_NAME: Business name (default: "Storefront")
    /// - STORE_TELEPHONE, STORE_OPENING_HOURS (comma separated), STORE_PRICE_RANGE
    /// - STORE_STREET, STORE_LOCALITY, STORE_REGION, STORE_POSTAL_CODE, STORE_COUNTRY:
    ///   postal address, emitted only when street and locality are set
    /// - STORE_LATITUDE, STORE_LONGITUDE: geo position, emitted only when both are set
    /// - WHATSAPP_BASE_URL: Messaging endpoint (default: "https://wa.me/94000000000")
    /// - DEFAULT_LOCATION: Delivery location used when the shopper gives none
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let base_url = value("SITE_BASE_URL").unwrap_or_else(|| "http://localhost:5173".to_string());
        let store_name = value("STORE_NAME").unwrap_or_else(|| "Storefront".to_string());

        let mut site = SiteProfile::new(base_url.trim_end_matches('/'), store_name);
        site.description = value("STORE_DESCRIPTION");
        site.telephone = value("STORE_TELEPHONE");
        site.price_range = value("STORE_PRICE_RANGE");
        site.logo = value("STORE_LOGO");
        site.opening_hours = value("STORE_OPENING_HOURS")
            .map(|hours| {
                hours
                    .split(',')
                    .map(|h| h.trim().to_string())
                    .filter(|h| !h.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        if let (Some(street), Some(locality)) = (value("STORE_STREET"), value("STORE_LOCALITY")) {
            site.address = Some(PostalAddress {
                street,
                locality,
                region: value("STORE_REGION"),
                postal_code: value("STORE_POSTAL_CODE"),
                country: value("STORE_COUNTRY").unwrap_or_else(|| "LK".to_string()),
            });
        }

        if let (Some(latitude), Some(longitude)) = (value("STORE_LATITUDE"), value("STORE_LONGITUDE")) {
            site.geo = Some(GeoCoordinates {
                latitude: parse_coordinate(&latitude, 90.0, "STORE_LATITUDE")?,
                longitude: parse_coordinate(&longitude, 180.0, "STORE_LONGITUDE")?,
            });
        }

        Ok(Self {
            site,
            messaging_base: value("WHATSAPP_BASE_URL")
                .unwrap_or_else(|| "https://wa.me/94000000000".to_string()),
            default_location: value("DEFAULT_LOCATION")
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        })
    }
}

fn parse_coordinate(raw: &str, bound: f64, key: &'static str) -> Result<f64, ConfigError> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v.abs() <= bound => Ok(v),
        _ => Err(ConfigError::InvalidValue(key)),
    }
}
