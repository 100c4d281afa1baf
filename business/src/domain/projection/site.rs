/// Postal address of the physical store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostalAddress {
    pub street: String,
    pub locality: String,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Public identity of the storefront used by every projection.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteProfile {
    pub base_url: String,
    pub store_name: String,
    pub description: Option<String>,
    pub telephone: Option<String>,
    pub address: Option<PostalAddress>,
    pub geo: Option<GeoCoordinates>,
    pub opening_hours: Vec<String>,
    pub price_range: Option<String>,
    pub logo: Option<String>,
}

impl SiteProfile {
    pub fn new(base_url: impl Into<String>, store_name: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            store_name: store_name.into(),
            description: None,
            telephone: None,
            address: None,
            geo: None,
            opening_hours: Vec::new(),
            price_range: None,
            logo: None,
        }
    }

    pub fn url(&self, path: &str) -> String {
        absolute_url(&self.base_url, path)
    }

    pub fn product_url(&self, slug: &str) -> String {
        self.url(&product_path(slug))
    }
}

pub fn product_path(slug: &str) -> String {
    format!("/products/{}", slug)
}

pub fn category_path(slug: &str) -> String {
    format!("/categories/{}", slug)
}

/// Joins `path` onto `base_url` with exactly one slash. Already absolute URLs pass through.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_join_relative_paths_with_single_slash() {
        assert_eq!(
            absolute_url("https://shop.lk/", "/products/tv-x"),
            "https://shop.lk/products/tv-x"
        );
        assert_eq!(
            absolute_url("https://shop.lk", "uploads/a.jpg"),
            "https://shop.lk/uploads/a.jpg"
        );
    }

    #[test]
    fn should_keep_absolute_urls() {
        assert_eq!(
            absolute_url("https://shop.lk", "https://cdn.io/a.jpg"),
            "https://cdn.io/a.jpg"
        );
    }

    #[test]
    fn should_map_root_path_to_base_with_trailing_slash() {
        assert_eq!(absolute_url("https://shop.lk", "/"), "https://shop.lk/");
    }

    #[test]
    fn should_build_product_url() {
        let site = SiteProfile::new("https://shop.lk", "Shop");
        assert_eq!(site.product_url("sofa-y"), "https://shop.lk/products/sofa-y");
    }
}
