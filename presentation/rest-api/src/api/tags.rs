use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    /// Products, categories and catalog statistics
    Catalog,
    Sitemap,
    /// Store identity for search engines
    Store,
    /// WhatsApp order hand-off
    Orders,
}
