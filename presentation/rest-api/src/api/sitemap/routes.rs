use std::sync::Arc;

use poem::{IntoResponse, handler, web::Data};
use poem_openapi::{OpenApi, payload::Json};

use business::domain::catalog::use_cases::get_sitemap::GetSitemapUseCase;
use business::domain::projection::sitemap::render_sitemap_xml;

use crate::api::sitemap::dto::SitemapEntryResponse;
use crate::api::tags::ApiTags;

pub struct SitemapApi {
    get_sitemap_use_case: Arc<dyn GetSitemapUseCase>,
}

impl SitemapApi {
    pub fn new(get_sitemap_use_case: Arc<dyn GetSitemapUseCase>) -> Self {
        Self {
            get_sitemap_use_case,
        }
    }
}

#[OpenApi]
impl SitemapApi {
    /// Sitemap entries
    ///
    /// Home, the catalog root, every active product and every active category.
    /// Catalog outages shrink the list to the static pages.
    #[oai(path = "/sitemap", method = "get", tag = "ApiTags::Sitemap")]
    async fn get_sitemap(&self) -> Json<Vec<SitemapEntryResponse>> {
        let entries = self.get_sitemap_use_case.execute().await;
        Json(entries.into_iter().map(Into::into).collect())
    }
}

/// `sitemap.xml` for crawlers, served outside the OpenAPI document.
#[handler]
pub async fn sitemap_xml(use_case: Data<&Arc<dyn GetSitemapUseCase>>) -> impl IntoResponse {
    let entries = use_case.0.execute().await;
    render_sitemap_xml(&entries).with_content_type("application/xml; charset=utf-8")
}
