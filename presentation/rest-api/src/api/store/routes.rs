use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::projection::site::SiteProfile;
use business::domain::projection::structured_data::local_business_structured_data;

use crate::api::tags::ApiTags;

pub struct StoreApi {
    site: Arc<SiteProfile>,
}

impl StoreApi {
    pub fn new(site: Arc<SiteProfile>) -> Self {
        Self { site }
    }
}

#[OpenApi]
impl StoreApi {
    /// Store structured data
    ///
    /// schema.org LocalBusiness JSON-LD for the configured store.
    #[oai(path = "/store", method = "get", tag = "ApiTags::Store")]
    async fn get_store(&self) -> Json<serde_json::Value> {
        let json_ld = local_business_structured_data(&self.site);
        Json(serde_json::to_value(&json_ld).unwrap_or_default())
    }
}
