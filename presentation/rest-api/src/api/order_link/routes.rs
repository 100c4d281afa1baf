use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Query, payload::Json};

use business::domain::order_intent::use_cases::build_link::{
    BuildOrderLinkParams, BuildOrderLinkUseCase,
};
use business::domain::shared::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order_link::dto::{BuildOrderLinkRequest, OrderLinkResponse, PaymentPlanDto};
use crate::api::tags::ApiTags;

pub struct OrderLinkApi {
    build_link_use_case: Arc<dyn BuildOrderLinkUseCase>,
    default_location: String,
}

impl OrderLinkApi {
    pub fn new(build_link_use_case: Arc<dyn BuildOrderLinkUseCase>, default_location: String) -> Self {
        Self {
            build_link_use_case,
            default_location,
        }
    }

    fn params(&self, product_id: String, plan: PaymentPlanDto, location: Option<String>) -> BuildOrderLinkParams {
        let location = location
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| self.default_location.clone());

        BuildOrderLinkParams {
            product_id: ProductId::new(product_id),
            plan: plan.into(),
            location: Some(location),
        }
    }
}

/// WhatsApp order hand-off
#[OpenApi]
impl OrderLinkApi {
    /// Build an order link
    ///
    /// Returns the messaging deep link and the message it pre-fills.
    #[oai(path = "/order-link", method = "post", tag = "ApiTags::Orders")]
    async fn build_order_link(&self, body: Json<BuildOrderLinkRequest>) -> BuildOrderLinkResponse {
        let params = self.params(body.0.product_id, body.0.plan, body.0.location);

        match self.build_link_use_case.execute(params).await {
            Ok(link) => BuildOrderLinkResponse::Ok(Json(link.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => BuildOrderLinkResponse::NotFound(json),
                    _ => BuildOrderLinkResponse::InternalError(json),
                }
            }
        }
    }

    /// Open an order link
    ///
    /// Redirects the browser straight to the messaging app.
    #[oai(path = "/order-link/open", method = "get", tag = "ApiTags::Orders")]
    async fn open_order_link(
        &self,
        product_id: Query<String>,
        plan: Query<PaymentPlanDto>,
        location: Query<Option<String>>,
    ) -> OpenOrderLinkResponse {
        let params = self.params(product_id.0, plan.0, location.0);

        match self.build_link_use_case.execute(params).await {
            Ok(link) => OpenOrderLinkResponse::Found(link.url),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => OpenOrderLinkResponse::NotFound(json),
                    _ => OpenOrderLinkResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
enum BuildOrderLinkResponse {
    #[oai(status = 200)]
    Ok(Json<OrderLinkResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
enum OpenOrderLinkResponse {
    #[oai(status = 302)]
    Found(#[oai(header = "Location")] String),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
