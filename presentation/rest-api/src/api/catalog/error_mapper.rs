use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CatalogError::NameEmpty
            | CatalogError::InvalidSlug
            | CatalogError::InvalidBasePrice
            | CatalogError::CashPriceAboveBase
            | CatalogError::InvalidInstallmentMonths => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            CatalogError::ProductNotFound => (StatusCode::NOT_FOUND, "NotFound"),
            CatalogError::CategoryCycle | CatalogError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (status, ErrorResponse::new(name, &self.to_string()))
    }
}
