use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::order_intent::link::PaymentPlan;
use crate::domain::shared::value_objects::ProductId;

pub struct BuildOrderLinkParams {
    pub product_id: ProductId,
    pub plan: PaymentPlan,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLink {
    pub url: String,
    pub message: String,
}

#[async_trait]
pub trait BuildOrderLinkUseCase: Send + Sync {
    async fn execute(&self, params: BuildOrderLinkParams) -> Result<OrderLink, CatalogError>;
}
