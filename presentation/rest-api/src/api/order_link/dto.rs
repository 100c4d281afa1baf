use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::order_intent::link::PaymentPlan;
use business::domain::order_intent::use_cases::build_link::OrderLink;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum PaymentPlanDto {
    #[oai(rename = "cash")]
    Cash,
    #[oai(rename = "installment")]
    Installment,
}

impl From<PaymentPlanDto> for PaymentPlan {
    fn from(dto: PaymentPlanDto) -> Self {
        match dto {
            PaymentPlanDto::Cash => PaymentPlan::Cash,
            PaymentPlanDto::Installment => PaymentPlan::Installment,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct BuildOrderLinkRequest {
    pub product_id: String,
    pub plan: PaymentPlanDto,
    /// Delivery location, the store default when omitted
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderLinkResponse {
    /// WhatsApp deep link with the pre-filled message
    pub url: String,
    pub message: String,
}

impl From<OrderLink> for OrderLinkResponse {
    fn from(link: OrderLink) -> Self {
        Self {
            url: link.url,
            message: link.message,
        }
    }
}
