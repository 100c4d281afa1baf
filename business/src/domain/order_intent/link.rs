use serde::{Deserialize, Serialize};

/// Location used when the shopper does not give one.
pub const DEFAULT_LOCATION: &str = "Sri Lanka";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentPlan {
    Cash,
    Installment,
}

impl PaymentPlan {
    pub fn description(&self) -> &'static str {
        match self {
            PaymentPlan::Cash => "Cash payment (20% discount)",
            PaymentPlan::Installment => "12-month installment plan",
        }
    }
}

impl std::fmt::Display for PaymentPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentPlan::Cash => write!(f, "cash"),
            PaymentPlan::Installment => write!(f, "installment"),
        }
    }
}

impl std::str::FromStr for PaymentPlan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentPlan::Cash),
            "installment" => Ok(PaymentPlan::Installment),
            _ => Err(format!("Invalid payment plan: {}", s)),
        }
    }
}

/// Purchase request to pre-fill in the messaging app.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderIntent<'a> {
    pub product_name: &'a str,
    pub plan: PaymentPlan,
    pub location: Option<&'a str>,
    pub product_url: Option<&'a str>,
}

impl<'a> OrderIntent<'a> {
    pub fn new(product_name: &'a str, plan: PaymentPlan) -> Self {
        Self {
            product_name,
            plan,
            location: None,
            product_url: None,
        }
    }

    /// Message body the shopper sends.
    pub fn message(&self) -> String {
        let location = self
            .location
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LOCATION);

        let mut message = format!(
            "Hello! I would like to order:\n\nProduct: {}\nPayment plan: {}\nDelivery location: {}",
            self.product_name,
            self.plan.description(),
            location
        );
        if let Some(url) = self.product_url.map(str::trim).filter(|u| !u.is_empty()) {
            message.push_str(&format!("\nProduct link: {}", url));
        }
        message.push_str("\n\nPlease confirm availability.");
        message
    }
}

/// Deep link `{messaging_base}/?text={message}` with the message percent-encoded.
///
/// Pure construction; opening the link is left to the caller.
pub fn build_link(messaging_base: &str, intent: &OrderIntent<'_>) -> String {
    format!(
        "{}/?text={}",
        messaging_base.trim_end_matches('/'),
        urlencoding::encode(&intent.message())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://wa.me/94771234567";

    fn decoded_text(link: &str) -> String {
        let (_, encoded) = link.split_once("?text=").unwrap();
        urlencoding::decode(encoded).unwrap().into_owned()
    }

    #[test]
    fn should_build_cash_link_with_default_location() {
        let link = build_link(BASE, &OrderIntent::new("TV X", PaymentPlan::Cash));

        assert!(link.starts_with("https://wa.me/94771234567/?text="));
        let text = decoded_text(&link);
        assert!(text.contains("TV X"));
        assert!(text.contains(PaymentPlan::Cash.description()));
        assert!(text.contains(&format!("Delivery location: {}", DEFAULT_LOCATION)));
        assert!(!text.contains("Product link"));
    }

    #[test]
    fn should_include_location_and_product_url_when_given() {
        let intent = OrderIntent {
            product_name: "Corner Sofa",
            plan: PaymentPlan::Installment,
            location: Some("Kandy"),
            product_url: Some("https://shop.lk/products/corner-sofa"),
        };

        let text = decoded_text(&build_link(BASE, &intent));

        assert!(text.contains("12-month installment plan"));
        assert!(text.contains("Delivery location: Kandy"));
        assert!(text.contains("Product link: https://shop.lk/products/corner-sofa"));
    }

    #[test]
    fn should_percent_encode_message_body() {
        let link = build_link(BASE, &OrderIntent::new("TV & Stand", PaymentPlan::Cash));
        let (_, encoded) = link.split_once("?text=").unwrap();

        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('&'));
        assert!(!encoded.contains('\n'));
        assert!(encoded.contains("%20"));
    }

    #[test]
    fn should_treat_blank_location_as_missing() {
        let intent = OrderIntent {
            location: Some("  "),
            ..OrderIntent::new("TV X", PaymentPlan::Cash)
        };

        assert!(intent.message().contains(DEFAULT_LOCATION));
    }

    #[test]
    fn should_not_duplicate_slash_after_base() {
        let link = build_link("https://wa.me/94771234567/", &OrderIntent::new("TV X", PaymentPlan::Cash));
        assert!(link.starts_with("https://wa.me/94771234567/?text="));
    }

    #[test]
    fn should_parse_payment_plan() {
        assert_eq!("installment".parse::<PaymentPlan>(), Ok(PaymentPlan::Installment));
        assert!("crypto".parse::<PaymentPlan>().is_err());
    }
}
