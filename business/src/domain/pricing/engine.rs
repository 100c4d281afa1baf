use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive, Zero};
use serde::Serialize;

/// Term used when a product has no valid installment term.
pub const DEFAULT_INSTALLMENT_MONTHS: i32 = 12;

/// Discount granted for full cash payment, in percent of the base price (rate 0.20).
pub const DEFAULT_DISCOUNT_PERCENT: i32 = 20;

/// Smallest currency unit, in decimal places.
const CURRENCY_SCALE: i64 = 2;

/// Customer-facing prices derived from one stored base price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub base_price: BigDecimal,
    pub cash_price: BigDecimal,
    pub monthly_installment: BigDecimal,
    pub installment_months: i32,
    pub savings_percent: u32,
}

impl PriceBreakdown {
    fn zero(installment_months: i32) -> Self {
        Self {
            base_price: BigDecimal::zero(),
            cash_price: BigDecimal::zero(),
            monthly_installment: BigDecimal::zero(),
            installment_months,
            savings_percent: 0,
        }
    }

    /// False for the clamped result of an invalid base price; such prices must not be shown.
    pub fn is_displayable(&self) -> bool {
        self.base_price > BigDecimal::zero()
    }
}

pub fn effective_installment_months(installment_months: Option<i32>) -> i32 {
    match installment_months {
        Some(months) if months >= 1 => months,
        _ => DEFAULT_INSTALLMENT_MONTHS,
    }
}

/// Cash price implied by the default discount rule.
pub fn discounted_cash_price(base_price: &BigDecimal) -> BigDecimal {
    (base_price.clone() * BigDecimal::from(100 - DEFAULT_DISCOUNT_PERCENT) / BigDecimal::from(100))
        .with_scale_round(CURRENCY_SCALE, RoundingMode::HalfUp)
}

/// Derives cash price, monthly installment and savings from a base price.
///
/// A stored cash price wins when it is positive and not above the base price;
/// otherwise the default discount applies. A non-positive base price clamps
/// every amount to zero.
pub fn derive_pricing(
    base_price: &BigDecimal,
    installment_months: Option<i32>,
    stored_cash_price: Option<&BigDecimal>,
) -> PriceBreakdown {
    let months = effective_installment_months(installment_months);
    let zero = BigDecimal::zero();

    if base_price <= &zero {
        return PriceBreakdown::zero(months);
    }

    let cash_price = match stored_cash_price {
        Some(stored) if stored > &zero && stored <= base_price => stored.clone(),
        _ => discounted_cash_price(base_price),
    };

    let monthly_installment = (base_price.clone() / BigDecimal::from(months))
        .with_scale_round(CURRENCY_SCALE, RoundingMode::HalfUp);

    let savings_percent = ((base_price.clone() - cash_price.clone()) * BigDecimal::from(100)
        / base_price.clone())
    .with_scale_round(0, RoundingMode::HalfUp)
    .to_u32()
    .unwrap_or(0);

    PriceBreakdown {
        base_price: base_price.clone(),
        cash_price,
        monthly_installment,
        installment_months: months,
        savings_percent,
    }
}
