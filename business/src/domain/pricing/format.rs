use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};

const CURRENCY_PREFIX: &str = "Rs.";

fn to_cents(amount: &BigDecimal) -> i64 {
    (amount.clone() * BigDecimal::from(100))
        .with_scale_round(0, RoundingMode::HalfUp)
        .to_i64()
        .unwrap_or(0)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Amount with exactly two decimals and no grouping, e.g. `"83333.33"`.
///
/// Used wherever a machine reads the price (structured data, feeds).
pub fn plain_amount(amount: &BigDecimal) -> String {
    let cents = to_cents(amount);
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}

/// Display form for shoppers: `Rs. 83,333.33`, whole amounts drop the decimals (`Rs. 80,000`).
pub fn format_price(amount: &BigDecimal) -> String {
    let cents = to_cents(amount);
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = group_thousands(cents / 100);

    match cents % 100 {
        0 => format!("{} {}{}", CURRENCY_PREFIX, sign, whole),
        fraction => format!("{} {}{}.{:02}", CURRENCY_PREFIX, sign, whole, fraction),
    }
}
