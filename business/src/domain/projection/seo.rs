use serde::Serialize;

use crate::domain::catalog::model::Product;
use crate::domain::pricing::format::format_price;

const DESCRIPTION_LIMIT: usize = 160;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoText {
    pub title: String,
    pub description: String,
}

fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let kept: String = text.chars().take(limit.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

/// Page title and meta description for a product page.
///
/// Title: `"{brand} {name} | {cash price}"`, brand left out when unset.
/// Description: the product description (or its name) followed by the cash
/// price and installment offer, capped at 160 characters.
pub fn seo_text(product: &Product) -> SeoText {
    let pricing = product.pricing();
    let cash = format_price(&pricing.cash_price);

    let display_name = match product.brand_name() {
        Some(brand) if !product.name.starts_with(brand) => format!("{} {}", brand, product.name),
        _ => product.name.clone(),
    };

    let lead = product
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(product.name.as_str());
    let lead = lead.trim_end_matches('.');

    let description = format!(
        "{}. Buy for {} cash or {} x {} months.",
        lead,
        cash,
        format_price(&pricing.monthly_installment),
        pricing.installment_months
    );

    SeoText {
        title: format!("{} | {}", display_name, cash),
        description: truncate_chars(&description, DESCRIPTION_LIMIT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::fixtures::product;

    #[test]
    fn should_combine_brand_name_and_cash_price_in_title() {
        let mut tv = product("p1", "tv-x", "100000");
        tv.name = "QLED 55".to_string();
        tv.brand = Some("Samsung".to_string());

        let seo = seo_text(&tv);

        assert_eq!(seo.title, "Samsung QLED 55 | Rs. 80,000");
    }

    #[test]
    fn should_not_repeat_brand_already_in_name() {
        let mut tv = product("p1", "tv-x", "100000");
        tv.name = "Samsung QLED 55".to_string();
        tv.brand = Some("Samsung".to_string());

        assert_eq!(seo_text(&tv).title, "Samsung QLED 55 | Rs. 80,000");
    }

    #[test]
    fn should_fall_back_to_name_when_description_missing() {
        let mut sofa = product("p2", "sofa-y", "1200");
        sofa.name = "Corner Sofa".to_string();

        let seo = seo_text(&sofa);

        assert_eq!(seo.title, "Corner Sofa | Rs. 960");
        assert_eq!(
            seo.description,
            "Corner Sofa. Buy for Rs. 960 cash or Rs. 100 x 12 months."
        );
    }

    #[test]
    fn should_be_deterministic() {
        let tv = product("p1", "tv-x", "1000");
        assert_eq!(seo_text(&tv), seo_text(&tv));
    }

    #[test]
    fn should_cap_description_length() {
        let mut tv = product("p1", "tv-x", "1000");
        tv.description = Some("Ultra-wide ".repeat(40));

        let seo = seo_text(&tv);

        assert!(seo.description.chars().count() <= DESCRIPTION_LIMIT);
        assert!(seo.description.ends_with("..."));
    }
}
