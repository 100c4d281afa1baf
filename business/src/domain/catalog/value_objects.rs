use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    #[default]
    InStock,
    OutOfStock,
    PreOrder,
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::InStock => write!(f, "in_stock"),
            StockStatus::OutOfStock => write!(f, "out_of_stock"),
            StockStatus::PreOrder => write!(f, "pre_order"),
        }
    }
}

impl std::str::FromStr for StockStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_stock" => Ok(StockStatus::InStock),
            "out_of_stock" => Ok(StockStatus::OutOfStock),
            "pre_order" => Ok(StockStatus::PreOrder),
            _ => Err(format!("Invalid stock status: {}", s)),
        }
    }
}

/// Icon shown next to a category. Keys stored on categories resolve through
/// a fixed table; anything unknown renders as [`CategoryIcon::Package`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    Television,
    Sofa,
    Bed,
    Refrigerator,
    WashingMachine,
    AirConditioner,
    Smartphone,
    Laptop,
    Chair,
    Table,
    Kitchen,
    Fan,
    Speaker,
    Package,
}

impl CategoryIcon {
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "tv" | "television" => CategoryIcon::Television,
            "sofa" | "couch" => CategoryIcon::Sofa,
            "bed" => CategoryIcon::Bed,
            "fridge" | "refrigerator" => CategoryIcon::Refrigerator,
            "washing-machine" => CategoryIcon::WashingMachine,
            "air-conditioner" | "ac" => CategoryIcon::AirConditioner,
            "phone" | "smartphone" => CategoryIcon::Smartphone,
            "laptop" => CategoryIcon::Laptop,
            "chair" => CategoryIcon::Chair,
            "table" => CategoryIcon::Table,
            "kitchen" => CategoryIcon::Kitchen,
            "fan" => CategoryIcon::Fan,
            "speaker" | "audio" => CategoryIcon::Speaker,
            _ => CategoryIcon::Package,
        }
    }

    /// Stable identifier handed to the UI's icon set.
    pub fn identifier(&self) -> &'static str {
        match self {
            CategoryIcon::Television => "tv",
            CategoryIcon::Sofa => "sofa",
            CategoryIcon::Bed => "bed-double",
            CategoryIcon::Refrigerator => "refrigerator",
            CategoryIcon::WashingMachine => "washing-machine",
            CategoryIcon::AirConditioner => "air-vent",
            CategoryIcon::Smartphone => "smartphone",
            CategoryIcon::Laptop => "laptop",
            CategoryIcon::Chair => "armchair",
            CategoryIcon::Table => "table",
            CategoryIcon::Kitchen => "cooking-pot",
            CategoryIcon::Fan => "fan",
            CategoryIcon::Speaker => "speaker",
            CategoryIcon::Package => "package",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_stock_status_from_storage_value() {
        assert_eq!("pre_order".parse::<StockStatus>(), Ok(StockStatus::PreOrder));
        assert!("sold".parse::<StockStatus>().is_err());
    }

    #[test]
    fn should_resolve_known_icon_keys() {
        assert_eq!(CategoryIcon::from_key("tv"), CategoryIcon::Television);
        assert_eq!(CategoryIcon::from_key(" Sofa "), CategoryIcon::Sofa);
        assert_eq!(CategoryIcon::from_key("fridge").identifier(), "refrigerator");
    }

    #[test]
    fn should_fall_back_to_package_icon_for_unknown_keys() {
        assert_eq!(CategoryIcon::from_key("hoverboard"), CategoryIcon::Package);
        assert_eq!(CategoryIcon::from_key("").identifier(), "package");
    }
}
