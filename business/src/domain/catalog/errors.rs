#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.name_empty")]
    NameEmpty,
    #[error("catalog.invalid_slug")]
    InvalidSlug,
    #[error("catalog.invalid_base_price")]
    InvalidBasePrice,
    #[error("catalog.cash_price_above_base")]
    CashPriceAboveBase,
    #[error("catalog.invalid_installment_months")]
    InvalidInstallmentMonths,
    #[error("catalog.product_not_found")]
    ProductNotFound,
    #[error("catalog.category_cycle")]
    CategoryCycle,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
