use async_trait::async_trait;

use crate::domain::catalog::repository::CatalogCounts;

#[async_trait]
pub trait GetCatalogStatsUseCase: Send + Sync {
    async fn execute(&self) -> CatalogCounts;
}
