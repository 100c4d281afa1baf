use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::repository::{CatalogCounts, CatalogRepository};
use crate::domain::catalog::use_cases::get_stats::GetCatalogStatsUseCase;
use crate::domain::logger::Logger;

pub struct GetCatalogStatsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCatalogStatsUseCase for GetCatalogStatsUseCaseImpl {
    async fn execute(&self) -> CatalogCounts {
        self.repository.count_catalog().await.unwrap_or_else(|e| {
            self.logger.recovered("Counting catalog", &e);
            CatalogCounts::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::{Category, Product};
    use crate::domain::catalog::repository::ProductFilter;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::ProductId;
    use mockall::mock;

    mock! {
        pub CatalogRepo {}

        #[async_trait]
        impl CatalogRepository for CatalogRepo {
            async fn get_product_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
            async fn get_product_by_slug(&self, slug: &str) -> Result<Product, RepositoryError>;
            async fn find_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
            async fn get_categories(&self, active_only: bool) -> Result<Vec<Category>, RepositoryError>;
            async fn get_category_by_slug(&self, slug: &str) -> Result<Category, RepositoryError>;
            async fn count_catalog(&self) -> Result<CatalogCounts, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_catalog_counts() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_count_catalog().returning(|| {
            Ok(CatalogCounts {
                products: 12,
                active_products: 10,
                categories: 4,
            })
        });

        let use_case = GetCatalogStatsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let counts = use_case.execute().await;

        assert_eq!(counts.products, 12);
        assert_eq!(counts.active_products, 10);
        assert_eq!(counts.categories, 4);
    }

    #[tokio::test]
    async fn should_report_zero_counts_when_repository_fails() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_count_catalog()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = GetCatalogStatsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        assert_eq!(use_case.execute().await, CatalogCounts::default());
    }
}
