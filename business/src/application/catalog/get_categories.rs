use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::model::Category;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_categories::GetCategoriesUseCase;
use crate::domain::logger::Logger;

pub struct GetCategoriesUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoriesUseCase for GetCategoriesUseCaseImpl {
    async fn execute(&self) -> Vec<Category> {
        self.logger.info("Fetching active categories");
        let mut categories = match self.repository.get_categories(true).await {
            Ok(categories) => categories,
            Err(e) => {
                self.logger.recovered("Listing categories", &e);
                return Vec::new();
            }
        };

        categories.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.name.cmp(&b.name))
        });
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::Product;
    use crate::domain::catalog::model::fixtures::category;
    use crate::domain::catalog::repository::{CatalogCounts, ProductFilter};
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
    async fn should_return_active_categories_in_display_order() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_get_categories()
            .withf(|active_only| *active_only)
            .returning(|_| {
                let mut beds = category("c2", "beds", None);
                beds.display_order = 2;
                let mut sofas = category("c1", "sofas", None);
                sofas.display_order = 1;
                Ok(vec![beds, sofas])
            });

        let use_case = GetCategoriesUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let slugs: Vec<String> = use_case.execute().await.into_iter().map(|c| c.slug).collect();

        assert_eq!(slugs, vec!["sofas", "beds"]);
    }

    #[tokio::test]
    async fn should_degrade_to_empty_list_when_repository_fails() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_get_categories()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetCategoriesUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute().await.is_empty());
    }
}
