use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::catalog::repository::{CatalogRepository, ProductFilter};
use crate::domain::catalog::use_cases::get_sitemap::GetSitemapUseCase;
use crate::domain::logger::Logger;
use crate::domain::projection::site::SiteProfile;
use crate::domain::projection::sitemap::{SitemapEntry, sitemap_entries};

pub struct GetSitemapUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub site: Arc<SiteProfile>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSitemapUseCase for GetSitemapUseCaseImpl {
    async fn execute(&self) -> Vec<SitemapEntry> {
        let filter = ProductFilter::active();
        let (products, categories) = tokio::join!(
            self.repository.find_products(&filter),
            self.repository.get_categories(true)
        );

        let products = products.unwrap_or_else(|e| {
            self.logger.recovered("Loading sitemap products", &e);
            Vec::new()
        });
        let categories = categories.unwrap_or_else(|e| {
            self.logger.recovered("Loading sitemap categories", &e);
            Vec::new()
        });

        let entries = sitemap_entries(&products, &categories, &self.site.base_url, Utc::now());
        self.logger
            .debug(&format!("Sitemap built with {} entries", entries.len()));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::fixtures::{category, product};
    use crate::domain::catalog::model::{Category, Product};
    use crate::domain::catalog::repository::CatalogCounts;
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

    fn use_case(repo: MockCatalogRepo) -> GetSitemapUseCaseImpl {
        GetSitemapUseCaseImpl {
            repository: Arc::new(repo),
            site: Arc::new(SiteProfile::new("https://shop.lk", "Lanka Living")),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_list_static_pages_products_and_categories() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_find_products()
            .withf(|filter| filter.active_only)
            .returning(|_| Ok(vec![product("p1", "tv-x", "1000")]));
        repo.expect_get_categories()
            .returning(|_| Ok(vec![category("c1", "televisions", None)]));

        let entries = use_case(repo).execute().await;
        let urls: Vec<&str> = entries.iter().map(|e| e.url.as_str()).collect();

        assert_eq!(
            urls,
            vec![
                "https://shop.lk/",
                "https://shop.lk/products",
                "https://shop.lk/products/tv-x",
                "https://shop.lk/categories/televisions",
            ]
        );
    }

    #[tokio::test]
    async fn should_filter_inactive_records_returned_by_repository() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_find_products().returning(|_| {
            let mut hidden = product("p1", "old-tv", "1000");
            hidden.is_active = false;
            Ok(vec![hidden])
        });
        repo.expect_get_categories().returning(|_| Ok(Vec::new()));

        let entries = use_case(repo).execute().await;

        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn should_keep_static_entries_when_repository_fails() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_find_products()
            .returning(|_| Err(RepositoryError::DatabaseError));
        repo.expect_get_categories()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let entries = use_case(repo).execute().await;

        assert_eq!(entries.len(), 2);
    }
}
