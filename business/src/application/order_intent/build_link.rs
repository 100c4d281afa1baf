use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order_intent::link::{OrderIntent, build_link};
use crate::domain::order_intent::use_cases::build_link::{
    BuildOrderLinkParams, BuildOrderLinkUseCase, OrderLink,
};
use crate::domain::projection::site::SiteProfile;

pub struct BuildOrderLinkUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub site: Arc<SiteProfile>,
    /// Messaging deep-link endpoint, e.g. `https://wa.me/94771234567`.
    pub messaging_base: String,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BuildOrderLinkUseCase for BuildOrderLinkUseCaseImpl {
    async fn execute(&self, params: BuildOrderLinkParams) -> Result<OrderLink, CatalogError> {
        let product = self
            .repository
            .get_product_by_id(&params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CatalogError::ProductNotFound,
                other => CatalogError::Repository(other),
            })?;

        let product_url = self.site.product_url(&product.slug);
        let intent = OrderIntent {
            product_name: &product.name,
            plan: params.plan,
            location: params.location.as_deref(),
            product_url: Some(&product_url),
        };

        self.logger.info(&format!(
            "Order link built for product {} ({} plan)",
            product.id, params.plan
        ));

        Ok(OrderLink {
            url: build_link(&self.messaging_base, &intent),
            message: intent.message(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::fixtures::product;
    use crate::domain::catalog::model::{Category, Product};
    use crate::domain::catalog::repository::{CatalogCounts, ProductFilter};
    use crate::domain::order_intent::link::PaymentPlan;
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

    fn use_case(repo: MockCatalogRepo) -> BuildOrderLinkUseCaseImpl {
        BuildOrderLinkUseCaseImpl {
            repository: Arc::new(repo),
            site: Arc::new(SiteProfile::new("https://shop.lk", "Lanka Living")),
            messaging_base: "https://wa.me/94771234567".to_string(),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_build_link_for_existing_product() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_get_product_by_id()
            .withf(|id| id.as_str() == "p1")
            .returning(|_| {
                let mut tv = product("p1", "tv-x", "1000");
                tv.name = "TV X".to_string();
                Ok(tv)
            });

        let link = use_case(repo)
            .execute(BuildOrderLinkParams {
                product_id: ProductId::new("p1"),
                plan: PaymentPlan::Installment,
                location: Some("Galle".to_string()),
            })
            .await
            .unwrap();

        assert!(link.url.starts_with("https://wa.me/94771234567/?text="));
        assert!(link.message.contains("TV X"));
        assert!(link.message.contains("12-month installment plan"));
        assert!(link.message.contains("Galle"));
        assert!(link.message.contains("https://shop.lk/products/tv-x"));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_product() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_get_product_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = use_case(repo)
            .execute(BuildOrderLinkParams {
                product_id: ProductId::new("nope"),
                plan: PaymentPlan::Cash,
                location: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CatalogError::ProductNotFound));
    }
}
