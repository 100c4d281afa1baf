use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::catalog::fetch::LatestFetch;
use crate::domain::catalog::use_cases::get_product_page::{
    GetProductPageParams, GetProductPageUseCase, ProductPage,
};
use crate::domain::logger::Logger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// The fetch failed; the current page was cleared.
    Failed,
    /// A newer load started while this one was in flight; its result was dropped.
    Superseded,
}

struct LoaderState {
    fetch: LatestFetch<String>,
    page: Option<ProductPage>,
}

/// Holds the product page for the slug the shopper navigated to last.
///
/// Loads for earlier slugs that resolve late never overwrite a newer page.
pub struct ProductPageLoader {
    use_case: Arc<dyn GetProductPageUseCase>,
    logger: Arc<dyn Logger>,
    state: Mutex<LoaderState>,
}

impl ProductPageLoader {
    pub fn new(use_case: Arc<dyn GetProductPageUseCase>, logger: Arc<dyn Logger>) -> Self {
        Self {
            use_case,
            logger,
            state: Mutex::new(LoaderState {
                fetch: LatestFetch::new(),
                page: None,
            }),
        }
    }

    pub async fn load(&self, slug: &str) -> LoadOutcome {
        let ticket = self.lock().fetch.begin(slug.to_string());

        let result = self
            .use_case
            .execute(GetProductPageParams {
                slug: slug.to_string(),
            })
            .await;

        let mut state = self.lock();
        if !state.fetch.is_current(&ticket) {
            self.logger
                .debug(&format!("Discarding stale product page for {}", ticket.key()));
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(page) => {
                state.page = Some(page);
                LoadOutcome::Applied
            }
            Err(e) => {
                state.page = None;
                self.logger.recovered("Loading product page", &e);
                LoadOutcome::Failed
            }
        }
    }

    pub fn current(&self) -> Option<ProductPage> {
        self.lock().page.clone()
    }

    fn lock(&self) -> MutexGuard<'_, LoaderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::errors::CatalogError;
    use crate::domain::catalog::model::fixtures::product;
    use crate::domain::projection::seo::seo_text;
    use crate::domain::projection::site::SiteProfile;
    use crate::domain::projection::structured_data::{
        breadcrumb_structured_data, product_structured_data,
    };
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
    use tokio::sync::Notify;

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

    fn page_for(slug: &str) -> ProductPage {
        let item = product(slug, slug, "1000");
        let site = SiteProfile::new("https://shop.lk", "Lanka Living");
        ProductPage {
            pricing: item.pricing(),
            category: None,
            breadcrumbs: Vec::new(),
            seo: seo_text(&item),
            product_json_ld: product_structured_data(&item, &site, Utc::now()),
            breadcrumb_json_ld: breadcrumb_structured_data(&[], &site.base_url),
            related: Vec::new(),
            product: item,
        }
    }

    /// Resolves `slow` only after `gate` is opened; everything else resolves at once.
    struct GatedPages {
        slow: &'static str,
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl GetProductPageUseCase for GatedPages {
        async fn execute(&self, params: GetProductPageParams) -> Result<ProductPage, CatalogError> {
            if params.slug == self.slow {
                self.gate.notified().await;
            }
            if params.slug == "missing" {
                return Err(CatalogError::ProductNotFound);
            }
            Ok(page_for(&params.slug))
        }
    }

    fn loader(slow: &'static str, gate: Arc<Notify>) -> ProductPageLoader {
        ProductPageLoader::new(Arc::new(GatedPages { slow, gate }), mock_logger())
    }

    #[tokio::test]
    async fn should_apply_loaded_page() {
        let loader = loader("none", Arc::new(Notify::new()));

        assert_eq!(loader.load("tv-x").await, LoadOutcome::Applied);
        assert_eq!(loader.current().unwrap().product.slug, "tv-x");
    }

    #[tokio::test]
    async fn should_discard_stale_page_resolving_after_newer_one() {
        let gate = Arc::new(Notify::new());
        let loader = loader("tv-x", gate.clone());

        let (old, new) = tokio::join!(loader.load("tv-x"), async {
            let outcome = loader.load("sofa-y").await;
            gate.notify_one();
            outcome
        });

        assert_eq!(old, LoadOutcome::Superseded);
        assert_eq!(new, LoadOutcome::Applied);
        assert_eq!(loader.current().unwrap().product.slug, "sofa-y");
    }

    #[tokio::test]
    async fn should_clear_page_when_load_fails() {
        let loader = loader("none", Arc::new(Notify::new()));
        loader.load("tv-x").await;

        assert_eq!(loader.load("missing").await, LoadOutcome::Failed);
        assert!(loader.current().is_none());
    }
}
