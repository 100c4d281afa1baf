use std::sync::Arc;

use logger::TracingLogger;
use persistence::catalog::repository::CatalogRepositoryPostgres;

use business::application::catalog::get_categories::GetCategoriesUseCaseImpl;
use business::application::catalog::get_product_page::GetProductPageUseCaseImpl;
use business::application::catalog::get_products::GetProductsUseCaseImpl;
use business::application::catalog::get_sitemap::GetSitemapUseCaseImpl;
use business::application::catalog::get_stats::GetCatalogStatsUseCaseImpl;
use business::application::order_intent::build_link::BuildOrderLinkUseCaseImpl;
use business::domain::catalog::use_cases::get_sitemap::GetSitemapUseCase;

use crate::api::catalog::routes::CatalogApi;
use crate::api::health::routes::HealthApi;
use crate::api::order_link::routes::OrderLinkApi;
use crate::api::sitemap::routes::SitemapApi;
use crate::api::store::routes::StoreApi;
use crate::config::storefront_config::StorefrontConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub catalog_api: CatalogApi,
    pub sitemap_api: SitemapApi,
    pub store_api: StoreApi,
    pub order_link_api: OrderLinkApi,
    /// Shared with the `sitemap.xml` handler.
    pub sitemap_use_case: Arc<dyn GetSitemapUseCase>,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, storefront: StorefrontConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let site = Arc::new(storefront.site);

        // Infrastructure adapters
        let repository = Arc::new(CatalogRepositoryPostgres::new(pool));

        // Catalog use cases
        let get_products_use_case = Arc::new(GetProductsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_product_page_use_case = Arc::new(GetProductPageUseCaseImpl {
            repository: repository.clone(),
            site: site.clone(),
            logger: logger.clone(),
        });
        let get_categories_use_case = Arc::new(GetCategoriesUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_stats_use_case = Arc::new(GetCatalogStatsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let sitemap_use_case: Arc<dyn GetSitemapUseCase> = Arc::new(GetSitemapUseCaseImpl {
            repository: repository.clone(),
            site: site.clone(),
            logger: logger.clone(),
        });

        // Order intent use cases
        let build_link_use_case = Arc::new(BuildOrderLinkUseCaseImpl {
            repository,
            site: site.clone(),
            messaging_base: storefront.messaging_base,
            logger,
        });

        Self {
            health_api: HealthApi::new(),
            catalog_api: CatalogApi::new(
                get_products_use_case,
                get_product_page_use_case,
                get_categories_use_case,
                get_stats_use_case,
            ),
            sitemap_api: SitemapApi::new(sitemap_use_case.clone()),
            store_api: StoreApi::new(site),
            order_link_api: OrderLinkApi::new(build_link_use_case, storefront.default_location),
            sitemap_use_case,
        }
    }
}
