use poem::{EndpointExt, Route, Server as PoemServer, get, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::api::sitemap::routes::sitemap_xml;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.catalog_api,
                container.sitemap_api,
                container.store_api,
                container.order_link_api,
            ),
            "Storefront API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .at(
                "/sitemap.xml",
                get(sitemap_xml).data(container.sitemap_use_case),
            )
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .nest("/", api_service)
            .with(config.cors)
            .with(Tracing);

        tracing::info!(address = %addr, "storefront api listening");
        tracing::info!("swagger ui at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
