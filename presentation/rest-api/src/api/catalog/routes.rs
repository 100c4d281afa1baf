use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, param::Query, payload::Json};

use business::domain::catalog::use_cases::get_categories::GetCategoriesUseCase;
use business::domain::catalog::use_cases::get_product_page::{
    GetProductPageParams, GetProductPageUseCase,
};
use business::domain::catalog::use_cases::get_products::{GetProductsParams, GetProductsUseCase};
use business::domain::catalog::use_cases::get_stats::GetCatalogStatsUseCase;

use crate::api::catalog::dto::{
    CatalogStatsResponse, CategoryResponse, ProductListingDto, ProductPageResponse,
    ProductResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

const MAX_PAGE_SIZE: u32 = 100;

pub struct CatalogApi {
    get_products_use_case: Arc<dyn GetProductsUseCase>,
    get_product_page_use_case: Arc<dyn GetProductPageUseCase>,
    get_categories_use_case: Arc<dyn GetCategoriesUseCase>,
    get_stats_use_case: Arc<dyn GetCatalogStatsUseCase>,
}

impl CatalogApi {
    pub fn new(
        get_products_use_case: Arc<dyn GetProductsUseCase>,
        get_product_page_use_case: Arc<dyn GetProductPageUseCase>,
        get_categories_use_case: Arc<dyn GetCategoriesUseCase>,
        get_stats_use_case: Arc<dyn GetCatalogStatsUseCase>,
    ) -> Self {
        Self {
            get_products_use_case,
            get_product_page_use_case,
            get_categories_use_case,
            get_stats_use_case,
        }
    }
}

/// Public catalog API
///
/// Read-only views of products and categories with derived pricing.
#[OpenApi]
impl CatalogApi {
    /// List active products
    ///
    /// Optionally narrowed to a category slug and to the featured or
    /// new-arrival listings. Unknown categories yield an empty list.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Catalog")]
    async fn get_products(
        &self,
        category: Query<Option<String>>,
        listing: Query<Option<ProductListingDto>>,
        limit: Query<Option<u32>>,
    ) -> Json<Vec<ProductResponse>> {
        let params = GetProductsParams {
            category_slug: category.0,
            listing: listing.0.map(Into::into).unwrap_or_default(),
            limit: limit.0.map(|l| l.min(MAX_PAGE_SIZE) as usize),
        };

        let products = self.get_products_use_case.execute(params).await;
        Json(products.into_iter().map(Into::into).collect())
    }

    /// Get a product page by slug
    ///
    /// Returns the product with pricing, breadcrumbs, SEO text, JSON-LD and
    /// related products from the same category.
    #[oai(path = "/products/:slug", method = "get", tag = "ApiTags::Catalog")]
    async fn get_product_page(&self, slug: Path<String>) -> GetProductPageResponse {
        match self
            .get_product_page_use_case
            .execute(GetProductPageParams { slug: slug.0 })
            .await
        {
            Ok(page) => GetProductPageResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductPageResponse::NotFound(json),
                    _ => GetProductPageResponse::InternalError(json),
                }
            }
        }
    }

    /// List active categories
    ///
    /// Ordered by display order, each with its resolved icon.
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Catalog")]
    async fn get_categories(&self) -> Json<Vec<CategoryResponse>> {
        let categories = self.get_categories_use_case.execute().await;
        Json(categories.into_iter().map(Into::into).collect())
    }

    /// Catalog statistics
    ///
    /// Zero counts are returned when the catalog cannot be reached.
    #[oai(path = "/stats", method = "get", tag = "ApiTags::Catalog")]
    async fn get_stats(&self) -> Json<CatalogStatsResponse> {
        Json(self.get_stats_use_case.execute().await.into())
    }
}

#[derive(ApiResponse)]
enum GetProductPageResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
