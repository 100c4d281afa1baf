use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use business::domain::catalog::model::{Category, Product};
use business::domain::catalog::repository::{
    CatalogCounts, CatalogRepository, ProductFilter, ProductListing,
};
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductId;

use super::entity::{CATEGORY_COLUMNS, CategoryEntity, PRODUCT_COLUMNS, ProductEntity};

pub struct CatalogRepositoryPostgres {
    pool: PgPool,
}

impl CatalogRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(error: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %error, "catalog query failed");
    RepositoryError::DatabaseError
}

/// Translates a [`ProductFilter`] into a parameterised products query.
fn product_query(filter: &ProductFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!(
        "SELECT {} FROM products WHERE TRUE",
        PRODUCT_COLUMNS
    ));

    if filter.active_only {
        query.push(" AND is_active = TRUE");
    }

    if let Some(category_id) = &filter.category_id {
        query
            .push(" AND category_id = ")
            .push_bind(category_id.as_str().to_string());
    }

    if let Some(exclude_id) = &filter.exclude_id {
        query
            .push(" AND id <> ")
            .push_bind(exclude_id.as_str().to_string());
    }

    let listing = match filter.listing {
        ProductListing::All => " ORDER BY created_at DESC, id",
        ProductListing::Featured => {
            " AND is_featured = TRUE ORDER BY featured_order ASC, created_at DESC, id"
        }
        ProductListing::NewArrivals => {
            " AND is_new = TRUE ORDER BY new_arrival_order ASC, created_at DESC, id"
        }
    };
    query.push(listing);

    if let Some(limit) = filter.limit {
        query
            .push(" LIMIT ")
            .push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
    }

    query
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryPostgres {
    async fn get_product_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products WHERE id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_product_by_slug(&self, slug: &str) -> Result<Product, RepositoryError> {
        // Inactive rows may share a slug with the live one; prefer the active row.
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products WHERE slug = $1 ORDER BY is_active DESC, updated_at DESC LIMIT 1",
            PRODUCT_COLUMNS
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        let entities = product_query(filter)
            .build_query_as::<ProductEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_categories(&self, active_only: bool) -> Result<Vec<Category>, RepositoryError> {
        let entities = sqlx::query_as::<_, CategoryEntity>(&format!(
            "SELECT {} FROM categories WHERE ($1 = FALSE OR is_active = TRUE) \
             ORDER BY display_order ASC, name ASC",
            CATEGORY_COLUMNS
        ))
        .bind(active_only)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_category_by_slug(&self, slug: &str) -> Result<Category, RepositoryError> {
        let entity = sqlx::query_as::<_, CategoryEntity>(&format!(
            "SELECT {} FROM categories WHERE slug = $1",
            CATEGORY_COLUMNS
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn count_catalog(&self) -> Result<CatalogCounts, RepositoryError> {
        let (products, active_products, categories) = sqlx::query_as::<_, (i64, i64, i64)>(
            "SELECT \
                (SELECT COUNT(*) FROM products), \
                (SELECT COUNT(*) FROM products WHERE is_active = TRUE), \
                (SELECT COUNT(*) FROM categories)",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(CatalogCounts {
            products: products.max(0) as u64,
            active_products: active_products.max(0) as u64,
            categories: categories.max(0) as u64,
        })
    }
}
