use async_trait::async_trait;

use crate::domain::catalog::model::Category;

#[async_trait]
pub trait GetCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Category>;
}
