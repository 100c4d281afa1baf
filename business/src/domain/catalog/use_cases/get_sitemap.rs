use async_trait::async_trait;

use crate::domain::projection::sitemap::SitemapEntry;

#[async_trait]
pub trait GetSitemapUseCase: Send + Sync {
    async fn execute(&self) -> Vec<SitemapEntry>;
}
