use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::projection::sitemap::SitemapEntry;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SitemapEntryResponse {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    /// "daily" or "weekly"
    pub change_frequency: String,
    pub priority: f32,
}

impl From<SitemapEntry> for SitemapEntryResponse {
    fn from(entry: SitemapEntry) -> Self {
        Self {
            url: entry.url,
            last_modified: entry.last_modified,
            change_frequency: entry.change_frequency.to_string(),
            priority: entry.priority,
        }
    }
}
