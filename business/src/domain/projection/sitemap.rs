use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::domain::catalog::model::{Category, Product};

use super::site::{absolute_url, category_path, product_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl std::fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeFrequency::Daily => write!(f, "daily"),
            ChangeFrequency::Weekly => write!(f, "weekly"),
            ChangeFrequency::Monthly => write!(f, "monthly"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Home and catalog root, then every active product and active category.
///
/// Static pages are stamped with `now`; records carry their own `updated_at`.
pub fn sitemap_entries(
    products: &[Product],
    categories: &[Category],
    base_url: &str,
    now: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let mut entries = vec![
        SitemapEntry {
            url: absolute_url(base_url, "/"),
            last_modified: now,
            change_frequency: ChangeFrequency::Daily,
            priority: 1.0,
        },
        SitemapEntry {
            url: absolute_url(base_url, "/products"),
            last_modified: now,
            change_frequency: ChangeFrequency::Daily,
            priority: 0.9,
        },
    ];

    entries.extend(products.iter().filter(|p| p.is_active).map(|p| SitemapEntry {
        url: absolute_url(base_url, &product_path(&p.slug)),
        last_modified: p.updated_at,
        change_frequency: ChangeFrequency::Weekly,
        priority: 0.8,
    }));

    entries.extend(categories.iter().filter(|c| c.is_active).map(|c| SitemapEntry {
        url: absolute_url(base_url, &category_path(&c.slug)),
        last_modified: c.updated_at,
        change_frequency: ChangeFrequency::Weekly,
        priority: 0.7,
    }));

    entries
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// sitemaps.org `urlset` document for `entries`.
pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape_xml(&entry.url),
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
            entry.change_frequency,
            entry.priority,
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}
