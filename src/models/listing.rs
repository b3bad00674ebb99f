use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::slugify;

/// One catalog entry as the backend serves it. Read-only projection;
/// nothing here is ever mutated locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub cover_img: String,
    #[serde(default)]
    pub thumbnail: Vec<String>,
    #[serde(default)]
    pub download_link: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub system_requirements: Option<serde_json::Value>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ListingItem {
    /// Canonical download page path: `/download/<platform>/<title>/<id>`,
    /// both text segments slugified.
    pub fn detail_path(&self) -> String {
        format!(
            "/download/{}/{}/{}",
            slugify(&self.platform),
            slugify(&self.title),
            self.id
        )
    }

    /// First thumbnail, falling back to the cover image.
    pub fn thumb(&self) -> &str {
        self.thumbnail
            .first()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.cover_img)
    }

    /// Release date in the site's `dd.mm.yy` format.
    pub fn release_date(&self) -> String {
        match self.updated_at.or(self.created_at) {
            Some(ts) => ts.format("%d.%m.%y").to_string(),
            None => String::new(),
        }
    }
}

/// One page of catalog results. Older backend deployments used `data`
/// or `games` instead of `apps`; all three decode into `items`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogPage {
    #[serde(rename = "apps", alias = "data", alias = "games", default)]
    pub items: Vec<ListingItem>,
    #[serde(default)]
    pub total: u64,
}

/// `GET /api/apps/get/<id>` envelope.
#[derive(Debug, Deserialize)]
pub struct AppEnvelope {
    pub app: ListingItem,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_page_accepts_legacy_aliases() {
        let body = r#"{"data": [{"_id": "a1", "title": "Doom"}], "total": 3}"#;
        let page: CatalogPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 3);

        let body = r#"{"games": [], "total": 0}"#;
        let page: CatalogPage = serde_json::from_str(body).unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn listing_item_tolerates_missing_fields() {
        let body = r#"{"_id": "x", "title": "Portal"}"#;
        let item: ListingItem = serde_json::from_str(body).unwrap();
        assert!(!item.is_paid);
        assert!(item.thumbnail.is_empty());
        assert_eq!(item.thumb(), "");
    }

    #[test]
    fn detail_path_is_slugified() {
        let item = ListingItem {
            id: "65a1".into(),
            title: "Grand Theft Auto: V".into(),
            platform: "Mac OS".into(),
            category: "mac".into(),
            size: "90 GB".into(),
            is_paid: false,
            price: None,
            cover_img: String::new(),
            thumbnail: vec![],
            download_link: vec![],
            description: String::new(),
            system_requirements: None,
            tags: vec![],
            created_at: None,
            updated_at: None,
        };
        assert_eq!(item.detail_path(), "/download/mac-os/grand-theft-auto-v/65a1");
    }
}
