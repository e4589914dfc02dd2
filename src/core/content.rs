//! Content-access layer, the adapter between high-level content requests and
//! the CMS REST conventions. Swapping backends means touching only this file.

use crate::core::client::CmsClient;
use crate::core::query::{FilterOp, Query, SortDir};
use crate::domain::model::{NewComment, PhotoCategory};
use crate::domain::ports::{ContentSource, DEFAULT_RECENT_LIMIT};
use crate::utils::error::Result;
use async_trait::async_trait;

const ARTICLES_PATH: &str = "/api/articles";
const COMMENTS_PATH: &str = "/api/comments";
const PHOTOS_PATH: &str = "/api/photos";
const JOURNEYS_PATH: &str = "/api/journeys";

/// Stateless content service over an explicit [`CmsClient`] handle.
#[derive(Debug, Clone)]
pub struct ContentService {
    client: CmsClient,
}

impl ContentService {
    pub fn new(client: CmsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentSource for ContentService {
    async fn get_articles(&self, search_term: Option<&str>) -> Result<reqwest::Response> {
        let mut query = Query::new()
            .populate_flag("cover_image")
            .sort("publishedAt", SortDir::Desc)
            .populate_nested("author", "headshot");

        if let Some(term) = search_term {
            let term = term.trim();
            if !term.is_empty() {
                query = query.filter("title", FilterOp::ContainsInsensitive, term);
            }
        }

        self.client.get(ARTICLES_PATH, &query).await
    }

    async fn get_article_by_slug(&self, slug: &str) -> Result<reqwest::Response> {
        let query = Query::new()
            .filter("slug", FilterOp::Eq, slug)
            .populate_list(&["cover_image", "comments"])
            .populate_nested("author", "headshot");

        self.client.get(ARTICLES_PATH, &query).await
    }

    async fn post_comment(
        &self,
        article_id: u64,
        author: &str,
        content: &str,
    ) -> Result<reqwest::Response> {
        let comment = NewComment::new(article_id, author, content);
        self.client.post_json(COMMENTS_PATH, &comment).await
    }

    async fn get_photos_by_category(
        &self,
        category: PhotoCategory,
    ) -> Result<reqwest::Response> {
        let query = Query::new()
            .populate("image")
            .filter("category", FilterOp::Eq, category.as_str());

        self.client.get(PHOTOS_PATH, &query).await
    }

    async fn get_journeys(&self) -> Result<reqwest::Response> {
        let query = Query::new().populate("cover_image").sort("date", SortDir::Desc);

        self.client.get(JOURNEYS_PATH, &query).await
    }

    async fn get_journey_by_slug(&self, slug: &str) -> Result<reqwest::Response> {
        let query = Query::new()
            .filter("slug", FilterOp::Eq, slug)
            .populate_nested("photos", "image");

        self.client.get(JOURNEYS_PATH, &query).await
    }

    async fn get_recent_articles(
        &self,
        current_slug: &str,
        limit: Option<u32>,
    ) -> Result<reqwest::Response> {
        let query = Query::new()
            .populate("cover_image")
            .filter("slug", FilterOp::Ne, current_slug)
            .limit(limit.unwrap_or(DEFAULT_RECENT_LIMIT))
            .sort("publishedAt", SortDir::Desc);

        self.client.get(ARTICLES_PATH, &query).await
    }
}
