use crate::domain::model::PhotoCategory;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Port for the content backend. The production implementation talks to the
/// CMS over REST; responses are returned untransformed so callers decide how
/// to interpret (or ignore) the payload.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Lists articles, newest first. A non-empty `search_term` (after
    /// trimming) narrows the list with a case-insensitive title match.
    async fn get_articles(&self, search_term: Option<&str>) -> Result<reqwest::Response>;

    /// Fetches articles filtered by exact slug. Slug uniqueness is assumed,
    /// not enforced; zero or multiple results are the caller's problem.
    async fn get_article_by_slug(&self, slug: &str) -> Result<reqwest::Response>;

    /// Creates a comment linked to an article. No input validation.
    async fn post_comment(
        &self,
        article_id: u64,
        author: &str,
        content: &str,
    ) -> Result<reqwest::Response>;

    async fn get_photos_by_category(&self, category: PhotoCategory)
        -> Result<reqwest::Response>;

    async fn get_journeys(&self) -> Result<reqwest::Response>;

    async fn get_journey_by_slug(&self, slug: &str) -> Result<reqwest::Response>;

    /// Lists recent articles excluding `current_slug`, capped at `limit`
    /// (defaults to [`DEFAULT_RECENT_LIMIT`] when `None`).
    async fn get_recent_articles(
        &self,
        current_slug: &str,
        limit: Option<u32>,
    ) -> Result<reqwest::Response>;
}

pub const DEFAULT_RECENT_LIMIT: u32 = 3;
