use crate::core::query::Query;
use crate::utils::error::{Result, SiteError};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Serialize;
use url::Url;

/// Environment variable holding the CMS base URL.
pub const BASE_URL_ENV: &str = "APERTURE_API_BASE_URL";

/// Thin handle around a `reqwest::Client` bound to the CMS base URL.
///
/// Construction never fails: a missing or unparsable base URL is logged and
/// the handle is built without one, so every request through it fails at call
/// time with a configuration error instead. Cloning is cheap; clones share
/// the underlying connection pool.
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    base_url: Option<Url>,
}

impl CmsClient {
    pub fn new(base_url: Option<&str>) -> Self {
        let base_url = match base_url {
            Some(raw) => match Url::parse(raw) {
                Ok(url) => Some(url),
                Err(e) => {
                    tracing::error!("Invalid CMS base URL '{}': {}", raw, e);
                    None
                }
            },
            None => {
                tracing::error!(
                    "{} is not set; requests will fail until a base URL is configured",
                    BASE_URL_ENV
                );
                None
            }
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        // Static header set, the builder cannot fail here.
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("reqwest client with static default headers");

        Self { http, base_url }
    }

    /// Reads the base URL from [`BASE_URL_ENV`] once; absence is logged,
    /// not fatal.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV).ok();
        Self::new(base_url.as_deref())
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_ref().ok_or_else(|| SiteError::ConfigError {
            message: format!("CMS base URL is not configured (set {})", BASE_URL_ENV),
        })?;
        Ok(base.join(path)?)
    }

    /// `GET {base}{path}?{query}`, response returned untransformed. HTTP and
    /// network errors propagate to the caller; nothing is retried or cached.
    pub async fn get(&self, path: &str, query: &Query) -> Result<reqwest::Response> {
        let url = self.endpoint(path)?;
        tracing::debug!("GET {} ({} query params)", url, query.as_params().len());
        let response = self.http.get(url).query(query.as_params()).send().await?;
        tracing::debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// `POST {base}{path}` with a JSON body, response returned untransformed.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response> {
        let url = self.endpoint(path)?;
        tracing::debug!("POST {}", url);
        let response = self.http.post(url).json(body).send().await?;
        tracing::debug!("Response status: {}", response.status());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_base_url_does_not_panic() {
        let client = CmsClient::new(None);
        assert!(client.base_url().is_none());
    }

    #[test]
    fn test_invalid_base_url_degrades_to_none() {
        let client = CmsClient::new(Some("not a url"));
        assert!(client.base_url().is_none());
    }

    #[test]
    fn test_valid_base_url_is_kept() {
        let client = CmsClient::new(Some("http://localhost:1337"));
        assert_eq!(
            client.base_url().map(|u| u.as_str()),
            Some("http://localhost:1337/")
        );
    }
}
