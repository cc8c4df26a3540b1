//! Typed HTTP client for the content API.

use std::time::Duration;

use marquee_model::{ContentCatalog, ContentResponse, SearchResponse};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded with status {status}")]
    Status { status: u16 },

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Server reported failure for {endpoint}")]
    Unsuccessful { endpoint: &'static str },
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone)]
pub struct CatalogClient {
    base: Url,
    http: reqwest::Client,
}

impl CatalogClient {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Client rooted at `base`, e.g. `http://localhost:3000`.
    pub fn new(base: &str) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Self::DEFAULT_TIMEOUT)
            .build()?;
        Self::with_client(base, http)
    }

    pub fn with_client(base: &str, http: reqwest::Client) -> ClientResult<Self> {
        let mut base = Url::parse(base)?;
        // `Url::join` drops the last segment unless the path ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Fetches every catalog section.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn fetch_content(&self) -> ClientResult<ContentCatalog> {
        let url = self.base.join("api/content")?;
        let response: ContentResponse = self.get_json(url).await?;
        if !response.success {
            return Err(ClientError::Unsuccessful {
                endpoint: "/api/content",
            });
        }
        debug!(sections = response.data.sections.len(), "content fetched");
        Ok(response.data)
    }

    /// Runs a title search. The query is sent as-is; callers trim it.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn search(&self, query: &str) -> ClientResult<SearchResponse> {
        let mut url = self.base.join("api/search")?;
        url.query_pairs_mut().append_pair("q", query);
        let response: SearchResponse = self.get_json(url).await?;
        if !response.success {
            return Err(ClientError::Unsuccessful {
                endpoint: "/api/search",
            });
        }
        debug!(count = response.count, "search completed");
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ClientResult<T> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let client = CatalogClient::new("http://localhost:3000/catalog")
            .expect("valid base");
        assert_eq!(client.base_url().as_str(), "http://localhost:3000/catalog/");
        assert_eq!(
            client.base_url().join("api/content").expect("join").as_str(),
            "http://localhost:3000/catalog/api/content"
        );
    }

    #[test]
    fn rejects_malformed_base() {
        assert!(matches!(
            CatalogClient::new("not a url"),
            Err(ClientError::Url(_))
        ));
    }
}
