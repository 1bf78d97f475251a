use std::time::Duration;

use reqwest::Url;

use crate::endpoints::{self, Category, DEFAULT_PAGE_SIZE};
use crate::error::ApiError;
use crate::types::{CatalogGameDetail, GamesPage};

/// Stateless HTTP client for the RAWG catalog API. Holds only the shared
/// connection pool, the API key, and the page-size default.
pub struct CatalogClient {
    http: reqwest::Client,
    api_key: String,
    page_size: u32,
}

impl CatalogClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Fetch one page (1-based) of a category feed.
    pub async fn games(&self, category: Category, page: u32) -> Result<GamesPage, ApiError> {
        let url = endpoints::games_url(&self.api_key, category, page, self.page_size);
        self.get_json(url).await
    }

    /// Fetch one page (1-based) of free-text search results.
    pub async fn search(&self, query: &str, page: u32) -> Result<GamesPage, ApiError> {
        let url = endpoints::search_url(&self.api_key, query, page, self.page_size);
        self.get_json(url).await
    }

    /// Fetch the detail payload for a single game.
    pub async fn detail(&self, id: i64) -> Result<CatalogGameDetail, ApiError> {
        let url = endpoints::detail_url(&self.api_key, id);
        self.get_json(url).await
    }

    /// Download raw image bytes from a CDN URL returned in a payload.
    /// No API key is attached.
    pub async fn download_image(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        Ok(resp.bytes().await?.to_vec())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        log::debug!("GET {url}");
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        serde_json::from_str(&text).map_err(|e| {
            let snippet: String = text.chars().take(200).collect();
            ApiError::Decode(format!("{e}. Response: {snippet}"))
        })
    }
}
