use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, info, warn};

use super::types::{ImageRecord, SearchResponse};
use crate::core::config::ResolvedConfig;

pub const DEFAULT_SEARCH_URL: &str = "https://images-api.nasa.gov/search";

/// Errors that can occur while searching the image archive.
#[derive(Debug)]
pub enum FetchError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The archive answered with a non-success status.
    Api { status: u16, message: String },
    /// The body was not the expected search collection.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can answer "give me page N of category C".
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Returns the name of the source (for logs).
    fn name(&self) -> &str;

    /// Searches one page of a category.
    async fn search(&self, category: &str, page: u32) -> Result<Vec<ImageRecord>, FetchError>;
}

/// Client for the public NASA image search endpoint.
pub struct NasaImageClient {
    base_url: String,
    client: reqwest::Client,
}

impl NasaImageClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// Builds a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout ({e}), using defaults");
                reqwest::Client::new()
            });
        Self { base_url, client }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::with_timeout(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches one page and collapses every failure into an empty list.
    ///
    /// Callers cannot tell "nothing in this category" from "request failed";
    /// use [`ImageSource::search`] when that difference matters.
    pub async fn fetch_images(&self, category: &str, page: u32) -> Vec<ImageRecord> {
        match self.search(category, page).await {
            Ok(records) => records,
            Err(e) => {
                error!("Failed to load images for '{category}' page {page}: {e}");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl ImageSource for NasaImageClient {
    fn name(&self) -> &str {
        "nasa"
    }

    async fn search(&self, category: &str, page: u32) -> Result<Vec<ImageRecord>, FetchError> {
        let page = page.max(1);
        info!("Image search request: q={category}, page={page}");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", category.to_string()), ("page", page.to_string())])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Image search response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Image search API error: {status} - {message}");
            return Err(FetchError::Api { status, message });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        let records = parsed.into_records();
        info!("Image search returned {} records", records.len());
        Ok(records)
    }
}
