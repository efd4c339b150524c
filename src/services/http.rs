use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::models::{Restaurant, RestaurantDocument};
use crate::services::provider::{DataProvider, ProviderError};

/// Fetches the restaurants document from a remote URL
///
/// The remote is expected to serve the same `{"restaurants": [...]}`
/// document as the file provider reads; filtering happens locally.
pub struct HttpProvider {
    url: String,
    client: Client,
}

impl HttpProvider {
    /// Create a new HTTP provider
    pub fn new(url: String, timeout_secs: u64) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { url, client })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DataProvider for HttpProvider {
    async fn fetch_restaurants(&self) -> Result<Vec<Restaurant>, ProviderError> {
        tracing::debug!("Fetching restaurants from: {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Restaurant source {} returned {}", self.url, status);
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let document: RestaurantDocument = serde_json::from_slice(&body)?;

        tracing::debug!("Fetched {} restaurants", document.restaurants.len());
        Ok(document.restaurants)
    }

    fn name(&self) -> &str {
        "http"
    }
}
