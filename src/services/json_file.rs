use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::models::{Restaurant, RestaurantDocument};
use crate::services::provider::{DataProvider, ProviderError};

/// Reads the restaurants document from a local JSON file on every fetch
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DataProvider for JsonFileProvider {
    async fn fetch_restaurants(&self) -> Result<Vec<Restaurant>, ProviderError> {
        tracing::debug!("Reading restaurants from {}", self.path.display());
        let bytes = tokio::fs::read(&self.path).await?;
        let document: RestaurantDocument = serde_json::from_slice(&bytes)?;
        tracing::debug!("Loaded {} restaurants", document.restaurants.len());
        Ok(document.restaurants)
    }

    fn name(&self) -> &str {
        "json-file"
    }
}
