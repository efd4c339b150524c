use async_trait::async_trait;
use thiserror::Error;

use crate::core::{filter_restaurants, unique_cuisines, unique_neighborhoods};
use crate::models::{FilterSelection, Restaurant};

/// Errors that can occur while fetching restaurant data
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to read restaurant data: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Data source returned status {0}")]
    Status(u16),

    #[error("Invalid restaurant data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Restaurant does not exist: {0}")]
    NotFound(u32),

    #[error("Data source unavailable: {0}")]
    Unavailable(String),
}

/// Source of restaurants, neighborhoods and cuisines
///
/// Implementors only have to supply `fetch_restaurants`; every other
/// operation is derived from the full restaurant set unless overridden.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetch every restaurant
    async fn fetch_restaurants(&self) -> Result<Vec<Restaurant>, ProviderError>;

    /// Fetch one restaurant by id
    async fn fetch_restaurant_by_id(&self, id: u32) -> Result<Restaurant, ProviderError> {
        self.fetch_restaurants()
            .await?
            .into_iter()
            .find(|restaurant| restaurant.id == id)
            .ok_or(ProviderError::NotFound(id))
    }

    /// Fetch restaurants matching a cuisine and neighborhood, either may be "all"
    async fn fetch_restaurants_by_cuisine_and_neighborhood(
        &self,
        selection: &FilterSelection,
    ) -> Result<Vec<Restaurant>, ProviderError> {
        let restaurants = self.fetch_restaurants().await?;
        Ok(filter_restaurants(&restaurants, selection))
    }

    /// Fetch all distinct neighborhoods
    async fn fetch_neighborhoods(&self) -> Result<Vec<String>, ProviderError> {
        let restaurants = self.fetch_restaurants().await?;
        Ok(unique_neighborhoods(&restaurants))
    }

    /// Fetch all distinct cuisines
    async fn fetch_cuisines(&self) -> Result<Vec<String>, ProviderError> {
        let restaurants = self.fetch_restaurants().await?;
        Ok(unique_cuisines(&restaurants))
    }

    /// Provider name for diagnostics
    fn name(&self) -> &str;
}
