use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::models::Restaurant;
use crate::services::provider::{DataProvider, ProviderError};

const RESTAURANTS_KEY: &str = "restaurants";

/// In-memory caching wrapper around another provider
///
/// Only the full restaurant list is cached; neighborhoods, cuisines,
/// filtered listings and lookups are derived from it, so one cached
/// document serves every operation until the TTL expires.
pub struct CachedProvider<P> {
    inner: P,
    cache: moka::future::Cache<String, Arc<Vec<Restaurant>>>,
    ttl_secs: u64,
}

impl<P: DataProvider> CachedProvider<P> {
    pub fn new(inner: P, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(1)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            inner,
            cache,
            ttl_secs,
        }
    }

    /// Drop the cached document so the next fetch goes to the inner provider
    pub async fn invalidate(&self) {
        self.cache.invalidate(RESTAURANTS_KEY).await;
        tracing::debug!("Invalidated cached restaurants for {}", self.inner.name());
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: DataProvider> DataProvider for CachedProvider<P> {
    async fn fetch_restaurants(&self) -> Result<Vec<Restaurant>, ProviderError> {
        if let Some(restaurants) = self.cache.get(RESTAURANTS_KEY).await {
            tracing::trace!("Cache hit: {}", RESTAURANTS_KEY);
            return Ok(restaurants.as_ref().clone());
        }

        tracing::trace!("Cache miss: {}", RESTAURANTS_KEY);
        let restaurants = self.inner.fetch_restaurants().await?;
        self.cache
            .insert(RESTAURANTS_KEY.to_string(), Arc::new(restaurants.clone()))
            .await;
        Ok(restaurants)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
