// Service exports
pub mod cache;
pub mod http;
pub mod json_file;
pub mod provider;

pub use cache::CachedProvider;
pub use http::HttpProvider;
pub use json_file::JsonFileProvider;
pub use provider::{DataProvider, ProviderError};

use std::sync::Arc;

use crate::config::{DataSettings, DataSource};

/// Build the configured provider, wrapped in a cache unless the TTL is zero
pub fn build_provider(settings: &DataSettings) -> Result<Arc<dyn DataProvider>, ProviderError> {
    match settings.source {
        DataSource::File => {
            let provider = JsonFileProvider::new(&settings.path);
            tracing::info!("Serving restaurants from file {}", settings.path);
            Ok(with_cache(provider, settings.cache_ttl_secs))
        }
        DataSource::Http => {
            let url = settings.url.clone().ok_or_else(|| {
                ProviderError::Unavailable("data.url is required for the http source".to_string())
            })?;
            tracing::info!("Serving restaurants from {}", url);
            let provider = HttpProvider::new(url, settings.timeout_secs)?;
            Ok(with_cache(provider, settings.cache_ttl_secs))
        }
    }
}

fn with_cache<P: DataProvider + 'static>(provider: P, ttl_secs: u64) -> Arc<dyn DataProvider> {
    if ttl_secs == 0 {
        Arc::new(provider)
    } else {
        Arc::new(CachedProvider::new(provider, ttl_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_source_requires_url() {
        let settings = DataSettings {
            source: DataSource::Http,
            url: None,
            ..DataSettings::default()
        };
        let err = build_provider(&settings).err().unwrap();
        assert!(matches!(err, ProviderError::Unavailable(_)));
    }

    #[test]
    fn test_file_source() {
        let provider = build_provider(&DataSettings::default()).unwrap();
        assert_eq!(provider.name(), "json-file");
    }
}
