use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::controller::ControllerSettings;
use crate::map::TileLayer;
use crate::models::LatLng;
use crate::view::ImageSettings;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub map: MapSettings,
    #[serde(default)]
    pub images: ImagesSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Where restaurant data comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    File,
    Http,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_data_source")]
    pub source: DataSource,
    #[serde(default = "default_data_path")]
    pub path: String,
    pub url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Cache lifetime of the restaurants document; 0 disables caching
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            source: default_data_source(),
            path: default_data_path(),
            url: None,
            timeout_secs: default_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

fn default_data_source() -> DataSource { DataSource::File }
fn default_data_path() -> String { "data/restaurants.json".to_string() }
fn default_timeout_secs() -> u64 { 30 }
fn default_cache_ttl_secs() -> u64 { 300 }

#[derive(Debug, Clone, Deserialize)]
pub struct MapSettings {
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    #[serde(default = "default_center_lng")]
    pub center_lng: f64,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    #[serde(default = "default_tile_url")]
    pub tile_url: String,
    #[serde(default = "default_attribution")]
    pub attribution: String,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: u8,
    #[serde(default = "default_tile_id")]
    pub tile_id: String,
    #[serde(default)]
    pub access_token: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center_lat: default_center_lat(),
            center_lng: default_center_lng(),
            zoom: default_zoom(),
            tile_url: default_tile_url(),
            attribution: default_attribution(),
            max_zoom: default_max_zoom(),
            tile_id: default_tile_id(),
            access_token: String::new(),
        }
    }
}

fn default_center_lat() -> f64 { crate::controller::DEFAULT_CENTER.lat }
fn default_center_lng() -> f64 { crate::controller::DEFAULT_CENTER.lng }
fn default_zoom() -> u8 { crate::controller::DEFAULT_ZOOM }
fn default_tile_url() -> String {
    "https://api.tiles.mapbox.com/v4/{id}/{z}/{x}/{y}.png?access_token={accessToken}".to_string()
}
fn default_attribution() -> String {
    "Map data &copy; <a href=\"https://www.openstreetmap.org/\">OpenStreetMap</a> contributors, \
     <a href=\"https://creativecommons.org/licenses/by-sa/2.0/\">CC-BY-SA</a>, \
     Imagery &copy; <a href=\"https://www.mapbox.com/\">Mapbox</a>"
        .to_string()
}
fn default_max_zoom() -> u8 { 18 }
fn default_tile_id() -> String { "mapbox.streets".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct ImagesSettings {
    #[serde(default = "default_image_base")]
    pub base_path: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for ImagesSettings {
    fn default() -> Self {
        Self {
            base_path: default_image_base(),
            placeholder: default_placeholder(),
        }
    }
}

fn default_image_base() -> String { "/img/".to_string() }
fn default_placeholder() -> String { "/img/handtinyblack.gif".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with DIRECTORY_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., DIRECTORY__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("DIRECTORY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("DIRECTORY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn tile_layer(&self) -> TileLayer {
        TileLayer {
            url_template: self.map.tile_url.clone(),
            attribution: self.map.attribution.clone(),
            max_zoom: self.map.max_zoom,
            id: self.map.tile_id.clone(),
            access_token: self.map.access_token.clone(),
        }
    }

    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            default_center: LatLng::new(self.map.center_lat, self.map.center_lng),
            default_zoom: self.map.zoom,
            images: ImageSettings {
                base_path: self.images.base_path.clone(),
                placeholder: self.images.placeholder.clone(),
            },
        }
    }
}

/// Apply well-known environment variables on top of the layered config
///
/// `RESTAURANTS_URL` switches the data source to HTTP and
/// `MAPBOX_ACCESS_TOKEN` supplies the tile access token.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let restaurants_url = env::var("RESTAURANTS_URL").ok();
    let access_token = env::var("MAPBOX_ACCESS_TOKEN").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = restaurants_url {
        builder = builder
            .set_override("data.url", url)?
            .set_override("data.source", "http")?;
    }
    if let Some(token) = access_token {
        builder = builder.set_override("map.access_token", token)?;
    }

    builder.build()
}
