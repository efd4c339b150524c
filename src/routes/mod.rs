// Route exports
pub mod api;
pub mod pages;

use actix_web::web;
use std::sync::Arc;

use crate::controller::ControllerSettings;
use crate::map::TileLayer;
use crate::services::DataProvider;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn DataProvider>,
    pub controller: ControllerSettings,
    pub tiles: TileLayer,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1").configure(api::configure));
    pages::configure(cfg);
}
