//! Restaurant Directory - filterable restaurant list with map markers
//!
//! A view controller keeps a rendered restaurant list and a map widget's
//! markers in step with a (cuisine, neighborhood) filter selection, over
//! pluggable data providers. The accompanying service renders the directory
//! and detail pages and exposes the restaurant data as JSON.

pub mod config;
pub mod controller;
pub mod core;
pub mod map;
pub mod models;
pub mod routes;
pub mod services;
pub mod view;

// Re-export commonly used types
pub use controller::{ControllerError, ControllerSettings, RefreshOutcome, ViewController, ViewState};
pub use map::{MapWidget, MarkerId, MarkerLayer, TileLayer};
pub use models::{Filter, FilterSelection, LatLng, Restaurant};
pub use services::{DataProvider, ProviderError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let selection = FilterSelection::new("all", "Queens");
        assert_eq!(selection.cuisine, Filter::All);
        assert_eq!(ControllerSettings::default().default_zoom, 12);
    }
}
