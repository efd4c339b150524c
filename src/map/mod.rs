//! Map widget seam and the in-memory marker layer.
//!
//! The controller only talks to [`MapWidget`]. [`MarkerLayer`] records the
//! view and live markers so the server can hand them to Leaflet in the
//! browser as a single bootstrap payload.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::core::{bounds_of, GeoBounds};
use crate::models::LatLng;

/// Handle of one marker placed on a map widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerId(Uuid);

impl MarkerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MarkerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Map widget operations the view controller relies on
pub trait MapWidget {
    /// Center the view on a coordinate at a zoom level
    fn set_view(&mut self, center: LatLng, zoom: u8);

    /// Place a point marker with popup markup, returning its handle
    fn add_marker(&mut self, position: LatLng, popup_html: String) -> MarkerId;

    /// Remove a marker; removing an unknown handle is a no-op
    fn remove_marker(&mut self, id: MarkerId);
}

/// Tile layer configuration handed to the browser map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
    pub id: String,
    pub access_token: String,
}

/// Marker as placed on the layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedMarker {
    pub id: MarkerId,
    pub position: LatLng,
    pub popup_html: String,
}

/// Current view of the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
}

/// Everything the browser needs to recreate the map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapBootstrap {
    pub view: Option<MapView>,
    pub tiles: TileLayer,
    pub markers: Vec<PlacedMarker>,
    pub bounds: Option<GeoBounds>,
}

/// In-memory map widget
#[derive(Debug, Clone)]
pub struct MarkerLayer {
    tiles: TileLayer,
    view: Option<MapView>,
    markers: Vec<PlacedMarker>,
}

impl MarkerLayer {
    pub fn new(tiles: TileLayer) -> Self {
        Self {
            tiles,
            view: None,
            markers: Vec::new(),
        }
    }

    pub fn view(&self) -> Option<MapView> {
        self.view
    }

    pub fn markers(&self) -> &[PlacedMarker] {
        &self.markers
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Bounds covering every live marker
    pub fn bounds(&self) -> Option<GeoBounds> {
        bounds_of(self.markers.iter().map(|m| m.position))
    }

    pub fn bootstrap(&self) -> MapBootstrap {
        MapBootstrap {
            view: self.view,
            tiles: self.tiles.clone(),
            markers: self.markers.clone(),
            bounds: self.bounds(),
        }
    }
}

impl MapWidget for MarkerLayer {
    fn set_view(&mut self, center: LatLng, zoom: u8) {
        let zoom = zoom.min(self.tiles.max_zoom);
        tracing::debug!("Map view set to ({}, {}) at zoom {}", center.lat, center.lng, zoom);
        self.view = Some(MapView { center, zoom });
    }

    fn add_marker(&mut self, position: LatLng, popup_html: String) -> MarkerId {
        let id = MarkerId::new();
        self.markers.push(PlacedMarker {
            id,
            position,
            popup_html,
        });
        id
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.markers.retain(|marker| marker.id != id);
    }
}
