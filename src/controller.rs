//! View controller for the restaurant directory.
//!
//! Owns the filter selectors, the rendered list items, the map widget and
//! its markers, and keeps the list and markers matching the restaurants
//! last fetched for the current filter selection.
//!
//! # Refresh ordering
//!
//! Each refresh is tagged with a request generation. [`ViewController::begin_refresh`]
//! issues a ticket for the current selection and [`ViewController::complete_refresh`]
//! applies a fetch result for that ticket. A result whose ticket is older than
//! the latest one issued is dropped, so a slow response for an earlier selection
//! never replaces the view of a newer one.

use std::sync::Arc;
use thiserror::Error;

use crate::map::{MapBootstrap, MapWidget, MarkerId, MarkerLayer};
use crate::models::{Filter, FilterSelection, LatLng, Restaurant};
use crate::services::{DataProvider, ProviderError};
use crate::view::{marker_popup_html, render_directory_page, render_restaurant_item, DirectoryPage, Element, ImageSettings, Node};

/// Default map center (Lower East Side, Manhattan)
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 40.722216,
    lng: -73.987501,
};

/// Default map zoom level
pub const DEFAULT_ZOOM: u8 = 12;

/// Errors surfaced by controller operations
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] ProviderError),

    #[error("Unknown {selector} option: {value}")]
    UnknownOption { selector: &'static str, value: String },
}

/// Lifecycle of the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    LoadingFilters,
    Ready,
}

/// One filter dropdown: an implicit "all" option followed by fetched values
#[derive(Debug, Clone)]
pub struct Selector {
    name: &'static str,
    options: Vec<String>,
    selected: Filter,
}

impl Selector {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            options: Vec::new(),
            selected: Filter::All,
        }
    }

    fn populate(&mut self, values: Vec<String>) {
        self.options = values;
        if let Filter::Only(value) = &self.selected {
            if !self.options.contains(value) {
                self.selected = Filter::All;
            }
        }
    }

    /// Select an option by its value; "all" is always available
    pub fn select(&mut self, value: &str) -> Result<(), ControllerError> {
        let filter = Filter::parse(value);
        if let Filter::Only(v) = &filter {
            if !self.options.contains(v) {
                return Err(ControllerError::UnknownOption {
                    selector: self.name,
                    value: value.to_string(),
                });
            }
        }
        self.selected = filter;
        Ok(())
    }

    /// Fetched option values, excluding "all"
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> &Filter {
        &self.selected
    }

    /// Number of options including "all"
    pub fn option_count(&self) -> usize {
        self.options.len() + 1
    }
}

/// Fixed view parameters
#[derive(Debug, Clone)]
pub struct ControllerSettings {
    pub default_center: LatLng,
    pub default_zoom: u8,
    pub images: ImageSettings,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            default_center: DEFAULT_CENTER,
            default_zoom: DEFAULT_ZOOM,
            images: ImageSettings::default(),
        }
    }
}

/// Ticket for one in-flight refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTicket {
    generation: u64,
    selection: FilterSelection,
}

impl RefreshTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }
}

/// What a refresh did to the view
#[derive(Debug)]
pub enum RefreshOutcome {
    /// The view now shows this many restaurants
    Rendered(usize),
    /// The fetch failed; the previous view is untouched
    Failed(ControllerError),
    /// A newer refresh was issued; this result was dropped
    Stale,
    /// No map widget yet; list and markers stay empty until `initialize_map`
    NoMap,
}

impl RefreshOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RefreshOutcome::Rendered(_))
    }
}

pub struct ViewController<P: ?Sized, M> {
    provider: Arc<P>,
    settings: ControllerSettings,
    state: ViewState,
    neighborhoods: Selector,
    cuisines: Selector,
    map: Option<M>,
    restaurants: Vec<Restaurant>,
    items: Vec<Element>,
    markers: Vec<MarkerId>,
    generation: u64,
}

impl<P, M> ViewController<P, M>
where
    P: DataProvider + ?Sized,
    M: MapWidget,
{
    pub fn new(provider: Arc<P>, settings: ControllerSettings) -> Self {
        Self {
            provider,
            settings,
            state: ViewState::LoadingFilters,
            neighborhoods: Selector::new("neighborhood"),
            cuisines: Selector::new("cuisine"),
            map: None,
            restaurants: Vec::new(),
            items: Vec::new(),
            markers: Vec::new(),
            generation: 0,
        }
    }

    /// Fetch neighborhoods and cuisines and populate both selectors
    ///
    /// The two fetches run concurrently and fail independently; a failed
    /// selector keeps only its "all" option.
    pub async fn initialize_filters(&mut self) {
        let provider = Arc::clone(&self.provider);
        let (neighborhoods, cuisines) =
            tokio::join!(provider.fetch_neighborhoods(), provider.fetch_cuisines());

        match neighborhoods {
            Ok(values) => {
                tracing::debug!("Loaded {} neighborhoods", values.len());
                self.neighborhoods.populate(values);
            }
            Err(e) => {
                tracing::error!("Failed to fetch neighborhoods from {}: {}", provider.name(), e);
                self.neighborhoods.populate(Vec::new());
            }
        }

        match cuisines {
            Ok(values) => {
                tracing::debug!("Loaded {} cuisines", values.len());
                self.cuisines.populate(values);
            }
            Err(e) => {
                tracing::error!("Failed to fetch cuisines from {}: {}", provider.name(), e);
                self.cuisines.populate(Vec::new());
            }
        }

        self.state = ViewState::Ready;
    }

    /// Center the map widget on the default location, then refresh
    pub async fn initialize_map(&mut self, mut map: M) -> RefreshOutcome {
        map.set_view(self.settings.default_center, self.settings.default_zoom);
        self.map = Some(map);
        self.refresh().await
    }

    /// Fetch restaurants for the current selection and re-render
    pub async fn refresh(&mut self) -> RefreshOutcome {
        let ticket = self.begin_refresh();
        let provider = Arc::clone(&self.provider);
        let result = provider
            .fetch_restaurants_by_cuisine_and_neighborhood(&ticket.selection)
            .await;
        self.complete_refresh(ticket, result)
    }

    /// Issue a ticket for the current selection, superseding older tickets
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        RefreshTicket {
            generation: self.generation,
            selection: self.selection(),
        }
    }

    /// Apply a fetch result for a ticket
    ///
    /// List items and markers are only rendered together, so nothing is
    /// applied before a map widget exists.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<Restaurant>, ProviderError>,
    ) -> RefreshOutcome {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Dropping refresh {} (latest is {})",
                ticket.generation,
                self.generation
            );
            return RefreshOutcome::Stale;
        }

        if self.map.is_none() {
            tracing::debug!("Skipping refresh {}: map not initialized", ticket.generation);
            return RefreshOutcome::NoMap;
        }

        match result {
            Ok(restaurants) => {
                self.reset_restaurants(restaurants);
                self.fill_restaurants();
                tracing::info!(
                    "Rendered {} restaurants for cuisine={} neighborhood={}",
                    self.restaurants.len(),
                    ticket.selection.cuisine.as_str(),
                    ticket.selection.neighborhood.as_str()
                );
                RefreshOutcome::Rendered(self.restaurants.len())
            }
            Err(e) => {
                tracing::error!("Failed to fetch restaurants: {}", e);
                RefreshOutcome::Failed(ControllerError::Fetch(e))
            }
        }
    }

    /// Change the cuisine filter and refresh
    pub async fn select_cuisine(&mut self, value: &str) -> Result<RefreshOutcome, ControllerError> {
        self.cuisines.select(value)?;
        Ok(self.refresh().await)
    }

    /// Change the neighborhood filter and refresh
    pub async fn select_neighborhood(&mut self, value: &str) -> Result<RefreshOutcome, ControllerError> {
        self.neighborhoods.select(value)?;
        Ok(self.refresh().await)
    }

    /// Set both filters without refreshing
    ///
    /// Either both selectors change or neither does.
    pub fn set_selection(&mut self, selection: &FilterSelection) -> Result<(), ControllerError> {
        let previous = self.cuisines.selected().clone();
        self.cuisines.select(selection.cuisine.as_str())?;
        if let Err(e) = self.neighborhoods.select(selection.neighborhood.as_str()) {
            self.cuisines.selected = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Set both filters, refreshing once
    pub async fn apply_selection(&mut self, selection: &FilterSelection) -> Result<RefreshOutcome, ControllerError> {
        self.set_selection(selection)?;
        Ok(self.refresh().await)
    }

    /// Current selection as read from the two selectors
    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            cuisine: self.cuisines.selected().clone(),
            neighborhood: self.neighborhoods.selected().clone(),
        }
    }

    fn reset_restaurants(&mut self, restaurants: Vec<Restaurant>) {
        if let Some(map) = self.map.as_mut() {
            for id in self.markers.drain(..) {
                map.remove_marker(id);
            }
        }
        self.items.clear();
        self.restaurants = restaurants;
    }

    fn fill_restaurants(&mut self) {
        let images = &self.settings.images;
        self.items = self
            .restaurants
            .iter()
            .map(|restaurant| render_restaurant_item(restaurant, images))
            .collect();
        self.add_markers_to_map();
    }

    fn add_markers_to_map(&mut self) {
        let Some(map) = self.map.as_mut() else {
            return;
        };
        for restaurant in &self.restaurants {
            let id = map.add_marker(restaurant.latlng, marker_popup_html(restaurant));
            self.markers.push(id);
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn neighborhoods(&self) -> &Selector {
        &self.neighborhoods
    }

    pub fn cuisines(&self) -> &Selector {
        &self.cuisines
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn items(&self) -> &[Element] {
        &self.items
    }

    pub fn markers(&self) -> &[MarkerId] {
        &self.markers
    }

    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }
}

impl<P> ViewController<P, MarkerLayer>
where
    P: DataProvider + ?Sized,
{
    /// Map payload for the browser, `None` before the map is initialized
    pub fn map_bootstrap(&self) -> Option<MapBootstrap> {
        self.map.as_ref().map(MarkerLayer::bootstrap)
    }

    /// Render the whole directory page from the current view
    pub fn render_page(&self, fallback: &MarkerLayer) -> Node {
        let map = self.map_bootstrap().unwrap_or_else(|| fallback.bootstrap());
        let selection = self.selection();
        render_directory_page(&DirectoryPage {
            neighborhoods: self.neighborhoods.options(),
            selected_neighborhood: selection.neighborhood.as_str(),
            cuisines: self.cuisines.options(),
            selected_cuisine: selection.cuisine.as_str(),
            items: &self.items,
            map: &map,
        })
    }
}
