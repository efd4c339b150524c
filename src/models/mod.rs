// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Filter, FilterSelection, LatLng, Restaurant, RestaurantDocument, Review, ALL};
pub use requests::{DetailQuery, RestaurantQuery};
pub use responses::{ErrorResponse, HealthResponse};
