// Core helpers shared by providers, views and routes
pub mod bounds;
pub mod filters;
pub mod links;

pub use bounds::{bounds_of, GeoBounds};
pub use filters::{filter_restaurants, unique_cuisines, unique_neighborhoods};
pub use links::{image_url_for_restaurant, url_for_restaurant, ImageVariants};
