use geo::{BoundingRect, MultiPoint, Point};
use serde::{Deserialize, Serialize};

use crate::models::LatLng;

/// Geographic bounds of a set of coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl GeoBounds {
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}

/// Smallest rectangle covering every coordinate, `None` for an empty set
pub fn bounds_of<I>(coords: I) -> Option<GeoBounds>
where
    I: IntoIterator<Item = LatLng>,
{
    let points: Vec<Point<f64>> = coords.into_iter().map(LatLng::to_point).collect();
    let points = MultiPoint::new(points);
    let rect = points.bounding_rect()?;
    Some(GeoBounds {
        south_west: LatLng::new(rect.min().y, rect.min().x),
        north_east: LatLng::new(rect.max().y, rect.max().x),
    })
}
