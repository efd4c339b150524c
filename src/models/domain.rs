use serde::{Deserialize, Serialize};

/// Wire value meaning "no filter on this dimension"
pub const ALL: &str = "all";

/// Geographic coordinate as stored in the restaurants document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Convert to a `geo` point (x = longitude, y = latitude)
    pub fn to_point(self) -> geo::Point<f64> {
        geo::Point::new(self.lng, self.lat)
    }
}

/// A single customer review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    #[serde(default)]
    pub date: String,
    pub rating: u8,
    #[serde(default)]
    pub comments: String,
}

/// Restaurant record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    pub neighborhood: String,
    #[serde(default)]
    pub photograph: Option<String>,
    pub address: String,
    pub latlng: LatLng,
    pub cuisine_type: String,
    #[serde(default, with = "ordered_hours")]
    pub operating_hours: Vec<(String, String)>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Restaurant {
    /// Image file name, falling back to `<id>.jpg` when the record has none
    pub fn photograph(&self) -> String {
        match &self.photograph {
            Some(photo) if !photo.is_empty() => photo.clone(),
            _ => format!("{}.jpg", self.id),
        }
    }

    /// Mean review rating, `None` when there are no reviews
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: u32 = self.reviews.iter().map(|r| r.rating as u32).sum();
        Some(total as f64 / self.reviews.len() as f64)
    }
}

/// Operating hours are a JSON object keyed by day; keep the document's day order
mod ordered_hours {
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(hours: &[(String, String)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(hours.len()))?;
        for (day, text) in hours {
            map.serialize_entry(day, text)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HoursVisitor;

        impl<'de> Visitor<'de> for HoursVisitor {
            type Value = Vec<(String, String)>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of day to opening hours")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut hours = Vec::with_capacity(access.size_hint().unwrap_or(7));
                while let Some((day, text)) = access.next_entry::<String, String>()? {
                    hours.push((day, text));
                }
                Ok(hours)
            }
        }

        deserializer.deserialize_map(HoursVisitor)
    }
}

/// The restaurants document: `{"restaurants": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantDocument {
    pub restaurants: Vec<Restaurant>,
}

/// One dimension of a filter selection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Only(String),
}

impl Filter {
    /// Parse a selector value; `"all"` and the empty string mean no filter
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == ALL {
            Filter::All
        } else {
            Filter::Only(value.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(expected) => expected == value,
        }
    }

    /// Wire value as used by selectors and query strings
    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => ALL,
            Filter::Only(value) => value,
        }
    }
}

/// Current (cuisine, neighborhood) pair used to query restaurants
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilterSelection {
    pub cuisine: Filter,
    pub neighborhood: Filter,
}

impl FilterSelection {
    pub fn new(cuisine: &str, neighborhood: &str) -> Self {
        Self {
            cuisine: Filter::parse(cuisine),
            neighborhood: Filter::parse(neighborhood),
        }
    }

    pub fn all() -> Self {
        Self::default()
    }

    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        self.cuisine.matches(&restaurant.cuisine_type)
            && self.neighborhood.matches(&restaurant.neighborhood)
    }
}
