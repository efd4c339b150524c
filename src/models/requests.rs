use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{FilterSelection, ALL};

/// Query string for restaurant listings and the directory page
///
/// Missing parameters mean "all".
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RestaurantQuery {
    #[serde(default = "default_all")]
    #[validate(length(min = 1, max = 64))]
    pub cuisine: String,
    #[serde(default = "default_all")]
    #[validate(length(min = 1, max = 64))]
    pub neighborhood: String,
}

impl RestaurantQuery {
    pub fn selection(&self) -> FilterSelection {
        FilterSelection::new(&self.cuisine, &self.neighborhood)
    }
}

impl Default for RestaurantQuery {
    fn default() -> Self {
        Self {
            cuisine: default_all(),
            neighborhood: default_all(),
        }
    }
}

fn default_all() -> String {
    ALL.to_string()
}

/// Query string for the restaurant detail page
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DetailQuery {
    #[validate(range(min = 1))]
    pub id: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Filter;

    #[test]
    fn test_missing_parameters_mean_all() {
        let query: RestaurantQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.selection(), FilterSelection::all());
    }

    #[test]
    fn test_selection_from_query() {
        let query = RestaurantQuery {
            cuisine: "Pizza".to_string(),
            neighborhood: "all".to_string(),
        };
        let selection = query.selection();
        assert_eq!(selection.cuisine, Filter::Only("Pizza".to_string()));
        assert_eq!(selection.neighborhood, Filter::All);
    }

    #[test]
    fn test_detail_id_must_be_positive() {
        assert!(DetailQuery { id: 0 }.validate().is_err());
        assert!(DetailQuery { id: 3 }.validate().is_ok());
    }
}
