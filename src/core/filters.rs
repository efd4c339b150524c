use crate::models::{FilterSelection, Restaurant};

/// Keep the restaurants matching both dimensions of the selection
///
/// A dimension set to "all" is unconstrained. Input order is preserved.
pub fn filter_restaurants(restaurants: &[Restaurant], selection: &FilterSelection) -> Vec<Restaurant> {
    restaurants
        .iter()
        .filter(|restaurant| selection.matches(restaurant))
        .cloned()
        .collect()
}

/// Distinct neighborhoods in first-seen order
pub fn unique_neighborhoods(restaurants: &[Restaurant]) -> Vec<String> {
    unique_by(restaurants, |r| &r.neighborhood)
}

/// Distinct cuisines in first-seen order
pub fn unique_cuisines(restaurants: &[Restaurant]) -> Vec<String> {
    unique_by(restaurants, |r| &r.cuisine_type)
}

fn unique_by<F>(restaurants: &[Restaurant], key: F) -> Vec<String>
where
    F: Fn(&Restaurant) -> &String,
{
    let mut values: Vec<String> = Vec::new();
    for restaurant in restaurants {
        let value = key(restaurant);
        if !values.contains(value) {
            values.push(value.clone());
        }
    }
    values
}
