// Unit tests for Restaurant Directory

use restaurant_directory::core::{
    bounds_of, filter_restaurants, image_url_for_restaurant, unique_cuisines, url_for_restaurant, ImageVariants,
};
use restaurant_directory::models::{Filter, FilterSelection, LatLng, Restaurant};
use restaurant_directory::view::{marker_popup_html, name_class, render_restaurant_item, ImageSettings, Node};

fn create_test_restaurant(id: u32, name: &str, cuisine: &str) -> Restaurant {
    Restaurant {
        id,
        name: name.to_string(),
        neighborhood: "Queens".to_string(),
        photograph: Some(format!("{}.jpg", id)),
        address: "1209 Jackson Ave, Queens, NY 11101".to_string(),
        latlng: LatLng::new(40.743797, -73.950652),
        cuisine_type: cuisine.to_string(),
        operating_hours: vec![],
        reviews: vec![],
    }
}

#[test]
fn test_short_name_gets_small_class() {
    assert_eq!(name_class("Mu Ramen"), "smallName");
    assert_eq!(name_class(""), "smallName");
}

#[test]
fn test_long_name_gets_large_class() {
    assert_eq!(name_class("Casa Enrique"), "largeName");
    assert_eq!(name_class("abcdefghij"), "largeName");
}

#[test]
fn test_name_length_counts_characters() {
    // nine characters, more than nine bytes
    assert_eq!(name_class("Café Café"), "smallName");
}

#[test]
fn test_image_variants() {
    let variants = ImageVariants::from_base("/img/1.jpg");
    assert_eq!(variants.small, "/img/1-small.jpg");
    assert_eq!(variants.medium, "/img/1-medium.jpg");
    assert_eq!(variants.large, "/img/1-large.jpg");
}

#[test]
fn test_image_url_and_detail_url() {
    let restaurant = create_test_restaurant(9, "Mu Ramen", "Asian");
    assert_eq!(image_url_for_restaurant("/img/", &restaurant), "/img/9.jpg");
    assert_eq!(url_for_restaurant(&restaurant), "./restaurant.html?id=9");
}

#[test]
fn test_marker_popup_links_to_detail() {
    let restaurant = create_test_restaurant(10, "Casa Enrique", "Mexican");
    assert_eq!(
        marker_popup_html(&restaurant),
        "<a href=\"./restaurant.html?id=10\">Casa Enrique</a>"
    );
}

#[test]
fn test_rendered_item_html() {
    let restaurant = create_test_restaurant(9, "Mu Ramen", "Asian");
    let html = Node::from(render_restaurant_item(&restaurant, &ImageSettings::default())).to_html();

    assert!(html.starts_with("<li><img class=\"restaurant-img lazyload\""));
    assert!(html.contains("data-src=\"/img/9.jpg\""));
    assert!(html.contains("<h1><span class=\"smallName\">Mu Ramen</span></h1>"));
    assert!(html.contains("<p>Queens</p>"));
    assert!(html.contains("aria-label=\"View Details Mu Ramen\""));
    assert!(html.ends_with(">View Details</a></li>"));
}

#[test]
fn test_filter_selection_matching() {
    let restaurants = vec![
        create_test_restaurant(9, "Mu Ramen", "Asian"),
        create_test_restaurant(10, "Casa Enrique", "Mexican"),
    ];

    let selection = FilterSelection::new("Mexican", "all");
    assert_eq!(selection.cuisine, Filter::Only("Mexican".to_string()));
    assert_eq!(filter_restaurants(&restaurants, &selection).len(), 1);
    assert_eq!(filter_restaurants(&restaurants, &FilterSelection::all()).len(), 2);
    assert_eq!(unique_cuisines(&restaurants), vec!["Asian", "Mexican"]);
}

#[test]
fn test_bounds_of_markers() {
    let bounds = bounds_of(vec![LatLng::new(40.70, -74.00), LatLng::new(40.75, -73.95)]).unwrap();
    let center = bounds.center();
    assert!((center.lat - 40.725).abs() < 1e-9);
    assert!((center.lng + 73.975).abs() < 1e-9);
}
