use crate::core::{image_url_for_restaurant, url_for_restaurant, ImageVariants};
use crate::map::MapBootstrap;
use crate::models::{Restaurant, ALL};
use crate::view::node::{escape_attr, escape_text, Element, Node};

/// Names shorter than this get the compact heading style
pub const SHORT_NAME_LIMIT: usize = 10;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.3.1/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.3.1/dist/leaflet.js";

/// Where images live and what to show until they load
#[derive(Debug, Clone)]
pub struct ImageSettings {
    pub base_path: String,
    pub placeholder: String,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            base_path: "/img/".to_string(),
            placeholder: "/img/handtinyblack.gif".to_string(),
        }
    }
}

/// Heading span class for a restaurant name
pub fn name_class(name: &str) -> &'static str {
    if name.chars().count() < SHORT_NAME_LIMIT {
        "smallName"
    } else {
        "largeName"
    }
}

/// Lazily loaded, responsive restaurant image
pub fn render_image(restaurant: &Restaurant, images: &ImageSettings) -> Element {
    let url = image_url_for_restaurant(&images.base_path, restaurant);
    let variants = ImageVariants::from_base(&url);

    Element::new("img")
        .class("restaurant-img lazyload")
        .attr("src", images.placeholder.as_str())
        .attr("data-src", url.as_str())
        .attr("lowsrc", variants.small.as_str())
        .attr("srcset", variants.srcset())
        .attr("alt", restaurant.name.as_str())
}

/// One entry of the restaurants list
pub fn render_restaurant_item(restaurant: &Restaurant, images: &ImageSettings) -> Element {
    let heading = Element::new("h1").child(
        Element::new("span")
            .class(name_class(&restaurant.name))
            .text(restaurant.name.as_str()),
    );

    let more = Element::new("a")
        .attr("href", url_for_restaurant(restaurant))
        .attr("aria-label", format!("View Details {}", restaurant.name))
        .text("View Details");

    Element::new("li")
        .child(render_image(restaurant, images))
        .child(heading)
        .child(Element::new("p").text(restaurant.neighborhood.as_str()))
        .child(Element::new("p").text(restaurant.address.as_str()))
        .child(more)
}

/// Popup markup for a restaurant's map marker: a link to its detail view
pub fn marker_popup_html(restaurant: &Restaurant) -> String {
    format!(
        "<a href=\"{}\">{}</a>",
        escape_attr(&url_for_restaurant(restaurant)),
        escape_text(&restaurant.name)
    )
}

/// `<select>` with the "all" option first followed by one option per value
pub fn render_select(id: &str, name: &str, all_label: &str, values: &[String], selected: &str) -> Element {
    let mut all = Element::new("option").attr("value", ALL);
    if selected == ALL {
        all = all.attr("selected", "selected");
    }

    let options = values.iter().map(|value| {
        let mut option = Element::new("option").attr("value", value.as_str());
        if value == selected {
            option = option.attr("selected", "selected");
        }
        Node::from(option.text(value.as_str()))
    });

    Element::new("select")
        .attr("id", id)
        .attr("name", name)
        .attr("aria-label", all_label)
        .attr("onchange", "this.form.submit()")
        .child(all.text(all_label))
        .children(options)
}

/// Inputs to the directory page
pub struct DirectoryPage<'a> {
    pub neighborhoods: &'a [String],
    pub selected_neighborhood: &'a str,
    pub cuisines: &'a [String],
    pub selected_cuisine: &'a str,
    pub items: &'a [Element],
    pub map: &'a MapBootstrap,
}

/// Full directory page: filters, map and restaurants list
pub fn render_directory_page(page: &DirectoryPage<'_>) -> Node {
    let filters = Element::new("form")
        .attr("class", "filter-options")
        .attr("method", "get")
        .attr("action", "/")
        .child(Element::new("h2").text("Filter Results"))
        .child(render_select(
            "neighborhoods-select",
            "neighborhood",
            "All Neighborhoods",
            page.neighborhoods,
            page.selected_neighborhood,
        ))
        .child(render_select(
            "cuisines-select",
            "cuisine",
            "All Cuisines",
            page.cuisines,
            page.selected_cuisine,
        ));

    let list = Element::new("ul")
        .attr("id", "restaurants-list")
        .children(page.items.iter().cloned().map(Node::from));

    let main = Element::new("main")
        .attr("id", "maincontent")
        .child(
            Element::new("section")
                .attr("id", "map-container")
                .child(Element::new("div").attr("id", "mapid").attr("role", "application")),
        )
        .child(Element::new("section").child(filters).child(list));

    document("Restaurant Reviews", main, Some(page.map))
}

/// Detail page for one restaurant
pub fn render_detail_page(restaurant: &Restaurant, images: &ImageSettings, map: &MapBootstrap) -> Node {
    let mut hours = Element::new("table").attr("id", "restaurant-hours");
    for (day, text) in &restaurant.operating_hours {
        hours = hours.child(
            Element::new("tr")
                .child(Element::new("td").text(day.as_str()))
                .child(Element::new("td").text(text.as_str())),
        );
    }

    let reviews = if restaurant.reviews.is_empty() {
        Node::from(Element::new("p").text("No reviews yet!"))
    } else {
        Node::from(Element::new("ul").attr("id", "reviews-list").children(
            restaurant.reviews.iter().map(|review| {
                Node::from(
                    Element::new("li")
                        .child(Element::new("p").class("review-name").text(review.name.as_str()))
                        .child(Element::new("p").class("review-date").text(review.date.as_str()))
                        .child(Element::new("p").class("review-rating").text(format!("Rating: {}", review.rating)))
                        .child(Element::new("p").text(review.comments.as_str())),
                )
            }),
        ))
    };

    let image = render_image(restaurant, images).attr("id", "restaurant-img");

    let mut section = Element::new("section")
        .attr("id", "restaurant-container")
        .child(Element::new("h1").attr("id", "restaurant-name").text(restaurant.name.as_str()))
        .child(image)
        .child(Element::new("p").attr("id", "restaurant-cuisine").text(restaurant.cuisine_type.as_str()))
        .child(Element::new("p").attr("id", "restaurant-address").text(restaurant.address.as_str()))
        .child(hours);

    if let Some(average) = restaurant.average_rating() {
        section = section.child(
            Element::new("p")
                .attr("id", "restaurant-rating")
                .text(format!("Average rating: {:.1}", average)),
        );
    }

    let main = Element::new("main")
        .attr("id", "maincontent")
        .child(Element::new("nav").child(breadcrumb(&restaurant.name)))
        .child(
            Element::new("section")
                .attr("id", "map-container")
                .child(Element::new("div").attr("id", "mapid").attr("role", "application")),
        )
        .child(section)
        .child(
            Element::new("section")
                .attr("id", "reviews-container")
                .child(Element::new("h2").text("Reviews"))
                .child(reviews),
        );

    document(&restaurant.name, main, Some(map))
}

fn breadcrumb(name: &str) -> Element {
    Element::new("ul")
        .attr("id", "breadcrumb")
        .child(Element::new("li").child(Element::new("a").attr("href", "/").text("Home")))
        .child(Element::new("li").attr("aria-current", "page").text(name))
}

fn document(title: &str, main: Element, map: Option<&MapBootstrap>) -> Node {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1.0"),
        )
        .child(Element::new("title").text(title))
        .child(Element::new("link").attr("rel", "stylesheet").attr("href", LEAFLET_CSS))
        .child(Element::new("link").attr("rel", "stylesheet").attr("href", "/css/styles.css"));

    let mut body = Element::new("body")
        .child(
            Element::new("header").child(
                Element::new("nav").child(Element::new("h1").child(
                    Element::new("a").attr("href", "/").text("Restaurant Reviews"),
                )),
            ),
        )
        .child(main)
        .child(Element::new("footer").attr("id", "footer").text("Copyright (c) 2018 Restaurant Reviews"));

    if let Some(map) = map {
        body = body
            .child(Element::new("script").attr("src", LEAFLET_JS))
            .child(Element::new("script").child(Node::Raw(map_script(map))));
    }

    Node::Raw(format!(
        "<!DOCTYPE html>{}",
        Node::from(Element::new("html").attr("lang", "en").child(head).child(body)).to_html()
    ))
}

/// Inline script recreating the map with Leaflet from the bootstrap payload
fn map_script(map: &MapBootstrap) -> String {
    let payload = serde_json::to_string(map)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/");

    format!(
        "(function () {{\n\
         var boot = {payload};\n\
         if (!boot || !boot.view || typeof L === 'undefined') {{ return; }}\n\
         var map = L.map('mapid').setView([boot.view.center.lat, boot.view.center.lng], boot.view.zoom);\n\
         L.tileLayer(boot.tiles.url_template, {{attribution: boot.tiles.attribution, maxZoom: boot.tiles.max_zoom, id: boot.tiles.id, accessToken: boot.tiles.access_token}}).addTo(map);\n\
         boot.markers.forEach(function (m) {{ L.marker([m.position.lat, m.position.lng]).addTo(map).bindPopup(m.popup_html); }});\n\
         }})();"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LatLng, Review};

    fn katz() -> Restaurant {
        Restaurant {
            id: 4,
            name: "Katz's Delicatessen".to_string(),
            neighborhood: "Manhattan".to_string(),
            photograph: Some("4.jpg".to_string()),
            address: "205 E Houston St, New York, NY 10002".to_string(),
            latlng: LatLng::new(40.722216, -73.987501),
            cuisine_type: "American".to_string(),
            operating_hours: vec![("Monday".to_string(), "8:00 am - 10:45 pm".to_string())],
            reviews: vec![Review {
                name: "Jane".to_string(),
                date: "May 1, 2018".to_string(),
                rating: 5,
                comments: "Pastrami <3".to_string(),
            }],
        }
    }

    #[test]
    fn test_name_class_threshold() {
        assert_eq!(name_class("Emily"), "smallName");
        assert_eq!(name_class("123456789"), "smallName");
        assert_eq!(name_class("1234567890"), "largeName");
        assert_eq!(name_class("Katz's Delicatessen"), "largeName");
    }

    #[test]
    fn test_restaurant_item_structure() {
        let item = render_restaurant_item(&katz(), &ImageSettings::default());
        assert_eq!(item.tag, "li");

        let tags: Vec<&str> = item.child_elements().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["img", "h1", "p", "p", "a"]);

        let img = item.find("img").unwrap();
        assert_eq!(img.get_attr("src"), Some("/img/handtinyblack.gif"));
        assert_eq!(img.get_attr("data-src"), Some("/img/4.jpg"));
        assert_eq!(img.get_attr("lowsrc"), Some("/img/4-small.jpg"));
        assert_eq!(
            img.get_attr("srcset"),
            Some("/img/4-large.jpg 2x, /img/4-medium.jpg 1x, /img/4-small.jpg 100w")
        );
        assert_eq!(img.get_attr("alt"), Some("Katz's Delicatessen"));

        let link = item.find("a").unwrap();
        assert_eq!(link.get_attr("href"), Some("./restaurant.html?id=4"));
        assert_eq!(link.get_attr("aria-label"), Some("View Details Katz's Delicatessen"));
        assert_eq!(link.text_content(), "View Details");

        let span = item.find("span").unwrap();
        assert_eq!(span.get_attr("class"), Some("largeName"));
    }

    #[test]
    fn test_marker_popup_escapes_name() {
        let mut restaurant = katz();
        restaurant.name = "A & B".to_string();
        assert_eq!(
            marker_popup_html(&restaurant),
            "<a href=\"./restaurant.html?id=4\">A &amp; B</a>"
        );
    }

    #[test]
    fn test_select_marks_selected_option() {
        let values = vec!["Manhattan".to_string(), "Queens".to_string()];
        let select = render_select("neighborhoods-select", "neighborhood", "All Neighborhoods", &values, "Queens");
        let options: Vec<&Element> = select.child_elements().collect();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].get_attr("value"), Some("all"));
        assert_eq!(options[0].get_attr("selected"), None);
        assert_eq!(options[2].get_attr("selected"), Some("selected"));
    }

    #[test]
    fn test_detail_page_contains_reviews_and_hours() {
        let map = crate::map::MarkerLayer::new(crate::map::TileLayer {
            url_template: String::new(),
            attribution: String::new(),
            max_zoom: 18,
            id: String::new(),
            access_token: String::new(),
        })
        .bootstrap();

        let html = render_detail_page(&katz(), &ImageSettings::default(), &map).to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("8:00 am - 10:45 pm"));
        assert!(html.contains("Pastrami &lt;3"));
        assert!(html.contains("Average rating: 5.0"));
    }
}
