use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::controller::ViewController;
use crate::map::{MapWidget, MarkerLayer};
use crate::models::{DetailQuery, ErrorResponse, RestaurantQuery};
use crate::routes::api::provider_error_response;
use crate::routes::AppState;
use crate::services::DataProvider;
use crate::view::{marker_popup_html, render_detail_page};

/// Zoom used when the map shows a single restaurant
const DETAIL_ZOOM: u8 = 16;

/// Configure the HTML page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(directory_page))
        .route("/index.html", web::get().to(directory_page))
        .route("/restaurant.html", web::get().to(detail_page));
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Directory page
///
/// GET /?cuisine={cuisine}&neighborhood={neighborhood}
///
/// Drives a view controller through its full lifecycle: filters, selection
/// from the query string, map initialization and the resulting refresh.
/// Invalid or unknown filter values are logged and render as "all"; data
/// failures render as empty selectors or an empty list.
async fn directory_page(
    state: web::Data<AppState>,
    query: web::Query<RestaurantQuery>,
) -> impl Responder {
    let mut controller: ViewController<dyn DataProvider, MarkerLayer> =
        ViewController::new(state.provider.clone(), state.controller.clone());

    controller.initialize_filters().await;

    match query.validate() {
        Ok(()) => {
            if let Err(e) = controller.set_selection(&query.selection()) {
                tracing::warn!("Ignoring filter selection: {}", e);
            }
        }
        Err(errors) => tracing::warn!("Ignoring invalid filter query: {}", errors),
    }

    let outcome = controller.initialize_map(MarkerLayer::new(state.tiles.clone())).await;
    tracing::debug!("Directory refresh: {:?}", outcome);

    let fallback = MarkerLayer::new(state.tiles.clone());
    html(controller.render_page(&fallback).to_html())
}

/// Restaurant detail page
///
/// GET /restaurant.html?id={id}
async fn detail_page(state: web::Data<AppState>, query: web::Query<DetailQuery>) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Validation failed",
            errors.to_string(),
            400,
        ));
    }

    let restaurant = match state.provider.fetch_restaurant_by_id(query.id).await {
        Ok(restaurant) => restaurant,
        Err(e) => return provider_error_response("Failed to fetch restaurant", &e),
    };

    let mut map = MarkerLayer::new(state.tiles.clone());
    map.set_view(restaurant.latlng, DETAIL_ZOOM);
    map.add_marker(restaurant.latlng, marker_popup_html(&restaurant));

    html(render_detail_page(&restaurant, &state.controller.images, &map.bootstrap()).to_html())
}
