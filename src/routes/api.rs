use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ErrorResponse, HealthResponse, RestaurantQuery};
use crate::routes::AppState;
use crate::services::ProviderError;

/// Configure the JSON API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/neighborhoods", web::get().to(get_neighborhoods))
        .route("/cuisines", web::get().to(get_cuisines))
        .route("/restaurants", web::get().to(get_restaurants))
        .route("/restaurants/{id}", web::get().to(get_restaurant));
}

/// Map a provider failure to an HTTP error response
pub(crate) fn provider_error_response(context: &str, err: &ProviderError) -> HttpResponse {
    match err {
        ProviderError::NotFound(id) => HttpResponse::NotFound().json(ErrorResponse::new(
            "Not found",
            format!("Restaurant {} does not exist", id),
            404,
        )),
        _ => {
            tracing::error!("{}: {}", context, err);
            HttpResponse::InternalServerError().json(ErrorResponse::new(context, err.to_string(), 500))
        }
    }
}

/// Health check endpoint
///
/// Reports "degraded" when the data provider cannot currently serve data.
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let healthy = state.provider.fetch_restaurants().await.is_ok();
    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /api/v1/neighborhoods
async fn get_neighborhoods(state: web::Data<AppState>) -> impl Responder {
    match state.provider.fetch_neighborhoods().await {
        Ok(neighborhoods) => HttpResponse::Ok().json(neighborhoods),
        Err(e) => provider_error_response("Failed to fetch neighborhoods", &e),
    }
}

/// GET /api/v1/cuisines
async fn get_cuisines(state: web::Data<AppState>) -> impl Responder {
    match state.provider.fetch_cuisines().await {
        Ok(cuisines) => HttpResponse::Ok().json(cuisines),
        Err(e) => provider_error_response("Failed to fetch cuisines", &e),
    }
}

/// Restaurants filtered by cuisine and neighborhood
///
/// GET /api/v1/restaurants?cuisine={cuisine}&neighborhood={neighborhood}
///
/// Either parameter may be omitted or set to `all`.
async fn get_restaurants(
    state: web::Data<AppState>,
    query: web::Query<RestaurantQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Validation failed",
            errors.to_string(),
            400,
        ));
    }

    let selection = query.selection();
    tracing::debug!(
        "Listing restaurants for cuisine={} neighborhood={}",
        selection.cuisine.as_str(),
        selection.neighborhood.as_str()
    );

    match state
        .provider
        .fetch_restaurants_by_cuisine_and_neighborhood(&selection)
        .await
    {
        Ok(restaurants) => HttpResponse::Ok().json(restaurants),
        Err(e) => provider_error_response("Failed to fetch restaurants", &e),
    }
}

/// GET /api/v1/restaurants/{id}
async fn get_restaurant(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();
    match state.provider.fetch_restaurant_by_id(id).await {
        Ok(restaurant) => HttpResponse::Ok().json(restaurant),
        Err(e) => provider_error_response("Failed to fetch restaurant", &e),
    }
}
