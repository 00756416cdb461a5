use crate::api;
use crate::infrastructure::http::middleware::{ApiError, AppState};
use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: AppState) -> Router {
    let delivery = Router::new()
        .route("/api/delivery/schedule", post(api::delivery::get_schedule))
        .route("/api/delivery/validate", post(api::delivery::validate_date))
        .route("/api/delivery/options", post(api::delivery::list_date_options))
        .route("/api/delivery/assign", post(api::delivery::assign_delivery));

    Router::new()
        .route("/health", get(api::delivery::health))
        .merge(delivery)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
