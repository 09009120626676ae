//! Router setup and configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{self, credential, health, identifier, theme};
use crate::api::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    // Health and metrics routes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/metrics", get(health::metrics));

    // Generator routes
    let generator_routes = Router::new()
        .route("/credential", post(credential::generate_credentials))
        .route("/credential/defaults", get(credential::defaults))
        .route("/credential/bounds", get(credential::bounds))
        .route("/credential/mode", post(credential::switch_mode))
        .route("/identifier", post(identifier::generate_identifiers))
        .route("/identifier/defaults", get(identifier::defaults));

    // Preference routes
    let theme_routes = Router::new()
        .route("/theme", get(theme::get_theme).put(theme::set_theme))
        .route("/theme/toggle", post(theme::toggle_theme));

    Router::new()
        .merge(health_routes)
        .nest("/v1", generator_routes.merge(theme_routes))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
