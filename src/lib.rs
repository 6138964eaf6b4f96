use axum::Router;
use tower_http::trace::TraceLayer;

use state::AppState;

pub mod config;
pub mod profile;
pub mod state;

/// Builds the service router with every API route nested under `/api/v1`.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .nest(
            "/api/v1",
            Router::new()
                .nest("/profile", profile::routes::routes(app_state))
        )
        .layer(TraceLayer::new_for_http())
}
