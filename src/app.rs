//! Router assembly
//!
//! Shared between the server binary and the route tests.

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes;
use crate::state::AppState;

/// Build the full application router over the given state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::router())
        .merge(routes::upload::router())
        .merge(routes::files::router())
        .merge(routes::question::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
