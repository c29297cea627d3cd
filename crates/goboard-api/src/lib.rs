//! goboard API — HTTP surface of the game ledger.
//!
//! Exposes the ledger's game, move and SGF operations as a JSON API and owns
//! process concerns: configuration, telemetry and error mapping.

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full application router: health check, the `/api` routes,
/// request tracing and CORS.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::games::router())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors_layer())
        .layer(axum::middleware::from_fn(middleware::preflight_no_content))
        .with_state(state)
}
