use axum::{middleware as axum_mw, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::handlers;
use crate::metrics::scrape;
use crate::middleware::timing;
use crate::AppState;

/// Builds the full Axum `Router` with all routes and middleware.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // ── Compute endpoints ───────────────────────────────────
        .route("/sum1n", get(handlers::sum::sum1n))
        .route("/fibo", get(handlers::fibo::fibo))
        .route("/calculator", get(handlers::calculator::calculator))
        .route("/list_size", get(handlers::list::list_size))
        // ── Prometheus scrape ───────────────────────────────────
        .route("/metrics", get(scrape::scrape))
        // ── Provide shared state to all routes above ────────────
        .with_state(state.clone())
        // ── Global middleware (applied bottom-up) ───────────────
        .layer(axum_mw::from_fn_with_state(state, timing::track_request))
        .layer(CorsLayer::permissive())
}
