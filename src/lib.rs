use std::sync::Arc;

pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod server;

/// Shared application state available to every handler via `State<Arc<AppState>>`.
pub struct AppState {
    /// Central metric registry — the middleware and handlers write,
    /// the scrape endpoint reads.
    pub metrics: Arc<metrics::ApiMetrics>,
}
