use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;

use crate::AppState;

/// Instrumentation middleware wrapped around every route:
///
///   http_requests_total{method,endpoint}        — +1 on arrival
///   http_requests_milliseconds{method,endpoint} — one observation on completion
///
/// The response passes through untouched. Also prints a coloured
/// one-liner to stdout for development.
pub async fn track_request(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    state.metrics.inc_request(method.as_str(), &path);

    let start = Instant::now();
    let response = next.run(req).await;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    state
        .metrics
        .observe_duration(method.as_str(), &path, elapsed_ms);

    // ── Console log ─────────────────────────────────────────────
    let status = response.status().as_u16();
    let colour = match status {
        200..=299 => "\x1b[32m", // green
        400..=499 => "\x1b[33m", // yellow
        _ => "\x1b[31m",        // red
    };
    println!(
        "  {colour}{status}\x1b[0m  {method:<5} {path:<20} {elapsed_ms:>9.3}ms"
    );

    response
}
