use std::sync::Arc;

use compute_observatory::{metrics, server, AppState};

#[tokio::main]
async fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════╗");
    println!("║   🔬  COMPUTE OBSERVATORY                        ║");
    println!("╚══════════════════════════════════════════════════╝");
    println!();

    // ── 1. Build shared state ────────────────────────────────────
    let state = Arc::new(AppState {
        metrics: Arc::new(
            metrics::ApiMetrics::new().expect("metric registration"),
        ),
    });

    // ── 2. Build Axum router ─────────────────────────────────────
    let app = server::create_router(state);

    // ── 3. Bind & serve ──────────────────────────────────────────
    let addr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_owned());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind — is the port already in use?");

    println!("Server listening on http://{addr}");
    println!("Endpoints  → /sum1n /fibo /calculator /list_size");
    println!("Prometheus → /metrics");
    println!();

    axum::serve(listener, app)
        .await
        .expect("Server exited with error");
}
