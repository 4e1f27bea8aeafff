use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::AppState;

use super::ResultBody;

#[derive(Debug, Deserialize)]
pub struct FiboParams {
    pub n: i64,
}

// ─── GET /fibo ───────────────────────────────────────────────────

pub async fn fibo(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FiboParams>,
) -> Json<ResultBody<i64>> {
    let result = fib(params.n);
    state.metrics.set_last_fibo(result);
    Json(ResultBody { result })
}

/// Naive doubly-recursive Fibonacci. Exponential cost is deliberate:
/// the endpoint's latency growth with `n` is observable behavior.
fn fib(n: i64) -> i64 {
    if n <= 1 {
        n
    } else {
        fib(n - 1) + fib(n - 2)
    }
}
