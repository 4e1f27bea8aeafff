use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::AppState;

use super::ResultBody;

#[derive(Debug, Deserialize)]
pub struct SumParams {
    pub n: i64,
}

// ─── GET /sum1n ──────────────────────────────────────────────────

pub async fn sum1n(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SumParams>,
) -> Json<ResultBody<i64>> {
    let result = sum_to(params.n);
    state.metrics.set_last_sum1n(result);
    Json(ResultBody { result })
}

/// Sum of 1..=n, 0 when n < 1. Closed form, same results as the naive loop.
fn sum_to(n: i64) -> i64 {
    if n < 1 {
        0
    } else {
        n * (n + 1) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::sum_to;

    #[test]
    fn matches_the_naive_loop() {
        for n in 0..=200 {
            assert_eq!(sum_to(n), (1..=n).sum::<i64>(), "n = {n}");
        }
    }

    #[test]
    fn non_positive_inputs_sum_to_zero() {
        assert_eq!(sum_to(0), 0);
        assert_eq!(sum_to(-1), 0);
        assert_eq!(sum_to(-100), 0);
    }

    #[test]
    fn closed_form_examples() {
        assert_eq!(sum_to(1), 1);
        assert_eq!(sum_to(10), 55);
        assert_eq!(sum_to(100), 5050);
    }
}
