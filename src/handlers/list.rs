use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Comma-separated elements, e.g. `?lst=1,2,3`. Absent means empty.
    #[serde(default)]
    pub lst: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SizeBody {
    pub size: usize,
}

// ─── GET /list_size ──────────────────────────────────────────────

pub async fn list_size(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Json<SizeBody> {
    let size = element_count(&params.lst);
    state.metrics.set_list_size(size as i64);
    Json(SizeBody { size })
}

/// Number of comma-separated elements; the empty string is the empty list.
fn element_count(lst: &str) -> usize {
    if lst.is_empty() {
        0
    } else {
        lst.split(',').count()
    }
}
