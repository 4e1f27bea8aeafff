pub mod calculator;
pub mod fibo;
pub mod list;
pub mod sum;

use serde::Serialize;

// ─── Shared response envelope ────────────────────────────────────

/// `{"result": ...}` body returned by the numeric endpoints.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResultBody<T: Serialize> {
    pub result: T,
}
