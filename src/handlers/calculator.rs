use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CalcParams {
    pub a: f64,
    pub b: f64,
    pub op: String,
}

// ─── Domain errors ───────────────────────────────────────────────

/// Calculator errors are reported in the body, not the status code:
/// clients always get a 200 carrying either `result` or `error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    DivisionByZero,
    InvalidOperation,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::InvalidOperation => write!(f, "Invalid operation"),
        }
    }
}

/// Serialized as `{"result": ...}` or `{"error": ...}`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CalcResponse {
    Ok { result: f64 },
    Err { error: String },
}

// ─── GET /calculator ─────────────────────────────────────────────

pub async fn calculator(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CalcParams>,
) -> Json<CalcResponse> {
    match evaluate(params.a, params.b, &params.op) {
        Ok(result) => {
            state.metrics.set_last_calculator(result);
            Json(CalcResponse::Ok { result })
        }
        Err(e) => {
            // The gauge keeps its previous value on the error path.
            state.metrics.inc_calculator_error();
            Json(CalcResponse::Err {
                error: e.to_string(),
            })
        }
    }
}

/// The four supported operations; anything else is rejected.
pub fn evaluate(a: f64, b: f64, op: &str) -> Result<f64, CalcError> {
    match op {
        "+" => Ok(a + b),
        "-" => Ok(a - b),
        "*" => Ok(a * b),
        "/" => {
            if b == 0.0 {
                Err(CalcError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        }
        _ => Err(CalcError::InvalidOperation),
    }
}

#[cfg(test)]
mod tests {
    use super::{evaluate, CalcError};

    #[test]
    fn four_operations() {
        assert_eq!(evaluate(6.0, 3.0, "+"), Ok(9.0));
        assert_eq!(evaluate(6.0, 3.0, "-"), Ok(3.0));
        assert_eq!(evaluate(6.0, 3.0, "*"), Ok(18.0));
        assert_eq!(evaluate(6.0, 3.0, "/"), Ok(2.0));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(evaluate(6.0, 0.0, "/"), Err(CalcError::DivisionByZero));
        // Negative zero compares equal to zero
        assert_eq!(evaluate(6.0, -0.0, "/"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn unknown_operators_are_rejected() {
        assert_eq!(evaluate(6.0, 3.0, "%"), Err(CalcError::InvalidOperation));
        assert_eq!(evaluate(6.0, 3.0, "**"), Err(CalcError::InvalidOperation));
        assert_eq!(evaluate(6.0, 3.0, ""), Err(CalcError::InvalidOperation));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            CalcError::InvalidOperation.to_string(),
            "Invalid operation"
        );
        assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
    }
}
