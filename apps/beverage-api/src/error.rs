//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /orders/total { "items": "Coffee, -Tea" }                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  compute_total ── Err(OrderError::ItemIngredientMismatch)               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ApiError ──► 400 { "code": "ITEM_INGREDIENT_MISMATCH",                 │
//! │                     "message": "Item/ingredient mismatch." }            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use beverage_core::OrderError;
use serde::Serialize;

/// API error returned from handlers.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INVALID_ORDER_REQUEST",
///   "message": "Invalid order request."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    #[serde(skip)]
    pub status: StatusCode,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            status,
        }
    }
}

/// Every order rejection is the client's fault.
impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, err.code(), err.to_string())
    }
}

/// An unreadable request body carries no order line, which is the same
/// outcome as a blank one.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "rejected request body");
        OrderError::InvalidOrderRequest.into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
