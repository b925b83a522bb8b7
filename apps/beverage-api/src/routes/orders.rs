//! Order pricing endpoint.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use beverage_core::compute_total;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ApiError;

// -- Request types --

#[derive(Debug, Deserialize)]
pub struct OrderTotalRequest {
    /// Comma-separated order line, e.g. `"Coffee, -milk, Tea"`.
    #[serde(default)]
    pub items: Option<String>,
}

// -- Response types --

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotalResponse {
    pub items: String,
    pub total_cents: i64,
    /// Same amount as `total_cents`, rendered with two decimal places.
    pub total: String,
}

// -- Handlers --

/// POST /orders/total — price one order line.
pub async fn total(
    payload: Result<Json<OrderTotalRequest>, JsonRejection>,
) -> Result<Json<OrderTotalResponse>, ApiError> {
    let Json(request) = payload?;
    let items = request.items.unwrap_or_default();

    match compute_total(&items) {
        Ok(total) => {
            info!(items = %items, total = %total, "order priced");
            Ok(Json(OrderTotalResponse {
                items,
                total_cents: total.cents(),
                total: total.to_string(),
            }))
        }
        Err(err) => {
            warn!(items = %items, code = err.code(), "order rejected");
            Err(err.into())
        }
    }
}
