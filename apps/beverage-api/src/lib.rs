//! # Beverage API
//!
//! HTTP server that prices beverage orders with `beverage-core`.
//!
//! ## Module Organization
//! ```text
//! beverage_api/
//! ├── lib.rs          ◄─── Router construction, tracing setup
//! ├── main.rs         ◄─── Binary entry point
//! ├── config.rs       ◄─── Environment configuration
//! ├── error.rs        ◄─── ApiError { code, message } → HTTP 400
//! └── routes/
//!     ├── health.rs   ◄─── GET  /health
//!     ├── menu.rs     ◄─── GET  /menu
//!     └── orders.rs   ◄─── POST /orders/total
//! ```

pub mod config;
pub mod error;
pub mod routes;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::config::ApiConfig;

/// Creates the Axum application router.
///
/// The engine keeps no state between orders, so the router has none either.
pub fn create_app() -> Router {
    Router::new()
        .route("/health", get(routes::health::check))
        .route("/menu", get(routes::menu::list))
        .route("/orders/total", post(routes::orders::total))
        .layer(TraceLayer::new_for_http())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set (e.g. `RUST_LOG=beverage_api=debug`)
/// - Otherwise `config.log_level` (`BEVERAGE_LOG`, default `info`)
pub fn init_tracing(config: &ApiConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
