//! # beverage-core: Pure Order Pricing
//!
//! Prices beverage orders written as one comma-separated line, such as
//! `"Coffee, -milk, Tea"`, against a fixed menu.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Beverage Pricing Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                beverage-api (HTTP, axum)                        │   │
//! │  │     POST /orders/total ──► compute_total ──► 200 / 400          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ beverage-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   menu    │  │   money   │  │ validation │  │  pricing  │  │   │
//! │  │   │ MenuItem  │  │   Money   │  │ OrderToken │  │  Session  │  │   │
//! │  │   │Ingredient │  │  (cents)  │  │  tokenize  │  │  compute  │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`] - Menu items, ingredients, prices and recipes
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Order rejection reasons
//! - [`validation`] - Order line checks and tokenizer
//! - [`pricing`] - The pricing session and `compute_total`
//!
//! ## Example Usage
//!
//! ```rust
//! use beverage_core::{compute_total, OrderError};
//!
//! let total = compute_total("Coffee, -milk, Tea, -milk").unwrap();
//! assert_eq!(total.to_string(), "7.00");
//!
//! assert_eq!(
//!     compute_total("Coffee, -Tea"),
//!     Err(OrderError::ItemIngredientMismatch)
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod menu;
pub mod money;
pub mod pricing;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{OrderError, OrderResult};
pub use menu::{Ingredient, MenuItem};
pub use money::Money;
pub use pricing::{compute_total, PricingSession};
