//! # Error Types
//!
//! Domain-specific error types for beverage-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  beverage-core errors (this file)                                       │
//! │  └── OrderError       - Order line rejected by a business rule          │
//! │                                                                         │
//! │  beverage-api errors (app crate)                                        │
//! │  └── ApiError         - What HTTP clients see (serialized, 400)         │
//! │                                                                         │
//! │  Flow: OrderError → ApiError { code, message } → Client                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant carries a fixed, client-facing message and a stable code

use thiserror::Error;

// =============================================================================
// Order Error
// =============================================================================

/// Reasons an order line can be rejected.
///
/// All variants are client-input errors; none of them signals an internal
/// failure. The `Display` text is the exact message returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum OrderError {
    /// The order line is blank, excludes before naming an item, strips an
    /// item down to nothing, or never names a menu item.
    ///
    /// ## When This Occurs
    /// ```text
    /// ""                                   → blank input
    /// "-milk"                              → exclusion with no current item
    /// "milk"                               → no menu item at all
    /// "Coffee, -coffee, -milk, -sugar, -water"
    ///                                      → every ingredient excluded
    /// ```
    #[error("Invalid order request.")]
    InvalidOrderRequest,

    /// An exclusion names an ingredient that is not in the current item's
    /// recipe (e.g. `"Coffee, -Tea"`).
    #[error("Item/ingredient mismatch.")]
    ItemIngredientMismatch,

    /// The computed total is zero or negative.
    #[error("Total bill cannot be negative.")]
    TotalBillNegative,

    /// Reserved for stricter ingredient validation. Not raised by the pricing
    /// engine today.
    #[error("Invalid ingredient.")]
    InvalidIngredient,
}

impl OrderError {
    /// Machine-readable code for API responses.
    pub const fn code(&self) -> &'static str {
        match self {
            OrderError::InvalidOrderRequest => "INVALID_ORDER_REQUEST",
            OrderError::ItemIngredientMismatch => "ITEM_INGREDIENT_MISMATCH",
            OrderError::TotalBillNegative => "TOTAL_BILL_NEGATIVE",
            OrderError::InvalidIngredient => "INVALID_INGREDIENT",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with OrderError.
pub type OrderResult<T> = Result<T, OrderError>;

// =============================================================================
// Unit Tests
// =============================================================================
