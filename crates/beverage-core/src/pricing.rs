//! # Pricing Engine
//!
//! Turns an order line into a total, or the first business rule it breaks.
//!
//! ## Token Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Coffee, -milk, Tea, -milk"                                            │
//! │                                                                         │
//! │  token      current   remaining   total                                 │
//! │  ────────   ───────   ─────────   ─────                                 │
//! │  Coffee     Coffee        4        5.00   (+ base price)                │
//! │  -milk      Coffee        3        4.00   (- milk surcharge)            │
//! │  Tea        Tea           4        8.00   (+ base price, count reset)   │
//! │  -milk      Tea           3        7.00                                 │
//! │                                                                         │
//! │  finish: item present, total > 0  →  Ok(7.00)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Session Scope
//! Every call to [`compute_total`] builds its own [`PricingSession`]. Nothing
//! survives between orders, so pricing the same line twice always gives the
//! same answer.

use crate::error::{OrderError, OrderResult};
use crate::menu::MenuItem;
use crate::money::Money;
use crate::validation::{tokenize, validate_order_line, OrderToken};

// =============================================================================
// Pricing Session
// =============================================================================

/// Mutable state while one order line is being priced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricingSession {
    total: Money,
    current_item: Option<MenuItem>,
    remaining_ingredients: usize,
}

impl PricingSession {
    /// Starts an empty session: zero total, no current item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Running total so far.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Most recently added menu item, if any.
    pub fn current_item(&self) -> Option<MenuItem> {
        self.current_item
    }

    /// Ingredients of the current item not yet excluded.
    pub fn remaining_ingredients(&self) -> usize {
        self.remaining_ingredients
    }

    /// Applies one token.
    ///
    /// ## Rules
    /// - Exclusion with no current item → `InvalidOrderRequest`
    /// - Addition naming no menu item → ignored
    /// - Exclusion outside the current recipe → `ItemIngredientMismatch`
    /// - Current item left with zero ingredients → `InvalidOrderRequest`
    pub fn apply(&mut self, token: OrderToken<'_>) -> OrderResult<()> {
        match token {
            OrderToken::Addition(name) => {
                if let Some(item) = MenuItem::from_name(name) {
                    self.add_item(item);
                }
            }
            OrderToken::Exclusion(name) => self.exclude(name)?,
        }

        if self.current_item.is_some() && self.remaining_ingredients == 0 {
            return Err(OrderError::InvalidOrderRequest);
        }

        Ok(())
    }

    /// Adds a menu item and makes it the context for later exclusions.
    pub fn add_item(&mut self, item: MenuItem) {
        self.total += item.base_price();
        self.current_item = Some(item);
        self.remaining_ingredients = item.recipe().len();
    }

    fn exclude(&mut self, name: &str) -> OrderResult<()> {
        let item = self.current_item.ok_or(OrderError::InvalidOrderRequest)?;
        let ingredient = item
            .recipe_ingredient(name)
            .ok_or(OrderError::ItemIngredientMismatch)?;

        // Every exclusion token counts, even a repeat of the same ingredient.
        self.remaining_ingredients = self.remaining_ingredients.saturating_sub(1);
        if let Some(surcharge) = ingredient.surcharge() {
            self.total -= surcharge;
        }

        Ok(())
    }

    /// Checks the end-of-order rules and yields the total.
    ///
    /// ## Rules
    /// - No menu item ever added → `InvalidOrderRequest`
    /// - Total ≤ 0 → `TotalBillNegative`
    pub fn finish(self) -> OrderResult<Money> {
        if self.current_item.is_none() {
            return Err(OrderError::InvalidOrderRequest);
        }

        if !self.total.is_positive() {
            return Err(OrderError::TotalBillNegative);
        }

        Ok(self.total)
    }
}

// =============================================================================
// Engine Entry Point
// =============================================================================

/// Prices a comma-separated order line such as `"Coffee, -milk, Tea"`.
///
/// Stops at the first violated rule.
///
/// ## Example
/// ```rust
/// use beverage_core::pricing::compute_total;
/// use beverage_core::{Money, OrderError};
///
/// assert_eq!(compute_total("Coffee,Tea, -milk"), Ok(Money::from_cents(800)));
/// assert_eq!(compute_total("-milk"), Err(OrderError::InvalidOrderRequest));
/// ```
pub fn compute_total(order_line: &str) -> OrderResult<Money> {
    let line = validate_order_line(order_line)?;

    let mut session = PricingSession::new();
    for token in tokenize(line) {
        session.apply(token)?;
    }

    session.finish()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(line: &str) -> i64 {
        compute_total(line).unwrap().cents()
    }

    #[test]
    fn test_items_without_exclusion() {
        assert_eq!(cents("Coffee,Tea"), 900);
        assert_eq!(cents("Mojito"), 700);
        assert_eq!(cents("Strawberry Shake, Chai"), 1150);
    }

    #[test]
    fn test_exclusion_applies_to_current_item() {
        // milk comes off Tea, the item named last
        assert_eq!(cents("Coffee,Tea, -milk"), 800);
    }

    #[test]
    fn test_exclusions_across_items() {
        assert_eq!(cents("Coffee, -milk, Tea, -milk"), 700);
    }

    #[test]
    fn test_free_ingredient_exclusion_refunds_nothing() {
        assert_eq!(cents("Coffee, -coffee"), 500);
        assert_eq!(cents("Strawberry Shake, -strawberries"), 750);
    }

    #[test]
    fn test_name_matching_is_case_insensitive() {
        assert_eq!(cents("COFFEE, -MILK"), 400);
        assert_eq!(cents("banana smoothie, -Sugar"), 550);
    }

    #[test]
    fn test_exclusion_order_does_not_change_total() {
        assert_eq!(
            cents("Mojito, -soda, -mint, -sugar"),
            cents("Mojito, -sugar, -soda, -mint")
        );
        assert_eq!(cents("Mojito, -soda, -mint, -sugar"), 550);
    }

    #[test]
    fn test_unknown_additions_are_skipped() {
        assert_eq!(cents("Latte, Coffee"), 500);
        assert_eq!(cents("Coffee,,Tea,"), 900);
        assert_eq!(cents("milk, Tea"), 400);
    }

    #[test]
    fn test_blank_input_rejected() {
        assert_eq!(compute_total(""), Err(OrderError::InvalidOrderRequest));
        assert_eq!(compute_total("   "), Err(OrderError::InvalidOrderRequest));
    }

    #[test]
    fn test_menu_item_as_exclusion_is_mismatch() {
        assert_eq!(
            compute_total("Coffee,-Tea, -milk"),
            Err(OrderError::ItemIngredientMismatch)
        );
    }

    #[test]
    fn test_ingredient_outside_recipe_is_mismatch() {
        assert_eq!(
            compute_total("Mojito, -milk"),
            Err(OrderError::ItemIngredientMismatch)
        );
        // Not an ingredient at all
        assert_eq!(
            compute_total("Coffee, -cream"),
            Err(OrderError::ItemIngredientMismatch)
        );
        assert_eq!(
            compute_total("Coffee, -"),
            Err(OrderError::ItemIngredientMismatch)
        );
    }

    #[test]
    fn test_bare_ingredient_is_not_an_order() {
        assert_eq!(compute_total("milk"), Err(OrderError::InvalidOrderRequest));
        assert_eq!(compute_total(",,"), Err(OrderError::InvalidOrderRequest));
    }

    #[test]
    fn test_exclusion_before_any_item() {
        assert_eq!(compute_total("-milk"), Err(OrderError::InvalidOrderRequest));
        assert_eq!(
            compute_total("-milk, Coffee"),
            Err(OrderError::InvalidOrderRequest)
        );
        // Unknown addition does not establish a current item
        assert_eq!(
            compute_total("Latte, -milk"),
            Err(OrderError::InvalidOrderRequest)
        );
    }

    #[test]
    fn test_excluding_every_ingredient() {
        assert_eq!(
            compute_total("Coffee, -coffee, -milk, -sugar, -water"),
            Err(OrderError::InvalidOrderRequest)
        );
    }

    #[test]
    fn test_zero_ingredients_fails_mid_sequence() {
        // Later tokens would be fine, but processing stops at zero.
        assert_eq!(
            compute_total("Tea, -tea, -milk, -sugar, -water, Coffee"),
            Err(OrderError::InvalidOrderRequest)
        );
    }

    #[test]
    fn test_repeated_exclusion_counts_twice() {
        assert_eq!(cents("Tea, -milk, -milk"), 200);
        assert_eq!(
            compute_total("Tea, -milk, -milk, -milk, -milk"),
            Err(OrderError::InvalidOrderRequest)
        );
    }

    #[test]
    fn test_new_item_resets_remaining_count() {
        // Three exclusions on each item, never four on one.
        assert_eq!(
            cents("Coffee, -milk, -sugar, -water, Coffee, -milk, -sugar, -water"),
            600
        );
    }

    #[test]
    fn test_pricing_is_idempotent() {
        let line = "Coffee, -milk, Tea, -milk";
        assert_eq!(compute_total(line), compute_total(line));
        assert_eq!(compute_total("-milk"), compute_total("-milk"));
    }

    #[test]
    fn test_session_tracks_state() {
        let mut session = PricingSession::new();
        session.apply(OrderToken::Addition("Mojito")).unwrap();
        session.apply(OrderToken::Exclusion("mint")).unwrap();

        assert_eq!(session.current_item(), Some(MenuItem::Mojito));
        assert_eq!(session.remaining_ingredients(), 4);
        assert_eq!(session.total(), Money::from_cents(650));
    }

    #[test]
    fn test_finish_without_item() {
        assert_eq!(
            PricingSession::new().finish(),
            Err(OrderError::InvalidOrderRequest)
        );
    }

    #[test]
    fn test_finish_rejects_non_positive_total() {
        let zero = PricingSession {
            total: Money::zero(),
            current_item: Some(MenuItem::Tea),
            remaining_ingredients: 1,
        };
        assert_eq!(zero.finish(), Err(OrderError::TotalBillNegative));

        let negative = PricingSession {
            total: Money::from_cents(-50),
            current_item: Some(MenuItem::Tea),
            remaining_ingredients: 1,
        };
        assert_eq!(negative.finish(), Err(OrderError::TotalBillNegative));
    }
}
