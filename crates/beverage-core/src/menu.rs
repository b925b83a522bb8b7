//! # Menu Tables
//!
//! The fixed menu and ingredient price tables, compiled in.
//!
//! ## Table Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Menu Table                                      │
//! │                                                                         │
//! │  MenuItem           Recipe                              Base price      │
//! │  ────────────────   ─────────────────────────────────   ──────────      │
//! │  Coffee             coffee, milk, sugar, water               5.00       │
//! │  Chai               tea, milk, sugar, water                  4.00       │
//! │  Tea                tea, milk, sugar, water                  4.00       │
//! │  Banana Smoothie    banana, milk, sugar, water               6.00       │
//! │  Mojito             lemon, sugar, water, soda, mint          7.00       │
//! │  Strawberry Shake   strawberries, sugar, milk, water         7.50       │
//! │                                                                         │
//! │                    Ingredient Price Table                               │
//! │                                                                         │
//! │  milk 1.00 │ sugar 0.50 │ soda 0.50 │ mint 0.50 │ water 0.50            │
//! │  (coffee, tea, banana, lemon, strawberries carry no surcharge)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Name Matching
//! Lookups by name are trimmed and case-insensitive. An unknown name is a
//! normal `None`, never an error; callers decide whether a miss matters.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Ingredient
// =============================================================================

/// A named component of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Ingredient {
    Coffee,
    Tea,
    Banana,
    Lemon,
    Strawberries,
    Milk,
    Sugar,
    Water,
    Soda,
    Mint,
}

impl Ingredient {
    /// Every ingredient, in declaration order.
    pub const ALL: [Ingredient; 10] = [
        Ingredient::Coffee,
        Ingredient::Tea,
        Ingredient::Banana,
        Ingredient::Lemon,
        Ingredient::Strawberries,
        Ingredient::Milk,
        Ingredient::Sugar,
        Ingredient::Water,
        Ingredient::Soda,
        Ingredient::Mint,
    ];

    /// Canonical lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Ingredient::Coffee => "coffee",
            Ingredient::Tea => "tea",
            Ingredient::Banana => "banana",
            Ingredient::Lemon => "lemon",
            Ingredient::Strawberries => "strawberries",
            Ingredient::Milk => "milk",
            Ingredient::Sugar => "sugar",
            Ingredient::Water => "water",
            Ingredient::Soda => "soda",
            Ingredient::Mint => "mint",
        }
    }

    /// Surcharge refunded when this ingredient is excluded.
    ///
    /// `None` means the ingredient is not in the price table: excluding it
    /// costs and refunds nothing.
    pub const fn surcharge(&self) -> Option<Money> {
        match self {
            Ingredient::Milk => Some(Money::from_cents(100)),
            Ingredient::Sugar
            | Ingredient::Soda
            | Ingredient::Mint
            | Ingredient::Water => Some(Money::from_cents(50)),
            Ingredient::Coffee
            | Ingredient::Tea
            | Ingredient::Banana
            | Ingredient::Lemon
            | Ingredient::Strawberries => None,
        }
    }

    /// Resolves a name case-insensitively.
    ///
    /// ## Example
    /// ```rust
    /// use beverage_core::menu::Ingredient;
    ///
    /// assert_eq!(Ingredient::from_name(" MILK "), Some(Ingredient::Milk));
    /// assert_eq!(Ingredient::from_name("cream"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Ingredient> {
        let name = name.trim();
        Ingredient::ALL
            .into_iter()
            .find(|ingredient| ingredient.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A purchasable beverage with a fixed recipe and base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MenuItem {
    Coffee,
    Chai,
    Tea,
    BananaSmoothie,
    Mojito,
    StrawberryShake,
}

impl MenuItem {
    /// Every menu item, in menu order.
    pub const ALL: [MenuItem; 6] = [
        MenuItem::Coffee,
        MenuItem::Chai,
        MenuItem::Tea,
        MenuItem::BananaSmoothie,
        MenuItem::Mojito,
        MenuItem::StrawberryShake,
    ];

    /// Display name as written on the menu.
    pub const fn name(&self) -> &'static str {
        match self {
            MenuItem::Coffee => "Coffee",
            MenuItem::Chai => "Chai",
            MenuItem::Tea => "Tea",
            MenuItem::BananaSmoothie => "Banana Smoothie",
            MenuItem::Mojito => "Mojito",
            MenuItem::StrawberryShake => "Strawberry Shake",
        }
    }

    /// Base price before any exclusion.
    pub const fn base_price(&self) -> Money {
        match self {
            MenuItem::Coffee => Money::from_cents(500),
            MenuItem::Chai | MenuItem::Tea => Money::from_cents(400),
            MenuItem::BananaSmoothie => Money::from_cents(600),
            MenuItem::Mojito => Money::from_cents(700),
            MenuItem::StrawberryShake => Money::from_cents(750),
        }
    }

    /// Ordered recipe. Never empty.
    pub const fn recipe(&self) -> &'static [Ingredient] {
        use Ingredient::*;
        match self {
            MenuItem::Coffee => &[Coffee, Milk, Sugar, Water],
            MenuItem::Chai | MenuItem::Tea => &[Tea, Milk, Sugar, Water],
            MenuItem::BananaSmoothie => &[Banana, Milk, Sugar, Water],
            MenuItem::Mojito => &[Lemon, Sugar, Water, Soda, Mint],
            MenuItem::StrawberryShake => &[Strawberries, Sugar, Milk, Water],
        }
    }

    /// Checks whether `ingredient` is part of this item's recipe.
    pub fn contains(&self, ingredient: Ingredient) -> bool {
        self.recipe().contains(&ingredient)
    }

    /// Resolves `name` against this item's recipe only.
    ///
    /// ## Example
    /// ```rust
    /// use beverage_core::menu::{Ingredient, MenuItem};
    ///
    /// assert_eq!(MenuItem::Coffee.recipe_ingredient("Milk"), Some(Ingredient::Milk));
    /// assert_eq!(MenuItem::Coffee.recipe_ingredient("tea"), None);
    /// ```
    pub fn recipe_ingredient(&self, name: &str) -> Option<Ingredient> {
        let name = name.trim();
        self.recipe()
            .iter()
            .copied()
            .find(|ingredient| ingredient.name().eq_ignore_ascii_case(name))
    }

    /// Resolves a menu item name case-insensitively.
    ///
    /// ## Example
    /// ```rust
    /// use beverage_core::menu::MenuItem;
    ///
    /// assert_eq!(MenuItem::from_name("coffee"), Some(MenuItem::Coffee));
    /// assert_eq!(MenuItem::from_name("banana smoothie"), Some(MenuItem::BananaSmoothie));
    /// assert_eq!(MenuItem::from_name("milk"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<MenuItem> {
        let name = name.trim();
        MenuItem::ALL
            .into_iter()
            .find(|item| item.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
