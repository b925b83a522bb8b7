//! Read-only menu listing.

use axum::Json;
use beverage_core::{Ingredient, MenuItem};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemResponse {
    pub id: MenuItem,
    pub name: &'static str,
    pub base_price_cents: i64,
    pub ingredients: Vec<IngredientResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientResponse {
    pub id: Ingredient,
    pub name: &'static str,
    /// `null` when excluding the ingredient refunds nothing.
    pub surcharge_cents: Option<i64>,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        MenuItemResponse {
            id: item,
            name: item.name(),
            base_price_cents: item.base_price().cents(),
            ingredients: item
                .recipe()
                .iter()
                .copied()
                .map(IngredientResponse::from)
                .collect(),
        }
    }
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        IngredientResponse {
            id: ingredient,
            name: ingredient.name(),
            surcharge_cents: ingredient.surcharge().map(|money| money.cents()),
        }
    }
}

/// GET /menu — every menu item with its recipe, in menu order.
pub async fn list() -> Json<Vec<MenuItemResponse>> {
    Json(MenuItem::ALL.into_iter().map(MenuItemResponse::from).collect())
}
