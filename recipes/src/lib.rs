// Copyright 2024 Jeremy Wall
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
pub mod unit;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use unit::{Unit, ALL_UNITS};

/// A pantry ingredient. Identity and uniqueness are owned by the backend.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
}

/// An ingredient as used by one recipe, with its quantity and unit and the
/// linked `Ingredient` record embedded.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecipeIngredient {
    pub id: String,
    pub recipe_id: String,
    pub ingredient_id: String,
    pub quantity: f64,
    pub unit: Unit,
    pub ingredient: Ingredient,
}

/// A stored recipe as the backend returns it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_instructions: Option<String>,
    pub cooking_instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    pub cook_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub recipe_ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    /// Prep plus cook time in minutes.
    pub fn total_time(&self) -> u32 {
        self.prep_time.unwrap_or(0) + self.cook_time
    }
}

/// Payload for creating a recipe. The backend assigns ids and resolves
/// ingredient names to `Ingredient` records.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RecipeCreate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_instructions: Option<String>,
    pub cooking_instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    pub cook_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredientCreate>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecipeIngredientCreate {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
}

/// One line of a grocery list. Same shape as `RecipeIngredient` but scoped
/// to a list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GroceryListItem {
    pub id: String,
    pub grocery_list_id: String,
    pub ingredient_id: String,
    pub quantity: f64,
    pub unit: Unit,
    pub ingredient: Ingredient,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GroceryList {
    pub id: String,
    #[serde(default)]
    pub items: Option<Vec<GroceryListItem>>,
}

impl GroceryList {
    pub fn items(&self) -> &[GroceryListItem] {
        self.items.as_deref().unwrap_or(&[])
    }
}

/// Group grocery items under their ingredient name, sorted by name.
/// Items for the same ingredient stay in their original order so separate
/// unit lines (e.g. 2 cup and 1 can of tomatoes) remain distinct rows.
pub fn group_by_ingredient(items: &[GroceryListItem]) -> Vec<(String, Vec<GroceryListItem>)> {
    let mut grouped: BTreeMap<String, Vec<GroceryListItem>> = BTreeMap::new();
    for item in items {
        grouped
            .entry(item.ingredient.name.clone())
            .or_default()
            .push(item.clone());
    }
    grouped.into_iter().collect()
}

/// Pagination window over an offset/limit listing endpoint.
///
/// The backend exposes no total count so `has_more` is inferred from the
/// size of the last fetched page.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub limit: usize,
}

impl Page {
    pub fn first(limit: usize) -> Self {
        Self { number: 1, limit }
    }

    /// Offset to request for this page.
    pub fn skip(&self) -> usize {
        (self.number - 1) * self.limit
    }

    /// A full page means there may be another one after it.
    pub fn has_more(&self, fetched: usize) -> bool {
        fetched == self.limit
    }

    pub fn next(&self) -> Self {
        Self {
            number: self.number + 1,
            limit: self.limit,
        }
    }

    /// Previous page, saturating at page 1.
    pub fn prev(&self) -> Self {
        Self {
            number: if self.number > 1 { self.number - 1 } else { 1 },
            limit: self.limit,
        }
    }
}

/// Render a quantity without a trailing `.0` for whole amounts.
pub fn format_quantity(qty: f64) -> String {
    if qty.fract() == 0.0 {
        format!("{}", qty as i64)
    } else {
        format!("{}", qty)
    }
}

#[cfg(test)]
mod test;
