// Copyright 2024 Jeremy Wall (Jeremy@marzhilsltudios.com)
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
/*!
Request and response types exchanged with the backend api.

Entity payloads (recipes, grocery lists) live in the `recipes` crate; this
crate only holds the envelopes that are not entities themselves.
*/
use serde::{Deserialize, Serialize};

use recipes::{RecipeCreate, RecipeIngredientCreate};

/// Body for `POST /grocery-lists/`. The backend aggregates the ingredients
/// of the named recipes into a new list.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateGroceryListRequest {
    pub recipe_ids: Vec<String>,
}

/// Body for `POST /recipes/scrape`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScrapeRequest {
    pub url: String,
}

/// What the scraper hands back. Every field is best-effort.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ScrapedRecipe {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cooking_instructions: Option<String>,
    /// Combined prep+cook time in minutes when the source site reports one.
    #[serde(default)]
    pub total_time: Option<u32>,
    /// Freeform, e.g. "4 servings" or "4".
    #[serde(default)]
    pub yields: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredientCreate>,
}

impl ScrapedRecipe {
    /// Normalize scraper output into a create payload the user can edit.
    /// The scraper does not split prep from cook time so `total_time` lands
    /// in `cook_time`, and `servings` is the first integer run in `yields`.
    pub fn into_recipe_create(self) -> RecipeCreate {
        let servings = self.yields.as_deref().and_then(first_integer);
        RecipeCreate {
            name: self.name.unwrap_or_default(),
            prep_instructions: None,
            cooking_instructions: self.cooking_instructions.unwrap_or_default(),
            prep_time: None,
            cook_time: self.total_time.unwrap_or(0),
            servings,
            image_url: self.image_url,
            ingredients: self.ingredients,
        }
    }
}

fn first_integer(text: &str) -> Option<u32> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Body for `POST /meal-plan/generate`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MealPlanRequest {
    pub num_meals: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time_minutes: Option<u32>,
    #[serde(default)]
    pub preferred_ingredients: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub cuisine_preferences: Vec<String>,
}

pub const MIN_MEALS: u32 = 1;
pub const MAX_MEALS: u32 = 20;

impl MealPlanRequest {
    pub fn new(num_meals: u32) -> Self {
        Self {
            num_meals,
            total_time_minutes: None,
            preferred_ingredients: Vec::new(),
            dietary_restrictions: Vec::new(),
            cuisine_preferences: Vec::new(),
        }
    }

    /// Client-side guard matching the backend's bounds. The backend rejects
    /// out-of-range requests anyway; checking here saves a round trip.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_meals < MIN_MEALS || self.num_meals > MAX_MEALS {
            return Err(format!(
                "Number of meals must be between {} and {}",
                MIN_MEALS, MAX_MEALS
            ));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MealPlanResponse {
    pub recipes: Vec<recipes::Recipe>,
    #[serde(default)]
    pub grocery_list_id: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;
    use recipes::Unit;

    #[test]
    fn test_scraped_yields_parsing() {
        let scraped = ScrapedRecipe {
            yields: Some("4 servings".to_owned()),
            ..Default::default()
        };
        assert_eq!(scraped.into_recipe_create().servings, Some(4));
        let scraped = ScrapedRecipe {
            yields: Some("Makes 12".to_owned()),
            ..Default::default()
        };
        assert_eq!(scraped.into_recipe_create().servings, Some(12));
        let scraped = ScrapedRecipe {
            yields: Some("a few".to_owned()),
            ..Default::default()
        };
        assert_eq!(scraped.into_recipe_create().servings, None);
    }

    #[test]
    fn test_scraped_total_time_maps_to_cook_time() {
        let scraped = ScrapedRecipe {
            name: Some("Chili".to_owned()),
            total_time: Some(45),
            ingredients: vec![RecipeIngredientCreate {
                name: "beans".to_owned(),
                quantity: 2.0,
                unit: Unit::Can,
            }],
            ..Default::default()
        };
        let create = scraped.into_recipe_create();
        assert_eq!(create.name, "Chili");
        assert_eq!(create.cook_time, 45);
        assert_eq!(create.prep_time, None);
        assert_eq!(create.ingredients.len(), 1);
    }

    #[test]
    fn test_scraped_empty_defaults() {
        let create = ScrapedRecipe::default().into_recipe_create();
        assert_eq!(create.name, "");
        assert_eq!(create.cooking_instructions, "");
        assert_eq!(create.cook_time, 0);
        assert!(create.ingredients.is_empty());
    }

    #[test]
    fn test_meal_plan_validation_bounds() {
        assert!(MealPlanRequest::new(0).validate().is_err());
        assert!(MealPlanRequest::new(1).validate().is_ok());
        assert!(MealPlanRequest::new(20).validate().is_ok());
        assert!(MealPlanRequest::new(21).validate().is_err());
    }

    #[test]
    fn test_meal_plan_request_omits_empty_time() {
        let encoded = serde_json::to_string(&MealPlanRequest::new(7)).unwrap();
        assert!(!encoded.contains("total_time_minutes"));
        assert!(encoded.contains("\"num_meals\":7"));
    }
}
