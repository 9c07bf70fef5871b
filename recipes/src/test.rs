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
use crate::*;

use std::str::FromStr;

fn item(id: &str, name: &str, qty: f64, unit: Unit) -> GroceryListItem {
    GroceryListItem {
        id: id.to_owned(),
        grocery_list_id: "list-1".to_owned(),
        ingredient_id: format!("ing-{}", name),
        quantity: qty,
        unit,
        ingredient: Ingredient {
            id: format!("ing-{}", name),
            name: name.to_owned(),
        },
    }
}

#[test]
fn test_unit_wire_names_round_trip() {
    for unit in ALL_UNITS {
        assert_eq!(Unit::from_str(unit.name()), Ok(unit));
    }
    assert!(Unit::from_str("hogshead").is_err());
}

#[test]
fn test_unit_serde_encoding() {
    let encoded = serde_json::to_string(&Unit::Tablespoon).unwrap();
    assert_eq!(encoded, "\"tablespoon\"");
    let decoded: Unit = serde_json::from_str("\"milliliter\"").unwrap();
    assert_eq!(decoded, Unit::Milliliter);
}

#[test]
fn test_unit_labels() {
    assert_eq!(Unit::Tablespoon.label(), "tbsp");
    assert_eq!(Unit::Kilogram.label(), "kg");
    assert_eq!(Unit::Each.label(), "each");
    assert_eq!(Unit::Package.label(), "pkg");
}

#[test]
fn test_group_by_ingredient_sorts_and_groups() {
    let items = vec![
        item("1", "tomato", 2.0, Unit::Each),
        item("2", "basil", 1.0, Unit::Bunch),
        item("3", "tomato", 1.0, Unit::Can),
    ];
    let grouped = group_by_ingredient(&items);
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[0].0, "basil");
    assert_eq!(grouped[1].0, "tomato");
    // Same-ingredient lines keep their original order.
    assert_eq!(grouped[1].1[0].id, "1");
    assert_eq!(grouped[1].1[1].id, "3");
}

#[test]
fn test_group_by_ingredient_empty() {
    assert!(group_by_ingredient(&[]).is_empty());
}

#[test]
fn test_page_arithmetic() {
    let first = Page::first(12);
    assert_eq!(first.skip(), 0);
    assert_eq!(first.next().skip(), 12);
    assert_eq!(first.next().next().skip(), 24);
    assert_eq!(first.prev(), first);
    assert_eq!(first.next().prev(), first);
}

#[test]
fn test_page_has_more() {
    let page = Page::first(12);
    assert!(page.has_more(12));
    assert!(!page.has_more(11));
    assert!(!page.has_more(0));
}

#[test]
fn test_recipe_total_time() {
    let mut recipe = Recipe {
        id: "r1".to_owned(),
        name: "Soup".to_owned(),
        prep_instructions: None,
        cooking_instructions: "Simmer.".to_owned(),
        prep_time: Some(10),
        cook_time: 25,
        servings: Some(4),
        image_url: None,
        recipe_ingredients: Vec::new(),
    };
    assert_eq!(recipe.total_time(), 35);
    recipe.prep_time = None;
    assert_eq!(recipe.total_time(), 25);
}

#[test]
fn test_format_quantity() {
    assert_eq!(format_quantity(2.0), "2");
    assert_eq!(format_quantity(0.25), "0.25");
    assert_eq!(format_quantity(1.5), "1.5");
    assert_eq!(format_quantity(0.0), "0");
}

#[test]
fn test_recipe_decodes_backend_shape() {
    let payload = r#"{
        "id": "abc",
        "name": "Pasta",
        "cooking_instructions": "Boil.\nDrain.",
        "cook_time": 12,
        "recipe_ingredients": [
            {
                "id": "ri-1",
                "recipe_id": "abc",
                "ingredient_id": "ing-1",
                "quantity": 0.5,
                "unit": "pound",
                "ingredient": {"id": "ing-1", "name": "spaghetti"}
            }
        ]
    }"#;
    let recipe: Recipe = serde_json::from_str(payload).unwrap();
    assert_eq!(recipe.prep_time, None);
    assert_eq!(recipe.servings, None);
    assert_eq!(recipe.recipe_ingredients.len(), 1);
    assert_eq!(recipe.recipe_ingredients[0].unit, Unit::Pound);
    assert_eq!(recipe.total_time(), 12);
}
