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
use std::str::FromStr;

use recipes::{RecipeCreate, RecipeIngredientCreate, Unit, ALL_UNITS};
use sycamore::{futures::spawn_local_scoped, prelude::*};
use tracing::{error, info, instrument};

use crate::api::HttpStore;
use crate::app_state::{Message, StateHandler};
use crate::components::toast;

/// One editable ingredient row. Quantity stays a string until submit so
/// partial input like "0." doesn't get clobbered while typing.
#[derive(Clone, Debug, PartialEq)]
struct IngredientRow {
    name: String,
    quantity: String,
    unit: Unit,
}

impl Default for IngredientRow {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: "1".to_owned(),
            unit: Unit::default(),
        }
    }
}

#[instrument(skip_all)]
#[component]
pub fn CreateRecipePage<'ctx, G: Html>(cx: Scope<'ctx>, sh: StateHandler<'ctx>) -> View<G> {
    let store = HttpStore::get_from_context(cx);

    let scrape_url = create_signal(cx, String::new());
    let scraping = create_signal(cx, false);

    let name = create_signal(cx, String::new());
    let prep_instructions = create_signal(cx, String::new());
    let cooking_instructions = create_signal(cx, String::new());
    let prep_time = create_signal(cx, String::new());
    let cook_time = create_signal(cx, String::from("30"));
    let servings = create_signal(cx, String::new());
    let image_url = create_signal(cx, String::new());
    let rows = create_signal(cx, vec![IngredientRow::default()]);

    let scrape = move |_| {
        let url = scrape_url.get().trim().to_owned();
        if url.is_empty() {
            toast::error(cx, "Enter a recipe URL to import", None);
            return;
        }
        scraping.set(true);
        spawn_local_scoped(cx, {
            let store = store.clone();
            async move {
                match store.scrape_recipe(&url).await {
                    Ok(scraped) => {
                        let create = scraped.into_recipe_create();
                        // Only overwrite fields the scraper actually found.
                        if !create.name.is_empty() {
                            name.set(create.name);
                        }
                        if !create.cooking_instructions.is_empty() {
                            cooking_instructions.set(create.cooking_instructions);
                        }
                        cook_time.set(format!("{}", create.cook_time));
                        if let Some(count) = create.servings {
                            servings.set(format!("{}", count));
                        }
                        if let Some(url) = create.image_url {
                            image_url.set(url);
                        }
                        if !create.ingredients.is_empty() {
                            rows.set(
                                create
                                    .ingredients
                                    .into_iter()
                                    .map(|ri| IngredientRow {
                                        name: ri.name,
                                        quantity: format!("{}", ri.quantity),
                                        unit: ri.unit,
                                    })
                                    .collect(),
                            );
                        }
                        toast::message(cx, "Recipe imported. Review before saving.", None);
                    }
                    Err(err) => {
                        error!(%err, "Failed to scrape recipe");
                        toast::error(cx, "Failed to import recipe from that URL", None);
                    }
                }
                scraping.set(false);
            }
        });
    };

    let add_row = |_| {
        let mut list = rows.get().as_ref().clone();
        list.push(IngredientRow::default());
        rows.set(list);
    };

    let submit = move |_| {
        let recipe_name = name.get().trim().to_owned();
        if recipe_name.is_empty() {
            toast::error(cx, "Recipe name is required", None);
            return;
        }
        let instructions = cooking_instructions.get().trim().to_owned();
        if instructions.is_empty() {
            toast::error(cx, "Cooking instructions are required", None);
            return;
        }
        let mut ingredients = Vec::new();
        for row in rows.get().iter() {
            let ingredient_name = row.name.trim().to_owned();
            if ingredient_name.is_empty() {
                continue;
            }
            let quantity = match f64::from_str(row.quantity.trim()) {
                Ok(q) if q > 0.0 => q,
                _ => {
                    toast::error(
                        cx,
                        &format!("Invalid quantity for {}", ingredient_name),
                        None,
                    );
                    return;
                }
            };
            ingredients.push(RecipeIngredientCreate {
                name: ingredient_name,
                quantity,
                unit: row.unit,
            });
        }
        if ingredients.is_empty() {
            toast::error(cx, "At least one ingredient is required", None);
            return;
        }
        let cook_minutes = match u32::from_str(cook_time.get().trim()) {
            Ok(m) => m,
            Err(_) => {
                toast::error(cx, "Cook time must be a number of minutes", None);
                return;
            }
        };
        let prep = prep_instructions.get().trim().to_owned();
        let image = image_url.get().trim().to_owned();
        let create = RecipeCreate {
            name: recipe_name,
            prep_instructions: (!prep.is_empty()).then(|| prep),
            cooking_instructions: instructions,
            prep_time: u32::from_str(prep_time.get().trim()).ok(),
            cook_time: cook_minutes,
            servings: u32::from_str(servings.get().trim()).ok(),
            image_url: (!image.is_empty()).then(|| image),
            ingredients,
        };
        info!(name=%create.name, "Submitting new recipe");
        sh.dispatch(
            cx,
            Message::CreateRecipe(
                create,
                Some(Box::new(|id| {
                    sycamore_router::navigate(&format!("/recipe/{}", id));
                })),
            ),
        );
    };

    let indexed_rows = create_memo(cx, || {
        rows.get()
            .iter()
            .cloned()
            .enumerate()
            .collect::<Vec<(usize, IngredientRow)>>()
    });

    view! {cx,
        div(class="create-recipe-page") {
            h1 { "Create Recipe" }
            section(class="scrape-section") {
                h2 { "Import from URL" }
                div(class="scrape-row") {
                    input(
                        type="url",
                        placeholder="https://example.com/some-recipe",
                        bind:value=scrape_url,
                    )
                    button(disabled=*scraping.get(), on:click=scrape) {
                        (if *scraping.get() { "Importing..." } else { "Import" })
                    }
                }
            }
            section(class="recipe-form") {
                div(class="form-field") {
                    label { "Name" }
                    input(type="text", bind:value=name)
                }
                div(class="form-field") {
                    label { "Image URL" }
                    input(type="url", bind:value=image_url)
                }
                div(class="form-row") {
                    div(class="form-field") {
                        label { "Prep time (minutes)" }
                        input(type="number", min="0", bind:value=prep_time)
                    }
                    div(class="form-field") {
                        label { "Cook time (minutes)" }
                        input(type="number", min="0", bind:value=cook_time)
                    }
                    div(class="form-field") {
                        label { "Servings" }
                        input(type="number", min="1", bind:value=servings)
                    }
                }
                div(class="form-field") {
                    label { "Prep instructions" }
                    textarea(rows="4", bind:value=prep_instructions)
                }
                div(class="form-field") {
                    label { "Cooking instructions" }
                    textarea(rows="8", bind:value=cooking_instructions)
                }
                h2 { "Ingredients" }
                Indexed(
                    iterable=indexed_rows,
                    view=move |cx, (idx, row)| {
                        let quantity = create_signal(cx, row.quantity.clone());
                        let ingredient_name = create_signal(cx, row.name.clone());
                        let unit_name = create_signal(cx, row.unit.name().to_owned());
                        create_effect(cx, move || {
                            let quantity = quantity.get().as_ref().clone();
                            let name = ingredient_name.get().as_ref().clone();
                            let unit = Unit::from_str(unit_name.get().as_str()).unwrap_or_default();
                            let mut list = rows.get_untracked().as_ref().clone();
                            if let Some(entry) = list.get_mut(idx) {
                                if entry.quantity != quantity || entry.name != name || entry.unit != unit {
                                    entry.quantity = quantity;
                                    entry.name = name;
                                    entry.unit = unit;
                                    rows.set(list);
                                }
                            }
                        });
                        view! {cx,
                            div(class="ingredient-row") {
                                input(
                                    type="number",
                                    min="0",
                                    step="0.25",
                                    class="ingredient-quantity",
                                    bind:value=quantity,
                                )
                                select(class="ingredient-unit", bind:value=unit_name) {
                                    Indexed(
                                        iterable=create_signal(cx, ALL_UNITS
                                            .iter()
                                            .map(|u| (u.name().to_owned(), u.label().to_owned()))
                                            .collect::<Vec<(String, String)>>()),
                                        view=|cx, (value, label)| view! {cx,
                                            option(value=value) { (label) }
                                        },
                                    )
                                }
                                input(
                                    type="text",
                                    placeholder="Ingredient name",
                                    class="ingredient-name",
                                    bind:value=ingredient_name,
                                )
                                button(class="remove-button", on:click=move |_| {
                                    let list = rows
                                        .get()
                                        .iter()
                                        .enumerate()
                                        .filter(|(i, _)| *i != idx)
                                        .map(|(_, row)| row.clone())
                                        .collect::<Vec<IngredientRow>>();
                                    if !list.is_empty() {
                                        rows.set(list);
                                    }
                                }) { "✕" }
                            }
                        }
                    },
                )
                button(class="add-ingredient", on:click=add_row) { "+ Add Ingredient" }
                div(class="form-actions") {
                    button(class="submit-button", on:click=submit) { "Save Recipe" }
                }
            }
        }
    }
}
