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

use client_api::{MealPlanRequest, MealPlanResponse, MAX_MEALS, MIN_MEALS};
use sycamore::{futures::spawn_local_scoped, prelude::*};
use tracing::{error, info, instrument};

use crate::api::HttpStore;
use crate::app_state::StateHandler;
use crate::components::{
    recipe_card::{RecipeCard, RecipeCardProps},
    tag_list::TagList,
    toast,
};

#[instrument(skip_all)]
#[component]
pub fn MealPlanPage<'ctx, G: Html>(cx: Scope<'ctx>, sh: StateHandler<'ctx>) -> View<G> {
    let store = HttpStore::get_from_context(cx);

    let num_meals = create_signal(cx, String::from("3"));
    let total_time = create_signal(cx, String::new());
    let preferred_ingredients = create_signal(cx, Vec::<String>::new());
    let dietary_restrictions = create_signal(cx, Vec::<String>::new());
    let cuisine_preferences = create_signal(cx, Vec::<String>::new());
    let generating = create_signal(cx, false);
    let plan = create_signal(cx, None::<MealPlanResponse>);

    let generate = move |_| {
        let meals = match u32::from_str(num_meals.get().trim()) {
            Ok(n) => n,
            Err(_) => {
                toast::error(cx, "Number of meals must be a number", None);
                return;
            }
        };
        let mut request = MealPlanRequest::new(meals);
        request.total_time_minutes = u32::from_str(total_time.get().trim()).ok();
        request.preferred_ingredients = preferred_ingredients.get().as_ref().clone();
        request.dietary_restrictions = dietary_restrictions.get().as_ref().clone();
        request.cuisine_preferences = cuisine_preferences.get().as_ref().clone();
        if let Err(msg) = request.validate() {
            toast::error(cx, &msg, None);
            return;
        }
        info!(num_meals = meals, "Requesting meal plan");
        generating.set(true);
        spawn_local_scoped(cx, {
            let store = store.clone();
            async move {
                match store.generate_meal_plan(&request).await {
                    Ok(response) => {
                        if response.recipes.is_empty() {
                            toast::message(cx, "No recipes matched those preferences", None);
                        }
                        plan.set(Some(response));
                    }
                    Err(err) => {
                        error!(%err, "Failed to generate meal plan");
                        toast::error(cx, "Failed to generate meal plan", None);
                    }
                }
                generating.set(false);
            }
        });
    };

    let plan_recipes = create_memo(cx, || {
        plan.get()
            .as_ref()
            .as_ref()
            .map(|p| p.recipes.clone())
            .unwrap_or_default()
    });

    view! {cx,
        div(class="meal-plan-page") {
            h1 { "Meal Plan" }
            p(class="page-description") {
                "Tell us what you're in the mood for and we'll pick recipes and build the grocery list."
            }
            section(class="meal-plan-form") {
                div(class="form-row") {
                    div(class="form-field") {
                        label { (format!("Number of meals ({}-{})", MIN_MEALS, MAX_MEALS)) }
                        input(type="number", min="1", max="20", bind:value=num_meals)
                    }
                    div(class="form-field") {
                        label { "Max total time per meal (minutes, optional)" }
                        input(type="number", min="0", bind:value=total_time)
                    }
                }
                TagList(
                    label="Preferred ingredients",
                    placeholder="e.g. chicken",
                    tags=preferred_ingredients,
                )
                TagList(
                    label="Dietary restrictions",
                    placeholder="e.g. vegetarian",
                    tags=dietary_restrictions,
                )
                TagList(
                    label="Cuisine preferences",
                    placeholder="e.g. italian",
                    tags=cuisine_preferences,
                )
                button(
                    class="generate-button",
                    disabled=*generating.get(),
                    on:click=generate,
                ) {
                    (if *generating.get() { "Generating..." } else { "Generate Meal Plan" })
                }
            }
            (if plan.get().is_some() {
                view! {cx,
                    section(class="meal-plan-results") {
                        div(class="results-header") {
                            h2 { "Your Meal Plan" }
                            (if let Some(list_id) = plan.get().as_ref().as_ref().and_then(|p| p.grocery_list_id.clone()) {
                                view! {cx,
                                    button(class="view-list-button", on:click=move |_| {
                                        sycamore_router::navigate(&format!("/grocery-list/{}", list_id));
                                    }) { "View Grocery List" }
                                }
                            } else {
                                View::empty()
                            })
                        }
                        div(class="recipe-grid") {
                            Indexed(
                                iterable=plan_recipes,
                                view=move |cx, recipe| RecipeCard(cx, RecipeCardProps {
                                    sh,
                                    recipe,
                                    selectable: false,
                                }),
                            )
                        }
                    }
                }
            } else {
                View::empty()
            })
        }
    }
}
