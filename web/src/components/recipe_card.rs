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
use recipes::Recipe;
use sycamore::prelude::*;
use tracing::debug;

use crate::app_state::{Message, StateHandler};

const PREVIEW_INGREDIENTS: usize = 3;

#[derive(Prop)]
pub struct RecipeCardProps<'ctx> {
    pub sh: StateHandler<'ctx>,
    pub recipe: Recipe,
    /// Cards in the listing are selectable for grocery-list creation; cards
    /// rendering meal-plan output are not.
    pub selectable: bool,
}

#[component]
pub fn RecipeCard<'ctx, G: Html>(cx: Scope<'ctx>, props: RecipeCardProps<'ctx>) -> View<G> {
    let RecipeCardProps {
        sh,
        recipe,
        selectable,
    } = props;
    let id = recipe.id.clone();
    let selected = sh.get_selector(cx, {
        let id = id.clone();
        move |state| state.get().selected.contains(&id)
    });
    let name = recipe.name.clone();
    let aria_label = format!("Select {}", name);
    let href = format!("/recipe/{}", recipe.id);
    let view_href = href.clone();
    let total_time = recipe.total_time();
    let servings = recipe.servings;
    let image_url = recipe.image_url.clone().unwrap_or_default();
    let more = recipe
        .recipe_ingredients
        .len()
        .saturating_sub(PREVIEW_INGREDIENTS);
    let preview = create_signal(
        cx,
        recipe
            .recipe_ingredients
            .iter()
            .take(PREVIEW_INGREDIENTS)
            .map(|ri| ri.ingredient.name.clone())
            .collect::<Vec<String>>(),
    );

    view! {cx,
        div(class="recipe-card") {
            div(class="recipe-card-header") {
                (if selectable {
                    let id = id.clone();
                    let aria_label = aria_label.clone();
                    view! {cx,
                        input(
                            type="checkbox",
                            class="recipe-select",
                            aria-label=aria_label,
                            prop:checked=*selected.get(),
                            on:change=move |_| {
                                debug!(recipe_id=%id, "toggling recipe selection");
                                sh.dispatch(cx, Message::ToggleSelected(id.clone()));
                            },
                        )
                    }
                } else {
                    View::empty()
                })
                (if !image_url.is_empty() {
                    let image_url = image_url.clone();
                    view! {cx, img(src=image_url, class="recipe-image") }
                } else {
                    View::empty()
                })
            }
            div(class="recipe-card-content") {
                h3(class="recipe-title") { a(href=href.clone()) { (name) } }
                div(class="recipe-meta") {
                    span(class="recipe-time") { (format!("{} min", total_time)) }
                    (if let Some(count) = servings {
                        view! {cx, span(class="recipe-servings") { (format!("{} servings", count)) } }
                    } else {
                        View::empty()
                    })
                }
                div(class="recipe-ingredients-preview") {
                    Indexed(
                        iterable=preview,
                        view=|cx, ingredient_name| view! {cx,
                            span(class="ingredient-tag") { (ingredient_name) }
                        },
                    )
                    (if more > 0 {
                        view! {cx, span(class="more-ingredients") { (format!("+{} more", more)) } }
                    } else {
                        View::empty()
                    })
                }
                div(class="recipe-card-actions") {
                    a(href=view_href.clone()) { "View Recipe" }
                }
            }
        }
    }
}
