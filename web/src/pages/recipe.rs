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
use recipes::{format_quantity, Recipe};
use sycamore::{futures::spawn_local_scoped, prelude::*};
use tracing::{error, instrument};

use crate::api::HttpStore;
use crate::app_state::{Message, StateHandler};

#[derive(Prop)]
pub struct RecipeViewProps<'ctx> {
    pub sh: StateHandler<'ctx>,
    pub id: String,
}

/// Paragraphs split on newlines, the way the instruction fields are stored.
fn paragraphs<'a, G: Html>(cx: Scope<'a>, text: &str) -> View<G> {
    View::new_fragment(
        text.split('\n')
            .map(|line| {
                let line = line.to_owned();
                view! {cx, p { (line) } }
            })
            .collect(),
    )
}

#[instrument(skip_all, fields(recipe_id=%props.id))]
#[component]
pub fn RecipeViewPage<'ctx, G: Html>(cx: Scope<'ctx>, props: RecipeViewProps<'ctx>) -> View<G> {
    let RecipeViewProps { sh, id } = props;
    let store = HttpStore::get_from_context(cx);
    let recipe = create_signal(cx, None::<Recipe>);
    let error_text = create_signal(cx, None::<String>);
    let loading = create_signal(cx, true);

    spawn_local_scoped(cx, {
        let store = store.clone();
        let id = id.clone();
        async move {
            match store.fetch_recipe(&id).await {
                Ok(Some(found)) => recipe.set(Some(found)),
                Ok(None) => error_text.set(Some("Recipe not found".to_owned())),
                Err(err) => {
                    error!(%err, "Failed to fetch recipe");
                    error_text.set(Some("Failed to fetch recipe".to_owned()));
                }
            }
            loading.set(false);
        }
    });

    view! {cx,
        div(class="recipe-view-page") {
            nav(class="breadcrumb no-print") {
                a(href="/") { "← Back to Recipes" }
            }
            (if *loading.get() {
                view! {cx, div(class="loading") { "Loading recipe..." } }
            } else if let Some(msg) = error_text.get().as_ref() {
                let msg = msg.clone();
                view! {cx, div(class="error") { (msg) } }
            } else if let Some(recipe) = recipe.get().as_ref() {
                let recipe = recipe.clone();
                let recipe_id = recipe.id.clone();
                let name = recipe.name.clone();
                let image_url = recipe.image_url.clone().unwrap_or_default();
                let prep_time = recipe.prep_time;
                let cook_time = recipe.cook_time;
                let total_time = recipe.total_time();
                let servings = recipe.servings;
                let prep_instructions = recipe.prep_instructions.clone().unwrap_or_default();
                let cooking_instructions = recipe.cooking_instructions.clone();
                let ingredient_lines = create_signal(cx, recipe
                    .recipe_ingredients
                    .iter()
                    .map(|ri| format!(
                        "{} {} {}",
                        format_quantity(ri.quantity),
                        ri.unit.label(),
                        ri.ingredient.name,
                    ))
                    .collect::<Vec<String>>());
                view! {cx,
                    div(class="recipe-title-section") {
                        h1 { (name) }
                        button(on:click=move |_| {
                            sh.dispatch(cx, Message::AddToGroceryList(recipe_id.clone(), Some(Box::new(|id| {
                                sycamore_router::navigate(&format!("/grocery-list/{}", id));
                            }))));
                        }) { "Add to Grocery List" }
                    }
                    (if !image_url.is_empty() {
                        let image_url = image_url.clone();
                        view! {cx, div(class="recipe-image-container") { img(src=image_url, class="recipe-main-image") } }
                    } else {
                        View::empty()
                    })
                    div(class="recipe-meta-info") {
                        (if let Some(prep) = prep_time {
                            view! {cx, div(class="meta-item") { span(class="meta-label") { "Prep Time: " } span { (format!("{} min", prep)) } } }
                        } else {
                            View::empty()
                        })
                        div(class="meta-item") { span(class="meta-label") { "Cook Time: " } span { (format!("{} min", cook_time)) } }
                        div(class="meta-item") { span(class="meta-label") { "Total Time: " } span { (format!("{} min", total_time)) } }
                        (if let Some(count) = servings {
                            view! {cx, div(class="meta-item") { span(class="meta-label") { "Servings: " } span { (count) } } }
                        } else {
                            View::empty()
                        })
                    }
                    div(class="recipe-content") {
                        div(class="recipe-ingredients") {
                            h2 { "Ingredients" }
                            ul(class="ingredients-list") {
                                Indexed(
                                    iterable=ingredient_lines,
                                    view=|cx, line| view! {cx, li(class="ingredient-item") { (line) } },
                                )
                            }
                        }
                        div(class="recipe-instructions") {
                            (if !prep_instructions.is_empty() {
                                let prep_instructions = prep_instructions.clone();
                                view! {cx,
                                    div(class="prep-instructions") {
                                        h2 { "Preparation Instructions" }
                                        div(class="instructions-content") { (paragraphs(cx, &prep_instructions)) }
                                    }
                                }
                            } else {
                                View::empty()
                            })
                            div(class="cooking-instructions") {
                                h2 { "Cooking Instructions" }
                                div(class="instructions-content") { (paragraphs(cx, &cooking_instructions)) }
                            }
                        }
                    }
                }
            } else {
                view! {cx, div(class="error") { "Recipe not found" } }
            })
        }
    }
}
