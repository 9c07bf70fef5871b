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
use recipes::Page;
use sycamore::prelude::*;
use tracing::{info, instrument};

use crate::app_state::{Message, StateHandler, RECIPES_PER_PAGE};
use crate::components::{Pagination, RecipeCard};

#[instrument(skip_all)]
#[component]
pub fn HomePage<'ctx, G: Html>(cx: Scope<'ctx>, sh: StateHandler<'ctx>) -> View<G> {
    let recipes = sh.get_selector(cx, |state| state.get().recipes.clone());
    let page = sh.get_selector(cx, |state| state.get().page);
    let has_more = sh.get_selector(cx, |state| state.get().has_more);
    let selected_count = sh.get_selector(cx, |state| state.get().selected.len());
    let error = sh.get_selector(cx, |state| state.get().error.clone());

    info!("Synchronizing recipe listing");
    sh.dispatch(cx, Message::LoadRecipePage(Page::first(RECIPES_PER_PAGE)));

    view! {cx,
        div(class="home-page") {
            div(class="page-header") {
                h1 { "Recipe Collection" }
                a(href="/create-recipe") { "Add New Recipe" }
            }
            (if let Some(msg) = error.get().as_ref() {
                let msg = msg.clone();
                view! {cx,
                    div(class="error") {
                        (msg) " "
                        button(class="dismiss-error", on:click=move |_| {
                            sh.dispatch(cx, Message::ClearError);
                        }) { "Dismiss" }
                    }
                }
            } else {
                View::empty()
            })
            (if *selected_count.get() > 0 {
                let count = *selected_count.get();
                view! {cx,
                    div(class="selected-recipes-bar") {
                        span { (format!("{} recipe{} selected", count, if count > 1 { "s" } else { "" })) }
                        button(on:click=move |_| {
                            sh.dispatch(cx, Message::CreateGroceryList(Some(Box::new(|id| {
                                sycamore_router::navigate(&format!("/grocery-list/{}", id));
                            }))));
                        }) { "Create Grocery List" }
                        button(on:click=move |_| {
                            sh.dispatch(cx, Message::ClearSelected);
                        }) { "Clear Selection" }
                    }
                }
            } else {
                View::empty()
            })
            div(class="recipes-grid") {
                Indexed(
                    iterable=recipes,
                    view=move |cx, recipe| view! {cx,
                        RecipeCard(sh=sh, recipe=recipe, selectable=true)
                    },
                )
            }
            (if recipes.get().is_empty() && error.get().is_none() {
                view! {cx,
                    div(class="empty-state") {
                        h2 { "No recipes yet" }
                        p { "Get started by creating your first recipe!" }
                        a(href="/create-recipe") { "Create Recipe" }
                    }
                }
            } else {
                View::empty()
            })
            Pagination(sh=sh, page=page, has_more=has_more)
        }
    }
}
