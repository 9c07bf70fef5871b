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
use sycamore::prelude::*;

use crate::app_state::StateHandler;

#[component]
pub fn Header<'ctx, G: Html>(cx: Scope<'ctx>, sh: StateHandler<'ctx>) -> View<G> {
    // The grocery link reopens the most recently created list when we know
    // about one.
    let grocery_href = sh.get_selector(cx, |state| match &state.get().last_grocery_list {
        Some(id) => format!("/grocery-list/{}", id),
        None => "/grocery-list".to_owned(),
    });
    view! {cx,
        nav(class="no-print") {
            h1(class="title") { a(href="/") { "Meal Planner" } }
            ul {
                li { a(href="/") { "Recipes" } }
                li { a(href="/create-recipe") { "Create Recipe" } }
                li { a(href=grocery_href.get().as_ref().clone()) { "Grocery List" } }
                li { a(href="/meal-plan") { "Meal Plan" } }
            }
        }
    }
}
