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
use sycamore_router::{HistoryIntegration, Route, Router};
use tracing::instrument;

use crate::app_state::StateHandler;
use crate::pages::*;

#[derive(Route, Debug)]
pub enum Routes {
    #[to("/")]
    Home,
    #[to("/recipe/<id>")]
    Recipe(String),
    #[to("/create-recipe")]
    CreateRecipe,
    #[to("/grocery-list")]
    GroceryLists,
    #[to("/grocery-list/<id>")]
    GroceryList(String),
    #[to("/meal-plan")]
    MealPlan,
    #[not_found]
    NotFound,
}

#[instrument(skip_all, fields(?route))]
fn route_switch<'ctx, G: Html>(
    cx: Scope<'ctx>,
    sh: StateHandler<'ctx>,
    route: &Routes,
) -> View<G> {
    match route {
        Routes::Home => view! {cx,
            HomePage(sh)
        },
        Routes::Recipe(id) => view! {cx,
            RecipeViewPage(sh=sh, id=id.clone())
        },
        Routes::CreateRecipe => view! {cx,
            CreateRecipePage(sh)
        },
        Routes::GroceryLists => view! {cx,
            GroceryListsPage(sh)
        },
        Routes::GroceryList(id) => view! {cx,
            GroceryListPage(sh=sh, id=id.clone())
        },
        Routes::MealPlan => view! {cx,
            MealPlanPage(sh)
        },
        Routes::NotFound => view! {cx,
            NotFoundPage()
        },
    }
}

#[component]
pub fn Handler<'ctx, G: Html>(cx: Scope<'ctx>, sh: StateHandler<'ctx>) -> View<G> {
    view! {cx,
        Router(
            integration=HistoryIntegration::new(),
            view=move |cx: Scope, route: &ReadSignal<Routes>| {
                // NOTE(jwall): The route view itself must be the dynamic node.
                // Conditionals directly in this view! call misbehave.
                view! {cx,
                    (route_switch(cx, sh, route.get().as_ref()))
                }
            }
        )
    }
}
