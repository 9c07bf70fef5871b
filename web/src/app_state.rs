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
use std::collections::BTreeSet;

use recipes::{Page, Recipe, RecipeCreate};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_state::{Handler, MessageMapper};
use tracing::{debug, error, instrument};

use crate::api::HttpStore;
use crate::components::toast;

pub const RECIPES_PER_PAGE: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// The currently displayed page of the recipe listing.
    pub recipes: Vec<Recipe>,
    pub page: Page,
    pub has_more: bool,
    /// Recipe ids ticked for grocery-list creation.
    pub selected: BTreeSet<String>,
    pub last_grocery_list: Option<String>,
    pub error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            recipes: Vec::new(),
            page: Page::first(RECIPES_PER_PAGE),
            has_more: false,
            selected: BTreeSet::new(),
            last_grocery_list: None,
            error: None,
        }
    }

    /// Seed `last_grocery_list` from the id the store cached on a previous
    /// visit.
    pub fn with_cached_list(mut self, store: &HttpStore) -> Self {
        self.last_grocery_list = store.cached_grocery_list_id();
        self
    }
}

/// Callback handed the id of a freshly created entity, typically used to
/// navigate to it.
pub type IdCallback = Box<dyn FnOnce(String)>;

pub enum Message {
    LoadRecipePage(Page),
    ToggleSelected(String),
    ClearSelected,
    /// Create a grocery list from the current selection.
    CreateGroceryList(Option<IdCallback>),
    /// Create a single-recipe grocery list, bypassing the selection.
    AddToGroceryList(String, Option<IdCallback>),
    CreateRecipe(RecipeCreate, Option<IdCallback>),
    ClearError,
}

pub struct StateMachine(pub HttpStore);

impl StateMachine {
    async fn load_page(store: HttpStore, original: &Signal<AppState>, page: Page) {
        let mut state = original.get().as_ref().clone();
        match store.fetch_recipes(page.skip(), page.limit).await {
            Ok(recipes) => {
                debug!(count = recipes.len(), page = page.number, "Fetched recipes");
                state.has_more = page.has_more(recipes.len());
                state.recipes = recipes;
                state.page = page;
                state.error = None;
            }
            Err(err) => {
                error!(%err, "Failed to fetch recipes");
                state.error = Some("Failed to fetch recipes".to_owned());
            }
        }
        original.set(state);
    }

    async fn create_list(
        cx: Scope<'_>,
        store: HttpStore,
        original: &Signal<AppState>,
        recipe_ids: Vec<String>,
        callback: Option<IdCallback>,
    ) {
        match store.create_grocery_list(recipe_ids).await {
            Ok(list) => {
                let mut state = original.get().as_ref().clone();
                state.selected.clear();
                state.last_grocery_list = Some(list.id.clone());
                original.set(state);
                if let Some(f) = callback {
                    f(list.id);
                }
            }
            Err(err) => {
                error!(%err, "Failed to create grocery list");
                toast::error(cx, "Failed to create grocery list", None);
            }
        }
    }
}

impl MessageMapper<Message, AppState> for StateMachine {
    #[instrument(skip_all)]
    fn map<'ctx>(&self, cx: Scope<'ctx>, msg: Message, original: &'ctx Signal<AppState>) {
        let mut original_copy = original.get().as_ref().clone();
        match msg {
            Message::LoadRecipePage(page) => {
                let store = self.0.clone();
                spawn_local_scoped(cx, async move {
                    Self::load_page(store, original, page).await;
                });
                return;
            }
            Message::ToggleSelected(id) => {
                if !original_copy.selected.remove(&id) {
                    original_copy.selected.insert(id);
                }
            }
            Message::ClearSelected => {
                original_copy.selected.clear();
            }
            Message::CreateGroceryList(callback) => {
                let recipe_ids: Vec<String> = original_copy.selected.iter().cloned().collect();
                if recipe_ids.is_empty() {
                    toast::error(
                        cx,
                        "Select at least one recipe to create a grocery list",
                        None,
                    );
                    return;
                }
                let store = self.0.clone();
                spawn_local_scoped(cx, async move {
                    Self::create_list(cx, store, original, recipe_ids, callback).await;
                });
                return;
            }
            Message::AddToGroceryList(recipe_id, callback) => {
                let store = self.0.clone();
                spawn_local_scoped(cx, async move {
                    Self::create_list(cx, store, original, vec![recipe_id], callback).await;
                });
                return;
            }
            Message::CreateRecipe(entry, callback) => {
                let store = self.0.clone();
                spawn_local_scoped(cx, async move {
                    match store.create_recipe(&entry).await {
                        Ok(recipe) => {
                            if let Some(f) = callback {
                                f(recipe.id);
                            }
                        }
                        Err(err) => {
                            error!(%err, "Unable to save recipe");
                            toast::error(cx, "Failed to create recipe", None);
                        }
                    }
                });
                return;
            }
            Message::ClearError => {
                original_copy.error = None;
            }
        }
        original.set(original_copy);
    }
}

pub type StateHandler<'ctx> = &'ctx Handler<'ctx, StateMachine, AppState, Message>;

pub fn get_state_handler<'ctx>(
    cx: Scope<'ctx>,
    initial: AppState,
    store: HttpStore,
) -> StateHandler<'ctx> {
    Handler::new(cx, initial, StateMachine(store))
}
