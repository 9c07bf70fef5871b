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
use std::str::FromStr;

use recipes::{format_quantity, group_by_ingredient, GroceryListItem, Unit, ALL_UNITS};
use sycamore::{futures::spawn_local_scoped, prelude::*};
use tracing::{error, instrument};

use crate::api::HttpStore;
use crate::app_state::StateHandler;
use crate::js_lib;

/// Route target for `/grocery-list` with no id. Forwards to the most
/// recently created list when we have one cached, otherwise explains how
/// to get a list.
#[component]
pub fn GroceryListsPage<'ctx, G: Html>(cx: Scope<'ctx>, sh: StateHandler<'ctx>) -> View<G> {
    let last_id = sh.get_selector(cx, |state| state.get().last_grocery_list.clone());
    let store = HttpStore::get_from_context(cx);
    let cached = last_id
        .get_untracked()
        .as_ref()
        .clone()
        .or_else(|| store.cached_grocery_list_id());
    if let Some(id) = cached {
        spawn_local_scoped(cx, async move {
            sycamore_router::navigate(&format!("/grocery-list/{}", id));
        });
        return view! {cx, };
    }
    view! {cx,
        div(class="grocery-list-page") {
            h1 { "Grocery List" }
            div(class="empty-state") {
                p { "No grocery list yet." }
                p { "Select recipes on the " a(href="/") { "recipes page" } " and create one." }
            }
        }
    }
}

#[derive(Prop)]
pub struct GroceryListProps<'ctx> {
    pub sh: StateHandler<'ctx>,
    pub id: String,
}

#[instrument(skip_all, fields(list_id=%props.id))]
#[component]
pub fn GroceryListPage<'ctx, G: Html>(cx: Scope<'ctx>, props: GroceryListProps<'ctx>) -> View<G> {
    let GroceryListProps { sh: _, id } = props;
    let store = HttpStore::get_from_context(cx);
    let items = create_signal(cx, Vec::<GroceryListItem>::new());
    let checked = create_signal(cx, BTreeSet::<String>::new());
    let error_text = create_signal(cx, None::<String>);
    let loading = create_signal(cx, true);

    spawn_local_scoped(cx, {
        let store = store.clone();
        let id = id.clone();
        async move {
            match store.fetch_grocery_list(&id).await {
                Ok(Some(list)) => items.set(list.items().to_vec()),
                Ok(None) => error_text.set(Some("Grocery list not found".to_owned())),
                Err(err) => {
                    error!(%err, "Failed to fetch grocery list");
                    error_text.set(Some("Failed to fetch grocery list".to_owned()));
                }
            }
            loading.set(false);
        }
    });

    let grouped = create_memo(cx, || group_by_ingredient(items.get().as_ref()));
    let remaining = create_memo(cx, || {
        items
            .get()
            .iter()
            .filter(|item| !checked.get().contains(&item.id))
            .count()
    });

    view! {cx,
        div(class="grocery-list-page") {
            nav(class="breadcrumb no-print") {
                a(href="/") { "← Back to Recipes" }
            }
            div(class="grocery-list-header") {
                h1 { "Grocery List" }
                button(class="print-button no-print", on:click=|_| js_lib::print_page()) {
                    "Print List"
                }
            }
            (if *loading.get() {
                view! {cx, div(class="loading") { "Loading grocery list..." } }
            } else if let Some(msg) = error_text.get().as_ref() {
                let msg = msg.clone();
                view! {cx, div(class="error") { (msg) } }
            } else if items.get().is_empty() {
                view! {cx, div(class="empty-state") { p { "This grocery list is empty." } } }
            } else {
                view! {cx,
                    p(class="list-summary no-print") {
                        (format!("{} of {} items remaining", *remaining.get(), items.get().len()))
                    }
                    ul(class="grocery-groups") {
                        Indexed(
                            iterable=grouped,
                            view=move |cx, (ingredient_name, group)| view! {cx,
                                li(class="grocery-group") {
                                    h2(class="ingredient-name") { (ingredient_name) }
                                    ul(class="grocery-items") {
                                        Indexed(
                                            iterable=create_signal(cx, group.clone()),
                                            view=move |cx, item| GroceryItemRow(cx, GroceryItemRowProps {
                                                items,
                                                checked,
                                                item,
                                            }),
                                        )
                                    }
                                }
                            },
                        )
                    }
                }
            })
        }
    }
}

#[derive(Prop)]
struct GroceryItemRowProps<'ctx> {
    items: &'ctx Signal<Vec<GroceryListItem>>,
    checked: &'ctx Signal<BTreeSet<String>>,
    item: GroceryListItem,
}

/// A single editable grocery line. Quantity and unit edits are purely
/// local, they never write back to the server.
#[component]
fn GroceryItemRow<'ctx, G: Html>(cx: Scope<'ctx>, props: GroceryItemRowProps<'ctx>) -> View<G> {
    let GroceryItemRowProps {
        items,
        checked,
        item,
    } = props;
    let item_id = create_ref(cx, item.id.clone());
    let ingredient_name = item.ingredient.name.clone();
    let editing = create_signal(cx, false);
    let quantity = create_signal(cx, format!("{}", item.quantity));
    let unit_name = create_signal(cx, item.unit.name().to_owned());
    let display = create_memo(cx, move || {
        items
            .get()
            .iter()
            .find(|entry| &entry.id == item_id)
            .map(|entry| format!("{} {}", format_quantity(entry.quantity), entry.unit.label()))
            .unwrap_or_default()
    });
    let is_checked = create_memo(cx, move || checked.get().contains(item_id));

    let save_edit = move |_| {
        let parsed = f64::from_str(quantity.get().trim());
        if let Ok(new_quantity) = parsed {
            if new_quantity > 0.0 {
                let unit = Unit::from_str(unit_name.get().as_str()).unwrap_or_default();
                let mut list = items.get().as_ref().clone();
                if let Some(entry) = list.iter_mut().find(|entry| &entry.id == item_id) {
                    entry.quantity = new_quantity;
                    entry.unit = unit;
                }
                items.set(list);
            }
        }
        editing.set(false);
    };

    let remove = move |_| {
        if js_lib::confirm("Remove this item from the list?") {
            let list = items
                .get()
                .iter()
                .filter(|entry| &entry.id != item_id)
                .cloned()
                .collect::<Vec<GroceryListItem>>();
            items.set(list);
        }
    };

    let toggle = move |_| {
        let mut set = checked.get().as_ref().clone();
        if !set.remove(item_id) {
            set.insert(item_id.clone());
        }
        checked.set(set);
    };

    view! {cx,
        li(class=if *is_checked.get() { "grocery-item checked" } else { "grocery-item" }) {
            input(
                type="checkbox",
                class="item-checkbox",
                prop:checked=*is_checked.get(),
                on:change=toggle,
            )
            (if *editing.get() {
                view! {cx,
                    span(class="item-edit") {
                        input(
                            type="number",
                            min="0",
                            step="0.25",
                            class="edit-quantity",
                            bind:value=quantity,
                        )
                        select(class="edit-unit", bind:value=unit_name) {
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
                        button(class="save-edit", on:click=save_edit) { "Save" }
                        button(class="cancel-edit", on:click=|_| editing.set(false)) { "Cancel" }
                    }
                }
            } else {
                let ingredient_name = ingredient_name.clone();
                view! {cx,
                    span(class="item-display") {
                        span(class="item-amount") { (display.get()) }
                        span(class="item-ingredient") { (ingredient_name) }
                        button(class="edit-item no-print", on:click=|_| editing.set(true)) { "Edit" }
                        button(class="remove-item no-print", on:click=remove) { "Remove" }
                    }
                }
            })
        }
    }
}
