// Copyright 2024 Jeremy Wall (Jeremy@marzhilsltudios.com)
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
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

#[derive(Prop)]
pub struct TagListProps<'ctx> {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub tags: &'ctx Signal<Vec<String>>,
}

/// Freeform chip input. Enter or the add button appends the trimmed entry,
/// the × on a chip removes it.
#[component]
pub fn TagList<'ctx, G: Html>(cx: Scope<'ctx>, props: TagListProps<'ctx>) -> View<G> {
    let TagListProps {
        label,
        placeholder,
        tags,
    } = props;
    let entry = create_signal(cx, String::new());
    let add_tag = move || {
        let tag = entry.get().trim().to_owned();
        if tag.is_empty() {
            return;
        }
        let mut list = tags.get().as_ref().clone();
        list.push(tag);
        tags.set(list);
        entry.set(String::new());
    };
    let indexed_tags = create_memo(cx, || {
        tags.get()
            .iter()
            .cloned()
            .enumerate()
            .collect::<Vec<(usize, String)>>()
    });
    view! {cx,
        div(class="tag-list-field") {
            label { (label) }
            div(class="tag-input-group") {
                input(type="text", placeholder=placeholder, bind:value=entry, on:keypress=move |evt: web_sys::Event| {
                    let event: KeyboardEvent = evt.unchecked_into();
                    if event.key() == "Enter" {
                        event.prevent_default();
                        add_tag();
                    }
                })
                button(type="button", on:click=move |_| add_tag()) { "Add" }
            }
            div(class="tag-list") {
                Indexed(
                    iterable=indexed_tags,
                    view=move |cx, (idx, tag)| view! {cx,
                        span(class="tag") {
                            (tag) " "
                            button(type="button", class="tag-remove", on:click=move |_| {
                                tags.set(tags.get()
                                    .iter()
                                    .enumerate()
                                    .filter(|(i, _)| *i != idx)
                                    .map(|(_, t)| t.clone())
                                    .collect());
                            }) { "×" }
                        }
                    },
                )
            }
        }
    }
}
