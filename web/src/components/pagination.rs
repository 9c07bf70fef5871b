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
use tracing::debug;

use crate::app_state::{Message, StateHandler};

#[derive(Prop)]
pub struct PaginationProps<'ctx> {
    pub sh: StateHandler<'ctx>,
    pub page: &'ctx ReadSignal<Page>,
    pub has_more: &'ctx ReadSignal<bool>,
}

/// Previous/next controls for the recipe listing. There is no total count
/// from the backend so paging forward is allowed only off a full page.
#[component]
pub fn Pagination<'ctx, G: Html>(cx: Scope<'ctx>, props: PaginationProps<'ctx>) -> View<G> {
    let PaginationProps { sh, page, has_more } = props;
    view! {cx,
        div(class="pagination no-print") {
            button(disabled=page.get().number == 1, on:click=move |_| {
                let prev = page.get().prev();
                debug!(page = prev.number, "paging back");
                sh.dispatch(cx, Message::LoadRecipePage(prev));
            }) { "← Previous" }
            span(class="page-info") { (format!("Page {}", page.get().number)) }
            button(disabled=!*has_more.get(), on:click=move |_| {
                let next = page.get().next();
                debug!(page = next.number, "paging forward");
                sh.dispatch(cx, Message::LoadRecipePage(next));
            }) { "Next →" }
        }
    }
}
