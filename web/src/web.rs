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
use tracing::{info, instrument};

use crate::api::HttpStore;
use crate::app_state::{get_state_handler, AppState};
use crate::components::toast::Container as ToastContainer;
use crate::components::Header;
use crate::routing::Handler as RouteHandler;

/// Base url for the planner api. Served from a separate process in
/// development, so this stays absolute rather than origin relative.
const API_ROOT: &str = "http://localhost:8000";

#[instrument]
#[component]
pub fn UI<G: Html>(cx: Scope) -> View<G> {
    HttpStore::provide_context(cx, API_ROOT);
    info!("Starting UI");
    let store = HttpStore::get_from_context(cx).as_ref().clone();
    let initial = AppState::new().with_cached_list(&store);
    let sh = get_state_handler(cx, initial, store);
    view! {cx,
        div(class="app") {
            Header(sh)
            ToastContainer()
            RouteHandler(sh)
        }
    }
}
