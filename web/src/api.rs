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
use gloo_net::http::Request;
use sycamore::prelude::*;
use tracing::{debug, instrument};
use wasm_bindgen::JsValue;

use client_api::{
    CreateGroceryListRequest, MealPlanRequest, MealPlanResponse, ScrapeRequest, ScrapedRecipe,
};
use recipes::{GroceryList, Recipe, RecipeCreate};

use crate::js_lib;

/// localStorage key for the most recently created grocery list.
const GROCERY_LIST_KEY: &'static str = "grocery_list_id";

#[derive(Debug)]
pub struct Error(String);

impl std::fmt::Display for Error {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(w, "{}", self.0)
    }
}

impl From<Error> for String {
    fn from(item: Error) -> Self {
        item.0
    }
}

impl From<JsValue> for Error {
    fn from(item: JsValue) -> Self {
        Error(format!("{:?}", item))
    }
}

impl From<String> for Error {
    fn from(item: String) -> Self {
        Error(item)
    }
}

impl From<&'static str> for Error {
    fn from(item: &'static str) -> Self {
        Error(item.to_owned())
    }
}

impl From<gloo_net::Error> for Error {
    fn from(item: gloo_net::Error) -> Self {
        Error(format!("{:?}", item))
    }
}

impl From<serde_json::Error> for Error {
    fn from(item: serde_json::Error) -> Self {
        Error(format!("{:?}", item))
    }
}

/// Thin client over the backend REST api. The store holds no state beyond
/// the api root; every call is a plain request/response round trip.
#[derive(Clone, Debug)]
pub struct HttpStore {
    root: String,
}

impl HttpStore {
    pub fn new(root: String) -> Self {
        Self { root }
    }

    pub fn provide_context<S: Into<String>>(cx: Scope, root: S) {
        provide_context(cx, std::rc::Rc::new(Self::new(root.into())));
    }

    pub fn get_from_context(cx: Scope) -> std::rc::Rc<Self> {
        use_context::<std::rc::Rc<Self>>(cx).clone()
    }

    #[instrument]
    pub async fn fetch_recipes(&self, skip: usize, limit: usize) -> Result<Vec<Recipe>, Error> {
        let path = format!("{}/recipes/?skip={}&limit={}", self.root, skip, limit);
        let resp = Request::get(&path).send().await?;
        if resp.status() != 200 {
            Err(format!("Status: {}", resp.status()).into())
        } else {
            debug!("We got a valid response back!");
            Ok(resp.json().await?)
        }
    }

    #[instrument]
    pub async fn fetch_recipe(&self, id: &str) -> Result<Option<Recipe>, Error> {
        let path = format!("{}/recipes/{}", self.root, id);
        let resp = Request::get(&path).send().await?;
        if resp.status() == 404 {
            debug!("Recipe doesn't exist");
            Ok(None)
        } else if resp.status() != 200 {
            Err(format!("Status: {}", resp.status()).into())
        } else {
            debug!("We got a valid response back!");
            Ok(Some(resp.json().await?))
        }
    }

    #[instrument(skip(recipe), fields(name=%recipe.name))]
    pub async fn create_recipe(&self, recipe: &RecipeCreate) -> Result<Recipe, Error> {
        let path = format!("{}/recipes/", self.root);
        let resp = Request::post(&path)
            .header("content-type", "application/json")
            .json(recipe)?
            .send()
            .await?;
        if resp.status() != 200 {
            Err(format!("Status: {}", resp.status()).into())
        } else {
            debug!("We got a valid response back!");
            Ok(resp.json().await?)
        }
    }

    #[instrument]
    pub async fn scrape_recipe(&self, url: &str) -> Result<ScrapedRecipe, Error> {
        let path = format!("{}/recipes/scrape", self.root);
        let resp = Request::post(&path)
            .header("content-type", "application/json")
            .json(&ScrapeRequest {
                url: url.to_owned(),
            })?
            .send()
            .await?;
        if resp.status() != 200 {
            Err(format!("Status: {}", resp.status()).into())
        } else {
            debug!("We got a valid response back!");
            Ok(resp.json().await?)
        }
    }

    #[instrument(skip(recipe_ids), fields(count=recipe_ids.len()))]
    pub async fn create_grocery_list(
        &self,
        recipe_ids: Vec<String>,
    ) -> Result<GroceryList, Error> {
        if recipe_ids.is_empty() {
            return Err("At least one recipe id is required".into());
        }
        let path = format!("{}/grocery-lists/", self.root);
        let resp = Request::post(&path)
            .header("content-type", "application/json")
            .json(&CreateGroceryListRequest { recipe_ids })?
            .send()
            .await?;
        if resp.status() != 200 {
            Err(format!("Status: {}", resp.status()).into())
        } else {
            debug!("We got a valid response back!");
            let list: GroceryList = resp.json().await?;
            // Remember the list so the nav link can reopen it later.
            if let Err(err) = js_lib::get_storage().set(GROCERY_LIST_KEY, &list.id) {
                debug!(?err, "Unable to cache grocery list id");
            }
            Ok(list)
        }
    }

    #[instrument]
    pub async fn fetch_grocery_list(&self, id: &str) -> Result<Option<GroceryList>, Error> {
        let path = format!("{}/grocery-lists/{}", self.root, id);
        let resp = Request::get(&path).send().await?;
        if resp.status() == 404 {
            debug!("No such grocery list");
            Ok(None)
        } else if resp.status() != 200 {
            Err(format!("Status: {}", resp.status()).into())
        } else {
            debug!("We got a valid response back!");
            Ok(Some(resp.json().await?))
        }
    }

    #[instrument(skip(request), fields(num_meals=request.num_meals))]
    pub async fn generate_meal_plan(
        &self,
        request: &MealPlanRequest,
    ) -> Result<MealPlanResponse, Error> {
        request.validate()?;
        let path = format!("{}/meal-plan/generate", self.root);
        let resp = Request::post(&path)
            .header("content-type", "application/json")
            .json(request)?
            .send()
            .await?;
        if resp.status() != 200 {
            Err(format!("Status: {}", resp.status()).into())
        } else {
            debug!("We got a valid response back!");
            Ok(resp.json().await?)
        }
    }

    /// The id cached by the last `create_grocery_list` call, if any.
    pub fn cached_grocery_list_id(&self) -> Option<String> {
        js_lib::get_storage().get(GROCERY_LIST_KEY).ok().flatten()
    }
}
