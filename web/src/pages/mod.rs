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
pub mod create;
pub mod grocery_list;
pub mod home;
pub mod meal_plan;
pub mod not_found;
pub mod recipe;

pub use create::*;
pub use grocery_list::*;
pub use home::*;
pub use meal_plan::*;
pub use not_found::*;
pub use recipe::*;
