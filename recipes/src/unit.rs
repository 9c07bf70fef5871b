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
/*!
Measurement units for ingredient quantities.

This is a closed set mirroring what the backend accepts. Units serialize
as their lowercase name on the wire.
*/
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unit of measure for an ingredient quantity.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Default for countable items, e.g. tomatoes or onions.
    Each,
    Cup,
    Tablespoon,
    Teaspoon,
    Gram,
    Kilogram,
    Ounce,
    Pound,
    Gallon,
    Milliliter,
    Liter,
    Pint,
    Quart,
    Can,
    Bunch,
    Package,
}

use Unit::*;

/// Every unit the backend understands, in menu order.
pub const ALL_UNITS: [Unit; 16] = [
    Each, Cup, Tablespoon, Teaspoon, Gram, Kilogram, Ounce, Pound, Gallon, Milliliter, Liter,
    Pint, Quart, Can, Bunch, Package,
];

impl Unit {
    /// The wire name for this unit. Matches the serde encoding.
    pub fn name(&self) -> &'static str {
        match self {
            Each => "each",
            Cup => "cup",
            Tablespoon => "tablespoon",
            Teaspoon => "teaspoon",
            Gram => "gram",
            Kilogram => "kilogram",
            Ounce => "ounce",
            Pound => "pound",
            Gallon => "gallon",
            Milliliter => "milliliter",
            Liter => "liter",
            Pint => "pint",
            Quart => "quart",
            Can => "can",
            Bunch => "bunch",
            Package => "package",
        }
    }

    /// Short display label for list views.
    pub fn label(&self) -> &'static str {
        match self {
            Each => "each",
            Cup => "cup",
            Tablespoon => "tbsp",
            Teaspoon => "tsp",
            Gram => "g",
            Kilogram => "kg",
            Ounce => "oz",
            Pound => "lb",
            Gallon => "gal",
            Milliliter => "ml",
            Liter => "L",
            Pint => "pt",
            Quart => "qt",
            Can => "can",
            Bunch => "bunch",
            Package => "pkg",
        }
    }
}

impl Default for Unit {
    fn default() -> Self {
        Each
    }
}

impl Display for Unit {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(w, "{}", self.name())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for unit in ALL_UNITS {
            if unit.name() == s {
                return Ok(unit);
            }
        }
        Err(format!("Not a valid unit: {}", s))
    }
}
