//! Apartment registry records and the persisted document.

use crate::storage::Document;
use crate::types::names_match;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A person living in an apartment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resident {
    pub full_name: String,
    pub years_old: u32,
}

impl Resident {
    pub fn new(full_name: impl Into<String>, years_old: u32) -> Self {
        Self {
            full_name: full_name.into(),
            years_old,
        }
    }
}

/// An apartment and the residents it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apartment {
    pub num: u32,
    pub lvl: u32,
    pub category: String,
    #[serde(default)]
    pub occupants: Vec<Resident>,
}

impl Apartment {
    pub fn new(num: u32, lvl: u32, category: impl Into<String>) -> Self {
        Self {
            num,
            lvl,
            category: category.into(),
            occupants: Vec::new(),
        }
    }

    pub fn settle(&mut self, resident: Resident) {
        self.occupants.push(resident);
    }

    /// Remove every occupant named `name`, returning them.
    pub fn evict(&mut self, name: &str) -> Vec<Resident> {
        crate::storage::remove_all(&mut self.occupants, |r| names_match(&r.full_name, name))
    }
}

/// Contents of `house_data.json`: apartments keyed by number.
///
/// JSON object keys are strings, so numbers are written as `"12"` and parsed
/// back on load. A key must equal the number of the apartment it holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<u32, Apartment>",
    into = "BTreeMap<u32, Apartment>"
)]
pub struct BuildingData {
    pub units: BTreeMap<u32, Apartment>,
}

impl TryFrom<BTreeMap<u32, Apartment>> for BuildingData {
    type Error = String;

    fn try_from(units: BTreeMap<u32, Apartment>) -> Result<Self, Self::Error> {
        match units.iter().find(|(key, apt)| **key != apt.num) {
            Some((key, apt)) => Err(format!(
                "apartment key \"{}\" holds apartment number {}",
                key, apt.num
            )),
            None => Ok(Self { units }),
        }
    }
}

impl From<BuildingData> for BTreeMap<u32, Apartment> {
    fn from(data: BuildingData) -> Self {
        data.units
    }
}

impl Document for BuildingData {
    const KIND: &'static str = "apartment registry";
    const DEFAULT_FILE: &'static str = "house_data.json";
}
