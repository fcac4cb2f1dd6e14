//! Typed rows of the generated sheets.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Nutrient;

/// One DIETCOMP row: a treatment's inclusion-weighted nutrient profile on
/// one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietDay {
    pub trial_id: String,
    /// Treatment display name.
    pub diet: String,
    pub date: NaiveDate,
    pub tmr_dm: f64,
    /// Weighted value for every nutrient in the fixed column set. Feeds
    /// missing a nutrient contribute zero to that column.
    pub values: BTreeMap<Nutrient, f64>,
}

impl DietDay {
    pub fn value(&self, nutrient: Nutrient) -> f64 {
        self.values.get(&nutrient).copied().unwrap_or(0.0)
    }
}

/// One KEY row: a FICOMP column name and its definition placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyEntry {
    pub variable: String,
    pub definition: String,
}
