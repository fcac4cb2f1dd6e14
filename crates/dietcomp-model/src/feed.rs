//! Lab analysis rows and the enriched per-feed composition record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Nutrient, ValueFlag};

/// One row of the uploaded lab analysis table.
///
/// `desc_1` and `feedtype` identify the feed; every analytical value is
/// optional because labs report different panels per sample. Several rows
/// may share one `desc_1` (repeat samples of the same feed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedRecord {
    pub desc_1: String,
    pub feedtype: String,
    pub ndf: Option<f64>,
    pub andfom: Option<f64>,
    pub rdp: Option<f64>,
    pub cp: Option<f64>,
    pub tfa: Option<f64>,
    pub ash: Option<f64>,
    pub adf: Option<f64>,
    pub lignin: Option<f64>,
    pub starch: Option<f64>,
    pub ndfd48: Option<f64>,
    pub ndfd30: Option<f64>,
}

impl FeedRecord {
    pub fn new(desc_1: impl Into<String>, feedtype: impl Into<String>) -> Self {
        Self {
            desc_1: desc_1.into(),
            feedtype: feedtype.into(),
            ndf: None,
            andfom: None,
            rdp: None,
            cp: None,
            tfa: None,
            ash: None,
            adf: None,
            lignin: None,
            starch: None,
            ndfd48: None,
            ndfd30: None,
        }
    }
}

/// The parsed lab analysis table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabTable {
    pub rows: Vec<FeedRecord>,
}

impl LabTable {
    pub fn new(rows: Vec<FeedRecord>) -> Self {
        Self { rows }
    }

    /// Distinct `(desc_1, feedtype)` pairs in first-seen order.
    pub fn distinct_feeds(&self) -> Vec<(String, String)> {
        let mut seen = Vec::new();
        for row in &self.rows {
            let key = (row.desc_1.clone(), row.feedtype.clone());
            if !seen.contains(&key) {
                seen.push(key);
            }
        }
        seen
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A lab row enriched with user metadata, derived nutrients, and value
/// provenance flags. One `FeedComposition` per lab row; FICOMP is built
/// from these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedComposition {
    pub desc_1: String,
    pub feedtype: String,
    pub lab: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub method: String,
    pub om: Option<f64>,
    pub andf: Option<f64>,
    pub andfom: Option<f64>,
    pub forndf: Option<f64>,
    pub ndfd30: Option<f64>,
    pub ndfd48: Option<f64>,
    pub adf: Option<f64>,
    pub lignin: Option<f64>,
    pub starch: Option<f64>,
    pub cp: Option<f64>,
    pub rup: Option<f64>,
    pub fa: Option<f64>,
    pub ash: Option<f64>,
    /// Provenance per backfillable column; anything absent here was never
    /// a backfill candidate and is implicitly actual.
    pub flags: BTreeMap<Nutrient, ValueFlag>,
}

impl FeedComposition {
    pub fn value(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Om => self.om,
            Nutrient::Andf => self.andf,
            Nutrient::Andfom => self.andfom,
            Nutrient::Forndf => self.forndf,
            Nutrient::Ndfd30 => self.ndfd30,
            Nutrient::Ndfd48 => self.ndfd48,
            Nutrient::Adf => self.adf,
            Nutrient::Lignin => self.lignin,
            Nutrient::Starch => self.starch,
            Nutrient::Cp => self.cp,
            Nutrient::Rup => self.rup,
            Nutrient::Fa => self.fa,
            Nutrient::Ash => self.ash,
        }
    }

    pub fn set_value(&mut self, nutrient: Nutrient, value: Option<f64>) {
        let slot = match nutrient {
            Nutrient::Om => &mut self.om,
            Nutrient::Andf => &mut self.andf,
            Nutrient::Andfom => &mut self.andfom,
            Nutrient::Forndf => &mut self.forndf,
            Nutrient::Ndfd30 => &mut self.ndfd30,
            Nutrient::Ndfd48 => &mut self.ndfd48,
            Nutrient::Adf => &mut self.adf,
            Nutrient::Lignin => &mut self.lignin,
            Nutrient::Starch => &mut self.starch,
            Nutrient::Cp => &mut self.cp,
            Nutrient::Rup => &mut self.rup,
            Nutrient::Fa => &mut self.fa,
            Nutrient::Ash => &mut self.ash,
        };
        *slot = value;
    }

    /// Provenance flag for a backfillable column.
    pub fn flag(&self, nutrient: Nutrient) -> Option<ValueFlag> {
        self.flags.get(&nutrient).copied()
    }

    pub fn set_flag(&mut self, nutrient: Nutrient, flag: ValueFlag) {
        self.flags.insert(nutrient, flag);
    }
}
