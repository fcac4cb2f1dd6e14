//! Per-feed configuration supplied alongside the lab table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::TreatmentId;

/// The user's reference-library selection for one feed.
///
/// `Name` holds the library's *original* display name, not a normalized
/// form; lookups compare against the name exactly as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum ReferenceMatch {
    #[default]
    NoMatch,
    Name(String),
}

/// Sentinel the original selection UI used for "no library match".
pub const NO_MATCH_SENTINEL: &str = "(None)";

impl ReferenceMatch {
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == NO_MATCH_SENTINEL {
            Self::NoMatch
        } else {
            Self::Name(trimmed.to_string())
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::NoMatch => None,
            Self::Name(name) => Some(name),
        }
    }
}

impl From<Option<String>> for ReferenceMatch {
    fn from(value: Option<String>) -> Self {
        match value {
            None => Self::NoMatch,
            Some(name) => Self::parse(&name),
        }
    }
}

impl From<ReferenceMatch> for Option<String> {
    fn from(value: ReferenceMatch) -> Self {
        match value {
            ReferenceMatch::NoMatch => None,
            ReferenceMatch::Name(name) => Some(name),
        }
    }
}

/// Configuration for one distinct feed: lab metadata, diet inclusions, and
/// the optional reference-library match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedMapping {
    pub lab: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub method: String,
    /// Inclusion percent of diet dry matter per treatment. Values outside
    /// [0, 100] are clamped at the point of use. Inclusions across feeds
    /// need not sum to 100 for a treatment (partial diets are allowed).
    #[serde(default)]
    pub inclusions: BTreeMap<TreatmentId, f64>,
    #[serde(default)]
    pub reference_match: ReferenceMatch,
}

impl FeedMapping {
    pub fn new(
        lab: impl Into<String>,
        type_: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            lab: lab.into(),
            type_: type_.into(),
            method: method.into(),
            inclusions: BTreeMap::new(),
            reference_match: ReferenceMatch::NoMatch,
        }
    }

    /// Inclusion percent for a treatment, clamped to [0, 100]. Feeds not
    /// configured for a treatment contribute zero.
    pub fn inclusion_for(&self, treatment: &TreatmentId) -> f64 {
        self.inclusions
            .get(treatment)
            .copied()
            .unwrap_or(0.0)
            .clamp(0.0, 100.0)
    }

    pub fn is_forage(&self) -> bool {
        self.type_.eq_ignore_ascii_case("FORAGE")
    }

    pub fn with_inclusion(mut self, treatment: TreatmentId, percent: f64) -> Self {
        self.inclusions.insert(treatment, percent);
        self
    }

    pub fn with_reference_match(mut self, reference_match: ReferenceMatch) -> Self {
        self.reference_match = reference_match;
        self
    }
}

/// Advisory TYPE/METHOD defaults presented before the user overrides them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationDefault {
    pub type_: &'static str,
    pub method: &'static str,
}

impl ClassificationDefault {
    /// Default classification from the lab's feed type and feed name.
    pub fn for_feed(desc_1: &str, feedtype: &str) -> Self {
        let feedtype = feedtype.to_uppercase();
        let name = desc_1.to_uppercase();
        if feedtype.contains("FORAGE") || name.contains("SILAGE") || name.contains("HAYLAGE") {
            Self {
                type_: "FORAGE",
                method: "NIR, starch, NDFD48",
            }
        } else if name.contains("MIX") || name.contains("BASE") {
            Self {
                type_: "PREMIX",
                method: "WC",
            }
        } else {
            Self {
                type_: "GRAIN",
                method: "NIR, starch",
            }
        }
    }
}
