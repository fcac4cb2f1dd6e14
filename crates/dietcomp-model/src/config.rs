//! The finalized configuration snapshot the pipeline consumes.
//!
//! Interactive collection (forms, uploads) happens outside the core; by the
//! time a `TrialConfig` reaches the pipeline it is immutable and validated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{FeedMapping, ModelError, Result, Treatment, TreatmentId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialConfig {
    pub trial_id: String,
    /// Treatments in presentation order; DIETCOMP rows follow this order.
    pub treatments: Vec<Treatment>,
    /// Per-feed configuration keyed by the lab table's `desc_1`.
    pub feeds: BTreeMap<String, FeedMapping>,
}

impl TrialConfig {
    pub fn new(trial_id: impl Into<String>) -> Self {
        Self {
            trial_id: trial_id.into(),
            treatments: Vec::new(),
            feeds: BTreeMap::new(),
        }
    }

    /// Checks the snapshot before any report generation: treatment ids must
    /// be unique and every date range well-formed.
    pub fn validate(&self) -> Result<()> {
        let mut seen: Vec<&TreatmentId> = Vec::new();
        for treatment in &self.treatments {
            if seen.contains(&&treatment.id) {
                return Err(ModelError::DuplicateTreatment(treatment.id.to_string()));
            }
            seen.push(&treatment.id);
            treatment.validate()?;
        }
        Ok(())
    }

    pub fn treatment(&self, id: &TreatmentId) -> Option<&Treatment> {
        self.treatments.iter().find(|treatment| &treatment.id == id)
    }

    pub fn mapping_for(&self, desc_1: &str) -> Option<&FeedMapping> {
        self.feeds.get(desc_1)
    }
}
