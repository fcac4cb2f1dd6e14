//! The report-generation pipeline.
//!
//! One call takes the parsed lab table, the finalized configuration
//! snapshot, and an optional reference library, and returns the three
//! assembled sheets. The pipeline is a pure function of its inputs: it
//! owns every intermediate, touches no caller state, and either yields a
//! complete bundle or fails with a structured error before anything is
//! written.

use tracing::info;

use dietcomp_library::ReferenceLibrary;
use dietcomp_model::{DietDay, FeedComposition, KeyEntry, LabTable, Table, TrialConfig};

use crate::aggregate::aggregate_diets;
use crate::assemble::{assemble_dietcomp, assemble_ficomp, assemble_key, normalize_trial_id};
use crate::backfill::BackfillMap;
use crate::derive::derive_compositions;
use crate::error::{CoreError, Result};

/// Everything one report run produces.
#[derive(Debug, Clone)]
pub struct ReportBundle {
    pub ficomp: Table,
    pub dietcomp: Table,
    pub key: Table,
    /// Typed rows behind `ficomp`, for summaries and tests.
    pub compositions: Vec<FeedComposition>,
    /// Typed rows behind `dietcomp`.
    pub diet_days: Vec<DietDay>,
    pub key_entries: Vec<KeyEntry>,
}

pub fn run_pipeline(
    lab: &LabTable,
    config: &TrialConfig,
    library: Option<&ReferenceLibrary>,
    backfill: &BackfillMap,
) -> Result<ReportBundle> {
    if lab.is_empty() {
        return Err(CoreError::EmptyLabTable);
    }
    config.validate()?;
    let trial_id = normalize_trial_id(&config.trial_id);

    let compositions = derive_compositions(lab, config, library, backfill)?;
    info!(
        feeds = lab.distinct_feeds().len(),
        rows = compositions.len(),
        "derived feed compositions"
    );

    let diet_days = aggregate_diets(&trial_id, config, &compositions);
    info!(rows = diet_days.len(), "aggregated diet days");

    let ficomp = assemble_ficomp(&trial_id, &compositions);
    let dietcomp = assemble_dietcomp(&diet_days);
    let (key, key_entries) = assemble_key(&ficomp);
    Ok(ReportBundle {
        ficomp,
        dietcomp,
        key,
        compositions,
        diet_days,
        key_entries,
    })
}
