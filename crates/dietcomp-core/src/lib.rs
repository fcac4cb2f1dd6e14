pub mod aggregate;
pub mod assemble;
pub mod backfill;
pub mod derive;
pub mod error;
pub mod pipeline;

pub use aggregate::aggregate_diets;
pub use assemble::{
    DIETCOMP_SHEET, FICOMP_COLUMNS, FICOMP_SHEET, KEY_SHEET, assemble_dietcomp, assemble_ficomp,
    assemble_key, normalize_trial_id,
};
pub use backfill::{BackfillMap, BackfillTarget};
pub use derive::derive_compositions;
pub use error::{CoreError, Result};
pub use pipeline::{ReportBundle, run_pipeline};
