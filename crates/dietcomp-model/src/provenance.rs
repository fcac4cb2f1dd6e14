#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Origin of a backfillable FICOMP value.
///
/// Every backfillable column starts as `Actual` (measured by the lab) and
/// flips to `Nasem` only when the whole feed was missing the value and it
/// was taken from the reference library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueFlag {
    #[default]
    Actual,
    Nasem,
}

impl ValueFlag {
    /// Flag text as written to the report sheets.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Actual => "ACTUAL",
            Self::Nasem => "NASEM",
        }
    }
}
