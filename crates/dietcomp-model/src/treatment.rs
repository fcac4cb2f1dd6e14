//! Treatments (diets) and their feeding date ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{ModelError, Result, TreatmentId};

/// An inclusive span of feeding days with one TMR dry-matter percent
/// applied uniformly to every day in the span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Total mixed ration dry matter percent. Clamped to [0, 100] at the
    /// point of use.
    pub tmr_dm: f64,
}

impl DateRange {
    /// Rejects ranges whose end precedes their start. Called when a
    /// configuration snapshot is finalized, before the pipeline runs.
    pub fn validate(&self, treatment: &TreatmentId) -> Result<()> {
        if self.end < self.start {
            return Err(ModelError::InvalidDateRange {
                treatment: treatment.to_string(),
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Number of calendar days covered, both endpoints inclusive.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Calendar days in ascending order, both endpoints inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    pub fn dry_matter(&self) -> f64 {
        self.tmr_dm.clamp(0.0, 100.0)
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// One experimental treatment: identifier, display name, and its feeding
/// ranges in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treatment {
    pub id: TreatmentId,
    pub name: String,
    #[serde(default)]
    pub ranges: Vec<DateRange>,
}

impl Treatment {
    pub fn new(id: TreatmentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ranges: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        for range in &self.ranges {
            range.validate(&self.id)?;
        }
        Ok(())
    }

    /// Total feeding days across all ranges. Overlapping ranges count each
    /// occurrence; overlap is allowed and surfaced by the aggregator.
    pub fn total_days(&self) -> i64 {
        self.ranges.iter().map(DateRange::day_count).sum()
    }

    /// Whether any two ranges of this treatment share a day.
    pub fn has_overlap(&self) -> bool {
        self.ranges.iter().enumerate().any(|(idx, range)| {
            self.ranges[idx + 1..]
                .iter()
                .any(|other| range.overlaps(other))
        })
    }

    pub fn with_range(mut self, range: DateRange) -> Self {
        self.ranges.push(range);
        self
    }
}
