//! Which derived columns may be backfilled from the reference library.

use dietcomp_model::Nutrient;

/// Pairs a derived column with the library column that can stand in for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackfillTarget {
    pub nutrient: Nutrient,
    pub reference_column: String,
}

impl BackfillTarget {
    pub fn new(nutrient: Nutrient, reference_column: impl Into<String>) -> Self {
        Self {
            nutrient,
            reference_column: reference_column.into(),
        }
    }
}

/// The backfill configuration. Extending it is a configuration decision:
/// callers add targets, the calculator never hardcodes more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackfillMap {
    targets: Vec<BackfillTarget>,
}

impl BackfillMap {
    pub fn new(targets: Vec<BackfillTarget>) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &[BackfillTarget] {
        &self.targets
    }

    pub fn with_target(mut self, target: BackfillTarget) -> Self {
        self.targets.push(target);
        self
    }
}

impl Default for BackfillMap {
    /// The four columns the NASEM 2021 library can supply.
    fn default() -> Self {
        Self::new(vec![
            BackfillTarget::new(Nutrient::Andf, "Feed NDF"),
            BackfillTarget::new(Nutrient::Ndfd48, "Feed DNDF48_NDF"),
            BackfillTarget::new(Nutrient::Rup, "Feed RUP_base"),
            BackfillTarget::new(Nutrient::Fa, "Feed FA"),
        ])
    }
}
