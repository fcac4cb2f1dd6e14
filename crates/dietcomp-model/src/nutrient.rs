//! The fixed nutrient column set carried through FICOMP and DIETCOMP.

use serde::{Deserialize, Serialize};

/// Nutrient columns in DIETCOMP order.
///
/// The set is closed: every diet row carries exactly these thirteen
/// inclusion-weighted values, and FICOMP reports the same columns per feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Nutrient {
    Om,
    Andf,
    Andfom,
    Forndf,
    Ndfd30,
    Ndfd48,
    Adf,
    Lignin,
    Starch,
    Cp,
    Rup,
    Fa,
    Ash,
}

impl Nutrient {
    pub const ALL: [Nutrient; 13] = [
        Nutrient::Om,
        Nutrient::Andf,
        Nutrient::Andfom,
        Nutrient::Forndf,
        Nutrient::Ndfd30,
        Nutrient::Ndfd48,
        Nutrient::Adf,
        Nutrient::Lignin,
        Nutrient::Starch,
        Nutrient::Cp,
        Nutrient::Rup,
        Nutrient::Fa,
        Nutrient::Ash,
    ];

    /// Column name as it appears in the generated sheets.
    pub fn column_name(self) -> &'static str {
        match self {
            Self::Om => "OM",
            Self::Andf => "aNDF",
            Self::Andfom => "aNDFom",
            Self::Forndf => "ForNDF",
            Self::Ndfd30 => "NDFD30",
            Self::Ndfd48 => "NDFD48",
            Self::Adf => "ADF",
            Self::Lignin => "Lignin",
            Self::Starch => "Starch",
            Self::Cp => "CP",
            Self::Rup => "RUP",
            Self::Fa => "FA",
            Self::Ash => "Ash",
        }
    }
}
