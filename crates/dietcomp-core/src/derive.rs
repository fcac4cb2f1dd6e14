//! The derived-field calculator.
//!
//! Turns raw lab rows into `FeedComposition`s: renames (`aNDF` from NDF,
//! `FA` from TFA), arithmetic derivations (`RUP = CP - RDP`, `OM = 100 -
//! Ash`, `ForNDF` for forages), and the per-feed reference backfill with
//! `ACTUAL`/`NASEM` provenance flags. Works on owned copies only; the
//! caller's lab table is never touched.

use std::collections::BTreeMap;

use tracing::debug;

use dietcomp_library::ReferenceLibrary;
use dietcomp_model::{
    FeedComposition, FeedMapping, FeedRecord, LabTable, TrialConfig, ValueFlag,
};

use crate::backfill::BackfillMap;
use crate::error::{CoreError, Result};

/// Enriches every lab row, then applies the reference backfill when a
/// library is available.
///
/// Every `desc_1` in the lab table must have a configured mapping;
/// otherwise the whole derivation fails with the offending feed name.
pub fn derive_compositions(
    lab: &LabTable,
    config: &TrialConfig,
    library: Option<&ReferenceLibrary>,
    backfill: &BackfillMap,
) -> Result<Vec<FeedComposition>> {
    let mut compositions = Vec::with_capacity(lab.rows.len());
    for row in &lab.rows {
        let mapping =
            config
                .mapping_for(&row.desc_1)
                .ok_or_else(|| CoreError::MissingMapping {
                    feed: row.desc_1.clone(),
                })?;
        compositions.push(compose(row, mapping, backfill));
    }
    if let Some(library) = library {
        apply_backfill(&mut compositions, config, library, backfill);
    }
    Ok(compositions)
}

fn compose(row: &FeedRecord, mapping: &FeedMapping, backfill: &BackfillMap) -> FeedComposition {
    // RUP stays unclamped: over-reported RDP legitimately drives it negative.
    let rup = match (row.cp, row.rdp) {
        (Some(cp), Some(rdp)) => Some(cp - rdp),
        _ => None,
    };
    let om = row.ash.map(|ash| 100.0 - ash);
    let forndf = if mapping.is_forage() {
        row.andfom
    } else {
        Some(0.0)
    };
    let mut flags = BTreeMap::new();
    for target in backfill.targets() {
        flags.insert(target.nutrient, ValueFlag::Actual);
    }
    FeedComposition {
        desc_1: row.desc_1.clone(),
        feedtype: row.feedtype.clone(),
        lab: mapping.lab.clone(),
        type_: mapping.type_.clone(),
        method: mapping.method.clone(),
        om,
        andf: row.ndf,
        andfom: row.andfom,
        forndf,
        ndfd30: row.ndfd30,
        ndfd48: row.ndfd48,
        adf: row.adf,
        lignin: row.lignin,
        starch: row.starch,
        cp: row.cp,
        rup,
        fa: row.tfa,
        ash: row.ash,
        flags,
    }
}

/// All-or-nothing per feed: a column is backfilled only when every row of
/// that feed is missing it, and then every row of the feed receives the
/// same library value and a `NASEM` flag. A single measured row keeps the
/// whole feed on `ACTUAL`.
fn apply_backfill(
    compositions: &mut [FeedComposition],
    config: &TrialConfig,
    library: &ReferenceLibrary,
    backfill: &BackfillMap,
) {
    let mut feeds: Vec<String> = Vec::new();
    for composition in compositions.iter() {
        if !feeds.contains(&composition.desc_1) {
            feeds.push(composition.desc_1.clone());
        }
    }
    for target in backfill.targets() {
        for feed in &feeds {
            let Some(mapping) = config.mapping_for(feed) else {
                continue;
            };
            if mapping.reference_match.name().is_none() {
                continue;
            }
            let all_missing = compositions
                .iter()
                .filter(|composition| &composition.desc_1 == feed)
                .all(|composition| composition.value(target.nutrient).is_none());
            if !all_missing {
                continue;
            }
            let Some(value) = library.resolve(&mapping.reference_match, &target.reference_column)
            else {
                continue;
            };
            for composition in compositions
                .iter_mut()
                .filter(|composition| &composition.desc_1 == feed)
            {
                composition.set_value(target.nutrient, Some(value));
                composition.set_flag(target.nutrient, ValueFlag::Nasem);
            }
            debug!(
                feed = feed.as_str(),
                column = target.reference_column.as_str(),
                value,
                "backfilled from reference library"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use dietcomp_library::ReferenceEntry;
    use dietcomp_model::{Nutrient, ReferenceMatch};

    use super::*;

    fn config_with(feed: &str, mapping: FeedMapping) -> TrialConfig {
        let mut config = TrialConfig::new("TRIAL");
        config.feeds.insert(feed.to_string(), mapping);
        config
    }

    fn silage_row() -> FeedRecord {
        let mut row = FeedRecord::new("CORN SILAGE SHORT", "FORAGE");
        row.ndf = Some(37.2);
        row.andfom = Some(35.3);
        row.rdp = Some(16.5);
        row.cp = Some(24.4);
        row.tfa = Some(2.61);
        row.ash = Some(3.66);
        row
    }

    fn library_with(name: &str, column: &str, value: f64) -> ReferenceLibrary {
        ReferenceLibrary {
            columns: vec![column.to_string()],
            entries: vec![ReferenceEntry {
                name_original: name.to_string(),
                name_clean: dietcomp_library::normalize(name),
                values: vec![(column.to_string(), value)],
            }],
        }
    }

    #[test]
    fn renames_and_derivations() {
        let lab = LabTable::new(vec![silage_row()]);
        let config = config_with(
            "CORN SILAGE SHORT",
            FeedMapping::new("CVAS", "FORAGE", "NIR, starch, NDFD48"),
        );
        let compositions =
            derive_compositions(&lab, &config, None, &BackfillMap::default()).expect("derive");
        let composition = &compositions[0];
        assert_eq!(composition.andf, Some(37.2));
        assert_eq!(composition.fa, Some(2.61));
        assert_eq!(composition.rup, Some(24.4 - 16.5));
        assert_eq!(composition.om, Some(100.0 - 3.66));
        assert_eq!(composition.forndf, Some(35.3));
        assert_eq!(composition.flag(Nutrient::Andf), Some(ValueFlag::Actual));
    }

    #[test]
    fn rup_passes_through_negative_values() {
        let mut row = FeedRecord::new("UREA", "PROTEIN");
        row.cp = Some(10.0);
        row.rdp = Some(30.0);
        let lab = LabTable::new(vec![row]);
        let config = config_with("UREA", FeedMapping::new("CVAS", "GRAIN", "NIR, starch"));
        let compositions =
            derive_compositions(&lab, &config, None, &BackfillMap::default()).expect("derive");
        assert_eq!(compositions[0].rup, Some(-20.0));
    }

    #[test]
    fn forndf_is_zero_for_non_forage() {
        let mut row = FeedRecord::new("CORN GRAIN", "GRAIN");
        row.andfom = Some(9.5);
        let lab = LabTable::new(vec![row]);
        let config = config_with("CORN GRAIN", FeedMapping::new("CVAS", "grain", "NIR, starch"));
        let compositions =
            derive_compositions(&lab, &config, None, &BackfillMap::default()).expect("derive");
        assert_eq!(compositions[0].forndf, Some(0.0));
    }

    #[test]
    fn forndf_matches_type_case_insensitively() {
        let mut row = FeedRecord::new("HAYLAGE", "FORAGE");
        row.andfom = Some(42.0);
        let lab = LabTable::new(vec![row]);
        let config = config_with(
            "HAYLAGE",
            FeedMapping::new("CVAS", "Forage", "NIR, starch, NDFD48"),
        );
        let compositions =
            derive_compositions(&lab, &config, None, &BackfillMap::default()).expect("derive");
        assert_eq!(compositions[0].forndf, Some(42.0));
    }

    #[test]
    fn missing_mapping_is_a_structured_failure() {
        let lab = LabTable::new(vec![silage_row()]);
        let config = TrialConfig::new("TRIAL");
        let error = derive_compositions(&lab, &config, None, &BackfillMap::default())
            .expect_err("mapping required");
        assert!(matches!(
            error,
            CoreError::MissingMapping { feed } if feed == "CORN SILAGE SHORT"
        ));
    }

    #[test]
    fn backfills_when_every_row_is_missing() {
        let mut row = FeedRecord::new("GRASS HAY", "FORAGE");
        row.cp = Some(12.0);
        let lab = LabTable::new(vec![row]);
        let config = config_with(
            "GRASS HAY",
            FeedMapping::new("CVAS", "FORAGE", "NIR, starch, NDFD48")
                .with_reference_match(ReferenceMatch::parse("Grass hay, mid-maturity")),
        );
        let library = library_with("Grass hay, mid-maturity", "Feed NDF", 40.0);
        let compositions =
            derive_compositions(&lab, &config, Some(&library), &BackfillMap::default())
                .expect("derive");
        assert_eq!(compositions[0].andf, Some(40.0));
        assert_eq!(compositions[0].flag(Nutrient::Andf), Some(ValueFlag::Nasem));
    }

    #[test]
    fn backfill_is_all_or_nothing_per_feed() {
        let mut measured = FeedRecord::new("GRASS HAY", "FORAGE");
        measured.ndf = Some(38.0);
        let unmeasured = FeedRecord::new("GRASS HAY", "FORAGE");
        let lab = LabTable::new(vec![measured, unmeasured]);
        let config = config_with(
            "GRASS HAY",
            FeedMapping::new("CVAS", "FORAGE", "NIR, starch, NDFD48")
                .with_reference_match(ReferenceMatch::parse("Grass hay, mid-maturity")),
        );
        let library = library_with("Grass hay, mid-maturity", "Feed NDF", 40.0);
        let compositions =
            derive_compositions(&lab, &config, Some(&library), &BackfillMap::default())
                .expect("derive");
        // One measured row keeps the whole feed untouched.
        assert_eq!(compositions[0].andf, Some(38.0));
        assert_eq!(compositions[1].andf, None);
        assert_eq!(compositions[0].flag(Nutrient::Andf), Some(ValueFlag::Actual));
        assert_eq!(compositions[1].flag(Nutrient::Andf), Some(ValueFlag::Actual));
    }

    #[test]
    fn no_match_leaves_actual_flag() {
        let row = FeedRecord::new("GRASS HAY", "FORAGE");
        let lab = LabTable::new(vec![row]);
        let config = config_with(
            "GRASS HAY",
            FeedMapping::new("CVAS", "FORAGE", "NIR, starch, NDFD48"),
        );
        let library = library_with("Grass hay, mid-maturity", "Feed NDF", 40.0);
        let compositions =
            derive_compositions(&lab, &config, Some(&library), &BackfillMap::default())
                .expect("derive");
        assert_eq!(compositions[0].andf, None);
        assert_eq!(compositions[0].flag(Nutrient::Andf), Some(ValueFlag::Actual));
    }
}
