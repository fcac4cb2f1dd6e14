//! The diet aggregator.
//!
//! Expands each treatment's date ranges into daily rows and computes the
//! inclusion-weighted nutrient profile per day. Row order is deterministic:
//! treatment order, then range declaration order, then ascending date.

use std::collections::BTreeMap;

use tracing::warn;

use dietcomp_model::{DietDay, FeedComposition, Nutrient, TrialConfig};

/// Weighted nutrient rows for every treatment-day.
///
/// A feed's weight is its inclusion percent over 100; feeds missing a
/// nutrient contribute zero to that column only, which under-represents a
/// diet when a heavily included feed lacks data. Each distinct feed is
/// represented by its first lab row. The TMR dry matter carries through
/// unchanged from the owning range.
pub fn aggregate_diets(
    trial_id: &str,
    config: &TrialConfig,
    compositions: &[FeedComposition],
) -> Vec<DietDay> {
    let mut first_by_feed: BTreeMap<&str, &FeedComposition> = BTreeMap::new();
    for composition in compositions {
        first_by_feed
            .entry(composition.desc_1.as_str())
            .or_insert(composition);
    }

    let mut days = Vec::new();
    for treatment in &config.treatments {
        if treatment.has_overlap() {
            warn!(
                treatment = %treatment.id,
                "date ranges overlap; shared days appear once per range"
            );
        }
        for range in &treatment.ranges {
            for date in range.days() {
                let mut values = BTreeMap::new();
                for nutrient in Nutrient::ALL {
                    let mut total = 0.0;
                    for (feed, mapping) in &config.feeds {
                        let weight = mapping.inclusion_for(&treatment.id) / 100.0;
                        if weight == 0.0 {
                            continue;
                        }
                        let value = first_by_feed
                            .get(feed.as_str())
                            .and_then(|composition| composition.value(nutrient));
                        if let Some(value) = value {
                            total += weight * value;
                        }
                    }
                    values.insert(nutrient, total);
                }
                days.push(DietDay {
                    trial_id: trial_id.to_string(),
                    diet: treatment.name.clone(),
                    date,
                    tmr_dm: range.dry_matter(),
                    values,
                });
            }
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use dietcomp_model::{DateRange, FeedMapping, Treatment, TreatmentId, ValueFlag};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn composition(desc_1: &str, cp: Option<f64>, ash: Option<f64>) -> FeedComposition {
        FeedComposition {
            desc_1: desc_1.to_string(),
            feedtype: "GRAIN".to_string(),
            lab: "CVAS".to_string(),
            type_: "GRAIN".to_string(),
            method: "NIR, starch".to_string(),
            om: ash.map(|ash| 100.0 - ash),
            andf: None,
            andfom: None,
            forndf: Some(0.0),
            ndfd30: None,
            ndfd48: None,
            adf: None,
            lignin: None,
            starch: None,
            cp,
            rup: None,
            fa: None,
            ash,
            flags: std::collections::BTreeMap::from([(Nutrient::Andf, ValueFlag::Actual)]),
        }
    }

    fn one_treatment_config(inclusions: &[(&str, f64)]) -> TrialConfig {
        let id = TreatmentId::new("T1").expect("id");
        let mut config = TrialConfig::new("TRIAL");
        config.treatments.push(
            Treatment::new(id.clone(), "T1").with_range(DateRange {
                start: date(2024, 1, 1),
                end: date(2024, 1, 3),
                tmr_dm: 50.0,
            }),
        );
        for (feed, percent) in inclusions {
            config.feeds.insert(
                (*feed).to_string(),
                FeedMapping::new("CVAS", "GRAIN", "NIR, starch")
                    .with_inclusion(id.clone(), *percent),
            );
        }
        config
    }

    #[test]
    fn emits_one_row_per_day_with_constant_dry_matter() {
        let config = one_treatment_config(&[("CORN GRAIN", 100.0)]);
        let compositions = vec![composition("CORN GRAIN", Some(8.6), Some(1.35))];
        let days = aggregate_diets("TRIAL", &config, &compositions);
        assert_eq!(days.len(), 3);
        for day in &days {
            assert_eq!(day.tmr_dm, 50.0);
            assert_eq!(day.diet, "T1");
        }
        assert_eq!(days[0].date, date(2024, 1, 1));
        assert_eq!(days[2].date, date(2024, 1, 3));
    }

    #[test]
    fn weights_values_by_inclusion() {
        let config = one_treatment_config(&[("CORN GRAIN", 60.0), ("SOYBEAN MEAL", 20.0)]);
        let compositions = vec![
            composition("CORN GRAIN", Some(8.6), None),
            composition("SOYBEAN MEAL", Some(48.0), None),
        ];
        let days = aggregate_diets("TRIAL", &config, &compositions);
        let expected = 0.6 * 8.6 + 0.2 * 48.0;
        assert!((days[0].value(Nutrient::Cp) - expected).abs() < 1e-9);
    }

    #[test]
    fn missing_values_contribute_zero() {
        let config = one_treatment_config(&[("CORN GRAIN", 60.0), ("SOYBEAN MEAL", 40.0)]);
        let compositions = vec![
            composition("CORN GRAIN", Some(8.6), None),
            composition("SOYBEAN MEAL", None, None),
        ];
        let days = aggregate_diets("TRIAL", &config, &compositions);
        assert!((days[0].value(Nutrient::Cp) - 0.6 * 8.6).abs() < 1e-9);
    }

    #[test]
    fn distinct_feed_uses_its_first_row() {
        let config = one_treatment_config(&[("CORN GRAIN", 100.0)]);
        let compositions = vec![
            composition("CORN GRAIN", None, None),
            composition("CORN GRAIN", Some(9.9), None),
        ];
        let days = aggregate_diets("TRIAL", &config, &compositions);
        assert_eq!(days[0].value(Nutrient::Cp), 0.0);
    }

    #[test]
    fn row_order_is_treatment_range_date() {
        let t1 = TreatmentId::new("T1").expect("id");
        let t2 = TreatmentId::new("T2").expect("id");
        let mut config = TrialConfig::new("TRIAL");
        config.treatments.push(
            Treatment::new(t2.clone(), "Late")
                .with_range(DateRange {
                    start: date(2024, 2, 1),
                    end: date(2024, 2, 1),
                    tmr_dm: 52.0,
                })
                .with_range(DateRange {
                    start: date(2024, 1, 15),
                    end: date(2024, 1, 15),
                    tmr_dm: 51.0,
                }),
        );
        config
            .treatments
            .push(Treatment::new(t1, "Early").with_range(DateRange {
                start: date(2024, 1, 1),
                end: date(2024, 1, 2),
                tmr_dm: 50.0,
            }));
        let days = aggregate_diets("TRIAL", &config, &[]);
        let order: Vec<(String, NaiveDate)> = days
            .into_iter()
            .map(|day| (day.diet, day.date))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Late".to_string(), date(2024, 2, 1)),
                ("Late".to_string(), date(2024, 1, 15)),
                ("Early".to_string(), date(2024, 1, 1)),
                ("Early".to_string(), date(2024, 1, 2)),
            ]
        );
    }

    proptest::proptest! {
        #[test]
        fn weighted_values_are_linear_in_inclusion(
            base in 0.0f64..20.0,
            scale in 1u32..5,
        ) {
            let scale = f64::from(scale);
            let compositions = vec![composition("CORN GRAIN", Some(8.6), Some(1.35))];

            let config = one_treatment_config(&[("CORN GRAIN", base)]);
            let scaled_config = one_treatment_config(&[("CORN GRAIN", base * scale)]);

            let days = aggregate_diets("TRIAL", &config, &compositions);
            let scaled_days = aggregate_diets("TRIAL", &scaled_config, &compositions);

            for nutrient in Nutrient::ALL {
                let single = days[0].value(nutrient);
                let scaled = scaled_days[0].value(nutrient);
                proptest::prop_assert!((scaled - single * scale).abs() < 1e-9);
            }
        }
    }
}
