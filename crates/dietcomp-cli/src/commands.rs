//! Subcommand implementations.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use dietcomp_core::{BackfillMap, ReportBundle, normalize_trial_id, run_pipeline};
use dietcomp_ingest::load_lab_table;
use dietcomp_library::load_reference_library;
use dietcomp_match::SuggestionEngine;
use dietcomp_model::{ClassificationDefault, Nutrient, TrialConfig, ValueFlag};
use dietcomp_report::{write_bundle, write_cvas_template};

use crate::cli::{ReportArgs, SuggestArgs, TemplateArgs};
use crate::types::{FeedSuggestions, ReportResult, SuggestResult};

pub fn run_report(args: &ReportArgs) -> Result<ReportResult> {
    let lab = load_lab_table(&args.lab)
        .with_context(|| format!("load lab export: {}", args.lab.display()))?;

    let file = File::open(&args.config)
        .with_context(|| format!("open trial config: {}", args.config.display()))?;
    let config: TrialConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse trial config: {}", args.config.display()))?;

    let library = args
        .library
        .as_deref()
        .map(|path| {
            load_reference_library(path)
                .with_context(|| format!("load reference library: {}", path.display()))
        })
        .transpose()?;

    let bundle = run_pipeline(&lab, &config, library.as_ref(), &BackfillMap::default())
        .context("generate report")?;

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.lab));
    let paths = if args.dry_run {
        None
    } else {
        Some(write_bundle(&bundle, &output_dir)?)
    };

    let backfilled = backfilled_count(&bundle);
    Ok(ReportResult {
        trial_id: normalize_trial_id(&config.trial_id),
        bundle,
        output_dir,
        paths,
        backfilled,
    })
}

pub fn run_template(args: &TemplateArgs) -> Result<PathBuf> {
    write_cvas_template(&args.path)?;
    Ok(args.path.clone())
}

pub fn run_suggest(args: &SuggestArgs) -> Result<SuggestResult> {
    let lab = load_lab_table(&args.lab)
        .with_context(|| format!("load lab export: {}", args.lab.display()))?;
    let library = load_reference_library(&args.library)
        .with_context(|| format!("load reference library: {}", args.library.display()))?;
    let engine = SuggestionEngine::new(&library);
    let feeds = lab
        .distinct_feeds()
        .into_iter()
        .map(|(feed, feedtype)| {
            let default = ClassificationDefault::for_feed(&feed, &feedtype);
            let suggestions = engine.suggest(&feed, args.min_confidence, args.limit);
            FeedSuggestions {
                feed,
                default_type: default.type_,
                default_method: default.method,
                suggestions,
            }
        })
        .collect();
    Ok(SuggestResult { feeds })
}

fn default_output_dir(lab: &Path) -> PathBuf {
    lab.parent().unwrap_or(Path::new(".")).join("output")
}

fn backfilled_count(bundle: &ReportBundle) -> usize {
    let mut seen: BTreeSet<(&str, Nutrient)> = BTreeSet::new();
    for composition in &bundle.compositions {
        for (nutrient, flag) in &composition.flags {
            if *flag == ValueFlag::Nasem {
                seen.insert((composition.desc_1.as_str(), *nutrient));
            }
        }
    }
    seen.len()
}
