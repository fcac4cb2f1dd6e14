//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dietcomp",
    version,
    about = "FICOMP & DIETCOMP creator - derive feed and diet composition sheets from CVAS exports",
    long_about = "Derive feed and diet composition sheets from CVAS lab exports.\n\n\
                  Generates the per-feed FICOMP table, the per-day per-diet DIETCOMP\n\
                  table, and a KEY documentation sheet. Missing analytical values can\n\
                  be backfilled from the NASEM 2021 feed library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the FICOMP, DIETCOMP, and KEY sheets.
    Report(ReportArgs),

    /// Write the example CVAS lab table as a starting template.
    Template(TemplateArgs),

    /// Rank reference-library matches for each feed in a lab export.
    Suggest(SuggestArgs),
}

#[derive(Parser)]
pub struct ReportArgs {
    /// CVAS lab export (CSV).
    #[arg(value_name = "LAB_CSV")]
    pub lab: PathBuf,

    /// Trial configuration snapshot (JSON): treatments, date ranges, feed
    /// mappings, and inclusions.
    #[arg(long = "config", value_name = "JSON")]
    pub config: PathBuf,

    /// Reference feed library CSV (NASEM 2021 export). Without it no
    /// backfill happens and every flag stays ACTUAL.
    #[arg(long = "library", value_name = "CSV")]
    pub library: Option<PathBuf>,

    /// Output directory for the generated sheets (default: <LAB_CSV dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Run the pipeline and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Where to write the template.
    #[arg(value_name = "PATH", default_value = "CVAS_template.csv")]
    pub path: PathBuf,
}

#[derive(Parser)]
pub struct SuggestArgs {
    /// CVAS lab export (CSV).
    #[arg(value_name = "LAB_CSV")]
    pub lab: PathBuf,

    /// Reference feed library CSV to match against.
    #[arg(long = "library", value_name = "CSV")]
    pub library: PathBuf,

    /// Drop candidates scoring below this confidence.
    #[arg(long = "min-confidence", default_value_t = 0.6)]
    pub min_confidence: f32,

    /// Candidates to keep per feed.
    #[arg(long = "limit", default_value_t = 3)]
    pub limit: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
