use std::path::PathBuf;

use dietcomp_core::ReportBundle;
use dietcomp_match::Suggestion;
use dietcomp_report::ReportPaths;

/// Outcome of one `report` invocation.
#[derive(Debug)]
pub struct ReportResult {
    pub trial_id: String,
    pub bundle: ReportBundle,
    pub output_dir: PathBuf,
    /// `None` on a dry run.
    pub paths: Option<ReportPaths>,
    /// Distinct (feed, column) pairs filled from the reference library.
    pub backfilled: usize,
}

/// Ranked library candidates and advisory defaults for one lab feed.
pub struct FeedSuggestions {
    pub feed: String,
    /// Advisory TYPE default from the feed name and lab feed type.
    pub default_type: &'static str,
    /// Advisory METHOD default.
    pub default_method: &'static str,
    pub suggestions: Vec<Suggestion>,
}

/// Suggestions per distinct lab feed, in lab-table order.
pub struct SuggestResult {
    pub feeds: Vec<FeedSuggestions>,
}
