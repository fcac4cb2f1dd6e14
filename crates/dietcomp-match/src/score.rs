//! Scoring of lab feed names against reference library names.
//!
//! Jaro-Winkler similarity on normalized names is the base score, with
//! boosts when one name contains the other or the two share most of their
//! words. Suggestions only rank candidates; the user still confirms the
//! match, and the confirmed selection must carry the library's original
//! display name for the lookup to resolve.

use std::cmp::Ordering;

use rapidfuzz::distance::jaro_winkler;
use serde::{Deserialize, Serialize};

use dietcomp_library::{ReferenceLibrary, normalize};

/// A ranked candidate match for one lab feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Lab feed name as it appears in `desc_1`.
    pub feed: String,
    /// Library display name (the valid lookup key).
    pub library_name: String,
    /// Confidence in [0, 1], may slightly exceed 1.0 with boosts.
    pub score: f32,
}

/// Engine holding the normalized library names.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    candidates: Vec<(String, String)>,
}

impl SuggestionEngine {
    pub fn new(library: &ReferenceLibrary) -> Self {
        let candidates = library
            .entries
            .iter()
            .map(|entry| (entry.name_original.clone(), entry.name_clean.clone()))
            .collect();
        Self { candidates }
    }

    /// Similarity of one feed/candidate pair.
    pub fn score(&self, feed: &str, library_name: &str) -> f32 {
        let feed_clean = normalize(feed);
        let candidate_clean = self
            .candidates
            .iter()
            .find(|(original, _)| original.as_str() == library_name)
            .map_or_else(|| normalize(library_name), |(_, clean)| clean.clone());
        score_names(&feed_clean, &candidate_clean)
    }

    /// Ranked suggestions for one feed, best first, dropping candidates
    /// below `min_confidence`, keeping at most `limit`.
    pub fn suggest(&self, feed: &str, min_confidence: f32, limit: usize) -> Vec<Suggestion> {
        let feed_clean = normalize(feed);
        let mut suggestions: Vec<Suggestion> = self
            .candidates
            .iter()
            .map(|(original, clean)| Suggestion {
                feed: feed.to_string(),
                library_name: original.clone(),
                score: score_names(&feed_clean, clean),
            })
            .filter(|suggestion| suggestion.score >= min_confidence)
            .collect();
        suggestions.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        suggestions.truncate(limit);
        suggestions
    }
}

fn score_names(feed_clean: &str, candidate_clean: &str) -> f32 {
    if feed_clean.is_empty() || candidate_clean.is_empty() {
        return 0.0;
    }
    let base = jaro_winkler::similarity(feed_clean.chars(), candidate_clean.chars()) as f32;
    let mut score = base;

    // Containment boost: "corn silage" inside "corn silage, typical".
    if candidate_clean.contains(feed_clean) || feed_clean.contains(candidate_clean) {
        score *= 1.05;
    }

    // Word-overlap boost for reordered names.
    let feed_words: Vec<&str> = feed_clean.split(' ').collect();
    let shared = feed_words
        .iter()
        .filter(|word| candidate_clean.split(' ').any(|other| other == **word))
        .count();
    if !feed_words.is_empty() && shared * 2 >= feed_words.len() {
        score *= 1.03;
    }

    score
}
