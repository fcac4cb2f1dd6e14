//! The in-memory reference library and value lookup.

use serde::{Deserialize, Serialize};

use dietcomp_model::{NO_MATCH_SENTINEL, ReferenceMatch};

use crate::norm::normalize;

/// One library feed: the display name as stored in the file, its
/// normalized form, and the numeric reference columns present on the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub name_original: String,
    pub name_clean: String,
    /// (column, value) pairs in file column order; absent cells are not
    /// stored.
    pub values: Vec<(String, f64)>,
}

impl ReferenceEntry {
    pub fn value(&self, column: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| *value)
    }
}

/// The loaded reference library, entries in file order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceLibrary {
    /// Value columns available in the file (everything except the name
    /// column), used to answer "does this library carry that column".
    pub columns: Vec<String>,
    pub entries: Vec<ReferenceEntry>,
}

impl ReferenceLibrary {
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|name| name == column)
    }

    /// Resolves a user-selected match to a reference value.
    ///
    /// Matching is by the *original* display name, exactly as stored in
    /// the library file — not the normalized form. The normalized names
    /// exist only to build pick lists (`selection_list`), so a selection
    /// copied from the pick list rather than the original name will not
    /// resolve. That asymmetry is longstanding behavior and is kept as-is.
    ///
    /// Returns the first matching entry's value, or `None` when the match
    /// is the no-match sentinel, the column is absent from the library, or
    /// no entry carries that display name.
    pub fn resolve(&self, requested: &ReferenceMatch, column: &str) -> Option<f64> {
        let name = requested.name()?;
        if !self.has_column(column) {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| entry.name_original == name)
            .and_then(|entry| entry.value(column))
    }

    /// Pick list for match selection: sorted normalized names with the
    /// no-match sentinel appended last.
    pub fn selection_list(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .entries
            .iter()
            .map(|entry| entry.name_clean.clone())
            .collect();
        names.sort();
        names.dedup();
        names.push(NO_MATCH_SENTINEL.to_string());
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds an entry from a display name and its row cells.
pub(crate) fn entry_from_row(name: &str, values: Vec<(String, f64)>) -> ReferenceEntry {
    ReferenceEntry {
        name_original: name.to_string(),
        name_clean: normalize(name),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> ReferenceLibrary {
        ReferenceLibrary {
            columns: vec!["Feed NDF".to_string(), "Feed FA".to_string()],
            entries: vec![
                entry_from_row(
                    "Corn silage, typical",
                    vec![("Feed NDF".to_string(), 40.0), ("Feed FA".to_string(), 2.8)],
                ),
                entry_from_row("Corn grain, dry", vec![("Feed NDF".to_string(), 9.8)]),
            ],
        }
    }

    #[test]
    fn resolves_by_original_name_only() {
        let library = library();
        let matched = ReferenceMatch::parse("Corn silage, typical");
        assert_eq!(library.resolve(&matched, "Feed NDF"), Some(40.0));

        // The normalized spelling is not a valid lookup key.
        let normalized = ReferenceMatch::parse("corn silage, typical");
        assert_eq!(library.resolve(&normalized, "Feed NDF"), None);
    }

    #[test]
    fn no_match_sentinel_resolves_to_nothing() {
        let library = library();
        assert_eq!(
            library.resolve(&ReferenceMatch::NoMatch, "Feed NDF"),
            None
        );
    }

    #[test]
    fn absent_column_resolves_to_nothing() {
        let library = library();
        let matched = ReferenceMatch::parse("Corn grain, dry");
        assert_eq!(library.resolve(&matched, "Feed RUP_base"), None);
    }

    #[test]
    fn absent_cell_resolves_to_nothing() {
        let library = library();
        let matched = ReferenceMatch::parse("Corn grain, dry");
        assert_eq!(library.resolve(&matched, "Feed FA"), None);
    }

    #[test]
    fn selection_list_is_normalized_and_ends_with_sentinel() {
        let list = library().selection_list();
        assert_eq!(
            list,
            vec![
                "corn grain, dry".to_string(),
                "corn silage, typical".to_string(),
                "(None)".to_string(),
            ]
        );
    }
}
