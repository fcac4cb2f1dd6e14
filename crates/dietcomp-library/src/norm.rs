//! Feed-name normalization.
//!
//! Library entries and lab feeds spell the same feed many ways: stray
//! non-breaking spaces from spreadsheet exports, `_`/`-` separators, mixed
//! case, doubled spaces. `normalize` folds all of that into one canonical
//! form used as the matching key for pick lists and fuzzy scoring.

/// Canonical form of a feed name: lowercase, NBSP to space, runs of
/// hyphens/underscores to one space, whitespace collapsed, trimmed.
/// Total and idempotent.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    let mut started = false;
    for ch in text.chars() {
        let ch = if ch == '\u{00a0}' { ' ' } else { ch };
        if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_space = started;
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.extend(ch.to_lowercase());
        started = true;
    }
    out
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::normalize;

    #[test]
    fn collapses_separators_and_case() {
        assert_eq!(normalize("Corn_Silage--Short"), "corn silage short");
        assert_eq!(normalize("  CORN\u{00a0}GRAIN  "), "corn grain");
        assert_eq!(normalize("soybean   meal"), "soybean meal");
    }

    #[test]
    fn empty_and_separator_only_input_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("- _ -"), "");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(input in "\\PC{0,64}") {
            let once = normalize(&input);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
