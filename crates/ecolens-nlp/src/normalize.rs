//! Whitespace normalization — the common substrate for every analyzer.

/// Strip leading/trailing whitespace and collapse every internal run of
/// whitespace (spaces, tabs, newlines) to a single ASCII space.
/// Whitespace-only input normalizes to the empty string.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_internal_runs() {
        assert_eq!(normalize("  great \t product \n\n really  "), "great product really");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n "), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["", "   ", "one", "  a\tb\nc  ", "already clean"];
        for t in inputs {
            let once = normalize(t);
            assert_eq!(normalize(&once), once);
        }
    }
}
