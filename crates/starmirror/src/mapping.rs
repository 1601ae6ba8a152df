//! Destination-safe name mapping.
//!
//! Source repository names are namespaced ("owner/project") while the
//! destination keeps every mirrored project flat inside one group. The
//! mapped name is the join key between the two sides, so distinct source
//! names must stay distinct after mapping.

/// Compute the destination project path for a source repository name.
///
/// Every `"__"` already present in the name is widened to `"___"` first,
/// then each `"/"` becomes `"__"`. The escape step must run before the
/// separator substitution; in the other order "a__b" and "a/b" would both
/// map to the same string.
#[must_use]
pub fn map_name(name: &str) -> String {
    name.replace("__", "___").replace('/', "__")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn separator_becomes_double_underscore() {
        assert_eq!(map_name("owner/project"), "owner__project");
    }

    #[test]
    fn existing_marker_is_escaped_before_substitution() {
        assert_eq!(map_name("owner/has__marker"), "owner__has___marker");
        assert_eq!(map_name("has__marker/project"), "has___marker__project");
    }

    #[test]
    fn escaped_name_never_collides_with_separated_name() {
        assert_ne!(map_name("a__b"), map_name("a/b"));
    }

    #[test]
    fn total_over_names_without_separator() {
        assert_eq!(map_name("plain"), "plain");
        assert_eq!(map_name(""), "");
    }

    #[test]
    fn distinct_names_map_to_distinct_paths() {
        let names = [
            "rust-lang/rust",
            "rust__lang/rust",
            "rust-lang/rust_",
            "tokio-rs/tokio",
            "a/b__c",
            "a__b/c",
            "owner/project",
            "owner/pro_ject",
            "own_er/project",
            "o/w",
        ];

        let mapped: HashSet<String> = names.iter().map(|n| map_name(n)).collect();
        assert_eq!(mapped.len(), names.len());
    }
}
