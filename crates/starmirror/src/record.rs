/// A repository as the synchronizer sees it, on either side of the sync.
///
/// For source records `name` is the namespaced form ("owner/project"); for
/// destination records it is the flat project path. Records are plain
/// values: structural equality over every field is what deduplication
/// relies on, so a repository starred under several accounts collapses to
/// a single entry only when all fields agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRecord {
    /// Repository name as the owning service reports it.
    pub name: String,
    /// URL git operations address this repository by.
    pub clone_url: String,
    /// Free-form description. Absent and empty are distinct values.
    pub description: Option<String>,
    /// Service-side identifier, used to address update calls.
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn record(name: &str) -> RepoRecord {
        RepoRecord {
            name: name.to_string(),
            clone_url: format!("https://example.com/{name}.git"),
            description: Some("a project".to_string()),
            id: 1,
        }
    }

    #[test]
    fn identical_records_collapse_in_a_set() {
        let set: HashSet<RepoRecord> =
            [record("owner/project"), record("owner/project")].into();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn any_field_difference_keeps_records_distinct() {
        let base = record("owner/project");

        let mut different_description = base.clone();
        different_description.description = Some("another".to_string());

        let mut absent_description = base.clone();
        absent_description.description = None;

        let mut different_id = base.clone();
        different_id.id = 2;

        let set: HashSet<RepoRecord> = [
            base,
            different_description,
            absent_description,
            different_id,
        ]
        .into();
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn empty_and_absent_descriptions_are_distinct() {
        let mut empty = record("owner/project");
        empty.description = Some(String::new());

        let mut absent = record("owner/project");
        absent.description = None;

        assert_ne!(empty, absent);
    }
}
