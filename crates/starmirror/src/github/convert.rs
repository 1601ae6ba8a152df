//! Record conversion for GitHub repositories.

use super::types::GitHubRepo;
use crate::record::RepoRecord;

/// Convert a starred-listing entry into the synchronizer's record form.
///
/// The namespaced full name becomes the record name; the description is
/// carried through untouched, absent stays absent.
pub fn to_record(repo: GitHubRepo) -> RepoRecord {
    RepoRecord {
        name: repo.full_name,
        clone_url: repo.clone_url,
        description: repo.description,
        id: repo.id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_every_field_through() {
        let repo = GitHubRepo {
            id: 42,
            full_name: "owner/project".to_string(),
            clone_url: "https://github.com/owner/project.git".to_string(),
            description: Some("A project".to_string()),
        };

        let record = to_record(repo);
        assert_eq!(record.name, "owner/project");
        assert_eq!(record.clone_url, "https://github.com/owner/project.git");
        assert_eq!(record.description.as_deref(), Some("A project"));
        assert_eq!(record.id, 42);
    }

    #[test]
    fn absent_description_stays_absent() {
        let repo = GitHubRepo {
            id: 1,
            full_name: "owner/quiet".to_string(),
            clone_url: "https://github.com/owner/quiet.git".to_string(),
            description: None,
        };

        assert_eq!(to_record(repo).description, None);
    }
}
