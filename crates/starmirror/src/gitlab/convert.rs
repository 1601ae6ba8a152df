//! Record conversion for GitLab projects.

use super::types::GitLabProject;
use crate::record::RepoRecord;

/// Convert a project into the synchronizer's record form.
///
/// The flat project path becomes the record name and the SSH URL the
/// clone URL, since destination records are only ever pushed to.
pub fn to_record(project: GitLabProject) -> RepoRecord {
    RepoRecord {
        name: project.path,
        clone_url: project.ssh_url_to_repo,
        description: project.description,
        id: project.id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_every_field_through() {
        let project = GitLabProject {
            id: 7,
            path: "owner__project".to_string(),
            ssh_url_to_repo: "git@gitlab.example.com:mirrors/owner__project.git".to_string(),
            description: Some("A project".to_string()),
        };

        let record = to_record(project);
        assert_eq!(record.name, "owner__project");
        assert_eq!(
            record.clone_url,
            "git@gitlab.example.com:mirrors/owner__project.git"
        );
        assert_eq!(record.description.as_deref(), Some("A project"));
        assert_eq!(record.id, 7);
    }
}
