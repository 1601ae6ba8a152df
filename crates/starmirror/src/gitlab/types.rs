//! GitLab API data types.

use serde::Deserialize;

/// GitLab project - fields we need from group listings and creation
/// responses.
#[derive(Debug, Clone, Deserialize)]
pub struct GitLabProject {
    /// Project ID.
    pub id: i64,
    /// Project path inside its namespace (the mapped name).
    pub path: String,
    /// SSH URL, used as the push target for mirrored history.
    pub ssh_url_to_repo: String,
    /// Project description (may be null).
    pub description: Option<String>,
}

/// GitLab group - only the namespace id is read.
#[derive(Debug, Clone, Deserialize)]
pub struct GitLabGroup {
    /// Group ID, used as `namespace_id` in project creation.
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_deserializes_needed_fields_and_ignores_the_rest() {
        let json = r#"{
            "id": 7,
            "path": "owner__project",
            "name": "owner__project",
            "ssh_url_to_repo": "git@gitlab.example.com:mirrors/owner__project.git",
            "http_url_to_repo": "https://gitlab.example.com/mirrors/owner__project.git",
            "description": "A project",
            "visibility": "private"
        }"#;

        let project: GitLabProject = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, 7);
        assert_eq!(project.path, "owner__project");
        assert_eq!(
            project.ssh_url_to_repo,
            "git@gitlab.example.com:mirrors/owner__project.git"
        );
        assert_eq!(project.description.as_deref(), Some("A project"));
    }

    #[test]
    fn project_null_description_decodes_as_none() {
        let json = r#"{
            "id": 8,
            "path": "owner__quiet",
            "ssh_url_to_repo": "git@gitlab.example.com:mirrors/owner__quiet.git",
            "description": null
        }"#;

        let project: GitLabProject = serde_json::from_str(json).unwrap();
        assert_eq!(project.description, None);
    }

    #[test]
    fn group_deserializes_id() {
        let json = r#"{"id": 42, "name": "mirrors", "path": "mirrors", "visibility": "private"}"#;
        let group: GitLabGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.id, 42);
    }
}
