//! GitHub API data types.

use serde::Deserialize;

/// GitHub repository - fields we need from the starred listing.
///
/// Only the fields the synchronizer reads are declared; everything else
/// in the response is ignored, which keeps decoding resilient to API
/// additions.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    /// Repository ID.
    pub id: i64,
    /// Full name including owner (e.g., "owner/project").
    pub full_name: String,
    /// HTTPS clone URL.
    pub clone_url: String,
    /// Repository description (may be null).
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_needed_fields_and_ignores_the_rest() {
        let json = r#"{
            "id": 1296269,
            "full_name": "octocat/Hello-World",
            "clone_url": "https://github.com/octocat/Hello-World.git",
            "description": "My first repository",
            "private": false,
            "stargazers_count": 80,
            "owner": {"login": "octocat", "id": 1}
        }"#;

        let repo: GitHubRepo = serde_json::from_str(json).unwrap();
        assert_eq!(repo.id, 1296269);
        assert_eq!(repo.full_name, "octocat/Hello-World");
        assert_eq!(
            repo.clone_url,
            "https://github.com/octocat/Hello-World.git"
        );
        assert_eq!(repo.description.as_deref(), Some("My first repository"));
    }

    #[test]
    fn null_description_decodes_as_none() {
        let json = r#"{
            "id": 7,
            "full_name": "owner/project",
            "clone_url": "https://github.com/owner/project.git",
            "description": null
        }"#;

        let repo: GitHubRepo = serde_json::from_str(json).unwrap();
        assert_eq!(repo.description, None);
    }
}
