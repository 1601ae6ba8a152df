//! GitLab client creation, listing and mutation operations.

use std::sync::Arc;
use std::time::Duration;

use super::convert::to_record;
use super::error::GitLabError;
use super::types::{GitLabGroup, GitLabProject};
use crate::http::{
    HttpHeaders, HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
};
use crate::record::RepoRecord;
use crate::sync::{ProgressCallback, SyncProgress, emit};

/// Page size for project listings.
const PAGE_SIZE: usize = 100;

/// GitLab API client.
///
/// Every request carries the configured private token; the destination
/// group and its projects are not assumed to be publicly visible.
#[derive(Clone)]
pub struct GitLabClient {
    transport: Arc<dyn HttpTransport>,
    host: String,
    token: String,
}

impl GitLabClient {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `host` - Base URL of the GitLab instance (e.g., "https://gitlab.example.com")
    /// * `token` - Private token with API access to the destination group
    pub fn new(host: &str, token: &str) -> Result<Self, GitLabError> {
        let transport = ReqwestTransport::with_timeout(Duration::from_secs(30))
            .map_err(|e| GitLabError::Http(e.to_string()))?;
        Ok(Self::new_with_transport(host, token, Arc::new(transport)))
    }

    pub fn new_with_transport(
        host: &str,
        token: &str,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            transport,
            host: host.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Get the host URL.
    pub fn host(&self) -> &str {
        &self.host
    }

    fn base_headers(&self) -> HttpHeaders {
        vec![
            ("Private-Token".to_string(), self.token.clone()),
            ("User-Agent".to_string(), "starmirror".to_string()),
        ]
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, GitLabError> {
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| GitLabError::Http(e.to_string()))?;

        if !(200..300).contains(&response.status) {
            let message = String::from_utf8_lossy(&response.body).to_string();
            return Err(GitLabError::Api {
                status: response.status,
                message,
            });
        }

        Ok(response)
    }

    /// Make an authenticated GET request.
    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, GitLabError> {
        let mut headers = self.base_headers();
        headers.push(("Accept".to_string(), "application/json".to_string()));

        let response = self
            .send(HttpRequest {
                method: HttpMethod::Get,
                url: format!("{}{}", self.host, path),
                headers,
                body: Vec::new(),
            })
            .await?;

        serde_json::from_slice(&response.body).map_err(GitLabError::Json)
    }

    /// Make an authenticated form-encoded request.
    async fn send_form(
        &self,
        method: HttpMethod,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<HttpResponse, GitLabError> {
        let body = serde_urlencoded::to_string(fields)
            .map_err(|e| GitLabError::Encode(e.to_string()))?;

        let mut headers = self.base_headers();
        headers.push((
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        ));

        self.send(HttpRequest {
            method,
            url: format!("{}{}", self.host, path),
            headers,
            body: body.into_bytes(),
        })
        .await
    }

    /// Look up the destination group and return its namespace id.
    pub async fn group_namespace_id(&self, group: &str) -> Result<i64, GitLabError> {
        let group: GitLabGroup = self.get(&format!("/api/v4/groups/{}", group)).await?;
        Ok(group.id)
    }

    /// List every project in `group`.
    ///
    /// Pages through the group projects endpoint from page 1 until a page
    /// comes back empty. Any non-success response aborts the whole
    /// listing; no retry, no partial results.
    pub async fn list_group_projects(
        &self,
        group: &str,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<Vec<RepoRecord>, GitLabError> {
        emit(
            on_progress,
            SyncProgress::FetchingProjects {
                group: group.to_string(),
            },
        );

        let mut records = Vec::new();
        let mut page = 1u32;

        loop {
            let projects: Vec<GitLabProject> = self
                .get(&format!(
                    "/api/v4/groups/{}/projects?per_page={}&page={}",
                    group, PAGE_SIZE, page
                ))
                .await?;

            let count = projects.len();
            records.extend(projects.into_iter().map(to_record));

            emit(
                on_progress,
                SyncProgress::FetchedProjectsPage {
                    group: group.to_string(),
                    page,
                    count,
                    total_so_far: records.len(),
                },
            );

            if count == 0 {
                break;
            }

            page += 1;
        }

        emit(
            on_progress,
            SyncProgress::ProjectsComplete {
                group: group.to_string(),
                total: records.len(),
            },
        );

        Ok(records)
    }

    /// Create a project with path `path` under the namespace.
    ///
    /// Fails with an API error if the path is already taken; the caller
    /// is expected to consult the group listing first.
    pub async fn create_project(
        &self,
        namespace_id: i64,
        path: &str,
    ) -> Result<RepoRecord, GitLabError> {
        let namespace_id = namespace_id.to_string();
        let response = self
            .send_form(
                HttpMethod::Post,
                "/api/v4/projects",
                &[("path", path), ("namespace_id", &namespace_id)],
            )
            .await?;

        let project: GitLabProject =
            serde_json::from_slice(&response.body).map_err(GitLabError::Json)?;
        Ok(to_record(project))
    }

    /// Set a project's description.
    ///
    /// An absent description sends no description field at all, leaving
    /// the destination value untouched by the server.
    pub async fn set_description(
        &self,
        project_id: i64,
        description: Option<&str>,
    ) -> Result<(), GitLabError> {
        let mut fields: Vec<(&str, &str)> = Vec::new();
        if let Some(text) = description {
            fields.push(("description", text));
        }

        self.send_form(
            HttpMethod::Put,
            &format!("/api/v4/projects/{}", project_id),
            &fields,
        )
        .await?;

        Ok(())
    }
}
