//! GitHub client creation and listing operations.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use super::convert::to_record;
use super::error::GitHubError;
use super::types::GitHubRepo;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use crate::record::RepoRecord;
use crate::sync::{ProgressCallback, SyncProgress, emit};

/// Default GitHub API host.
pub const GITHUB_API_HOST: &str = "https://api.github.com";

/// Page size for starred listings.
const PAGE_SIZE: usize = 100;

/// GitHub API client.
///
/// Starred listings are public, so the client carries no credentials.
#[derive(Clone)]
pub struct GitHubClient {
    transport: Arc<dyn HttpTransport>,
    host: String,
}

impl GitHubClient {
    /// Create a new client against `host` (usually [`GITHUB_API_HOST`]).
    pub fn new(host: &str) -> Result<Self, GitHubError> {
        let transport = ReqwestTransport::with_timeout(Duration::from_secs(30))
            .map_err(|e| GitHubError::Http(e.to_string()))?;
        Ok(Self::new_with_transport(host, Arc::new(transport)))
    }

    pub fn new_with_transport(host: &str, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            host: host.trim_end_matches('/').to_string(),
        }
    }

    /// Get the host URL.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Make an unauthenticated GET request.
    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, GitHubError> {
        let url = format!("{}{}", self.host, path);

        let request = HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: vec![
                (
                    "Accept".to_string(),
                    "application/vnd.github+json".to_string(),
                ),
                ("User-Agent".to_string(), "starmirror".to_string()),
            ],
            body: Vec::new(),
        };

        let response: HttpResponse = self
            .transport
            .send(request)
            .await
            .map_err(|e| GitHubError::Http(e.to_string()))?;

        if !(200..300).contains(&response.status) {
            let message = String::from_utf8_lossy(&response.body).to_string();
            return Err(GitHubError::Api {
                status: response.status,
                message,
            });
        }

        serde_json::from_slice(&response.body).map_err(GitHubError::Json)
    }

    /// List every repository starred by `account`.
    ///
    /// Pages through the starred endpoint from page 1 until a page comes
    /// back empty. Any non-success response aborts the whole listing; no
    /// retry, no partial results.
    pub async fn list_starred(
        &self,
        account: &str,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<Vec<RepoRecord>, GitHubError> {
        emit(
            on_progress,
            SyncProgress::FetchingStars {
                account: account.to_string(),
            },
        );

        let mut records = Vec::new();
        let mut page = 1u32;

        loop {
            let repos: Vec<GitHubRepo> = self
                .get(&format!(
                    "/users/{}/starred?per_page={}&page={}",
                    account, PAGE_SIZE, page
                ))
                .await?;

            let count = repos.len();
            records.extend(repos.into_iter().map(to_record));

            emit(
                on_progress,
                SyncProgress::FetchedStarsPage {
                    account: account.to_string(),
                    page,
                    count,
                    total_so_far: records.len(),
                },
            );

            // Only an empty page terminates the listing; a partial page
            // does not.
            if count == 0 {
                break;
            }

            page += 1;
        }

        emit(
            on_progress,
            SyncProgress::StarsComplete {
                account: account.to_string(),
                total: records.len(),
            },
        );

        Ok(records)
    }

    /// Union of starred listings across `accounts`.
    ///
    /// Records identical in every field collapse to one entry; the result
    /// is sorted by name so downstream ordering is deterministic.
    pub async fn list_all_starred(
        &self,
        accounts: &[String],
        on_progress: Option<&ProgressCallback>,
    ) -> Result<Vec<RepoRecord>, GitHubError> {
        let mut set: HashSet<RepoRecord> = HashSet::new();

        for account in accounts {
            set.extend(self.list_starred(account, on_progress).await?);
        }

        let mut records: Vec<RepoRecord> = set.into_iter().collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::http::MockTransport;

    fn response(status: u16, body: serde_json::Value) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: serde_json::to_vec(&body).unwrap(),
        }
    }

    fn repo_json(id: i64) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "full_name": format!("owner/repo-{id}"),
            "clone_url": format!("https://github.test/owner/repo-{id}.git"),
            "description": "a project",
            "private": false
        })
    }

    fn page_json(ids: std::ops::RangeInclusive<i64>) -> serde_json::Value {
        serde_json::Value::Array(ids.map(repo_json).collect())
    }

    fn starred_url(account: &str, page: u32) -> String {
        format!("{GITHUB_API_HOST}/users/{account}/starred?per_page=100&page={page}")
    }

    #[tokio::test]
    async fn test_list_starred_pages_until_empty_page() {
        let transport = MockTransport::new();
        transport.push_response(
            HttpMethod::Get,
            starred_url("alice", 1),
            response(200, page_json(1..=100)),
        );
        transport.push_response(
            HttpMethod::Get,
            starred_url("alice", 2),
            response(200, page_json(101..=200)),
        );
        transport.push_response(
            HttpMethod::Get,
            starred_url("alice", 3),
            response(200, page_json(201..=237)),
        );
        transport.push_response(
            HttpMethod::Get,
            starred_url("alice", 4),
            response(200, serde_json::json!([])),
        );

        let client =
            GitHubClient::new_with_transport(GITHUB_API_HOST, Arc::new(transport.clone()));
        let records = client.list_starred("alice", None).await.unwrap();

        assert_eq!(records.len(), 237);

        let requests = transport.requests();
        assert_eq!(requests.len(), 4);
        for (i, request) in requests.iter().enumerate() {
            assert_eq!(request.url, starred_url("alice", (i + 1) as u32));
        }
    }

    #[tokio::test]
    async fn test_list_starred_sends_accept_and_user_agent() {
        let transport = MockTransport::new();
        transport.push_response(
            HttpMethod::Get,
            starred_url("alice", 1),
            response(200, serde_json::json!([])),
        );

        let client =
            GitHubClient::new_with_transport(GITHUB_API_HOST, Arc::new(transport.clone()));
        client.list_starred("alice", None).await.unwrap();

        let requests = transport.requests();
        assert!(requests[0]
            .headers
            .iter()
            .any(|(k, v)| k == "User-Agent" && v == "starmirror"));
        assert!(requests[0]
            .headers
            .iter()
            .any(|(k, v)| k == "Accept" && v == "application/vnd.github+json"));
    }

    #[tokio::test]
    async fn test_list_starred_aborts_on_error_status() {
        let transport = MockTransport::new();
        transport.push_response(
            HttpMethod::Get,
            starred_url("alice", 1),
            HttpResponse {
                status: 500,
                headers: Vec::new(),
                body: b"server error".to_vec(),
            },
        );

        let client =
            GitHubClient::new_with_transport(GITHUB_API_HOST, Arc::new(transport.clone()));
        let err = client.list_starred("alice", None).await.unwrap_err();

        match err {
            GitHubError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "server error");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_list_all_starred_dedupes_and_sorts_across_accounts() {
        let transport = MockTransport::new();
        transport.push_response(
            HttpMethod::Get,
            starred_url("alice", 1),
            response(
                200,
                serde_json::Value::Array(vec![repo_json(2), repo_json(1)]),
            ),
        );
        transport.push_response(
            HttpMethod::Get,
            starred_url("alice", 2),
            response(200, serde_json::json!([])),
        );
        transport.push_response(
            HttpMethod::Get,
            starred_url("bob", 1),
            response(
                200,
                serde_json::Value::Array(vec![repo_json(2), repo_json(3)]),
            ),
        );
        transport.push_response(
            HttpMethod::Get,
            starred_url("bob", 2),
            response(200, serde_json::json!([])),
        );

        let client =
            GitHubClient::new_with_transport(GITHUB_API_HOST, Arc::new(transport.clone()));
        let records = client
            .list_all_starred(&["alice".to_string(), "bob".to_string()], None)
            .await
            .unwrap();

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["owner/repo-1", "owner/repo-2", "owner/repo-3"]);
    }

    #[tokio::test]
    async fn test_list_starred_emits_page_events() {
        let transport = MockTransport::new();
        transport.push_response(
            HttpMethod::Get,
            starred_url("alice", 1),
            response(200, serde_json::Value::Array(vec![repo_json(1)])),
        );
        transport.push_response(
            HttpMethod::Get,
            starred_url("alice", 2),
            response(200, serde_json::json!([])),
        );

        let events: Arc<Mutex<Vec<SyncProgress>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let callback: ProgressCallback = Box::new(move |event| {
            sink.lock().unwrap().push(event);
        });

        let client = GitHubClient::new_with_transport(GITHUB_API_HOST, Arc::new(transport));
        client
            .list_starred("alice", Some(&callback))
            .await
            .unwrap();

        let events = events.lock().unwrap();
        let pages: Vec<(u32, usize)> = events
            .iter()
            .filter_map(|e| match e {
                SyncProgress::FetchedStarsPage { page, count, .. } => Some((*page, *count)),
                _ => None,
            })
            .collect();
        assert_eq!(pages, vec![(1, 1), (2, 0)]);
        assert!(matches!(
            events.last(),
            Some(SyncProgress::StarsComplete { total: 1, .. })
        ));
    }
}
