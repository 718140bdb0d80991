//! HTTP client for the Toggl v6 REST API.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{
    Client, ClientData, Project, ProjectData, Task, TimeEntry, TimeEntryData, Workspace,
    WorkspaceUser,
};

/// Default request timeout for API calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// API client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The provided credentials were unusable.
    #[error("invalid credentials: {reason}")]
    InvalidCredentials { reason: &'static str },
    /// Failed to build HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    /// HTTP request failed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// API returned an error response.
    #[error("API error (status {status}): {message}")]
    Api { status: StatusCode, message: String },
    /// Failed to parse response.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Toggl API client.
///
/// Each method issues one request against a fixed resource endpoint and maps
/// the `{"data": ...}` envelope to a typed result. Endpoints that can 404 for
/// a missing resource return `Option` (reads/updates) or `bool` (deletes)
/// instead of an error.
pub struct TogglApi {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl fmt::Debug for TogglApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TogglApi")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct TimeEntryBody<'a> {
    time_entry: &'a TimeEntryData,
}

#[derive(Serialize)]
struct ProjectBody<'a> {
    project: &'a ProjectData,
}

#[derive(Serialize)]
struct ClientBody<'a> {
    client: &'a ClientData,
}

impl TogglApi {
    /// Creates a new client for `base_url` with HTTP Basic credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if either credential is empty or whitespace-only, or
    /// if the HTTP client fails to build.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let username = username.into();
        let password = password.into();

        if username.trim().is_empty() {
            return Err(ApiError::InvalidCredentials {
                reason: "username cannot be empty",
            });
        }
        if password.trim().is_empty() {
            return Err(ApiError::InvalidCredentials {
                reason: "password cannot be empty",
            });
        }

        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            username,
            password,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<(StatusCode, String), ApiError> {
        let response = builder
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::trace!(status = %status, body = %body, "response");
        Ok((status, body))
    }

    /// Sends the request and decodes the `data` envelope.
    async fn fetch<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let (status, body) = self.send(builder).await?;
        if !status.is_success() {
            return Err(api_error(status, &body));
        }
        decode(&body)
    }

    /// Like [`Self::fetch`], but a 404 becomes `None`.
    async fn fetch_optional<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        let (status, body) = self.send(builder).await?;
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(api_error(status, &body));
        }
        decode(&body).map(Some)
    }

    // ========== Time entries ==========

    /// Lists time entries, optionally restricted to a UTC range.
    pub async fn get_time_entries(
        &self,
        range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<TimeEntry>, ApiError> {
        let url = self.url("time_entries.json");
        let mut builder = self.http.get(&url);
        if let Some((start, end)) = range {
            builder = builder.query(&[
                ("start_date", start.to_rfc3339_opts(SecondsFormat::Secs, true)),
                ("end_date", end.to_rfc3339_opts(SecondsFormat::Secs, true)),
            ]);
        }
        tracing::debug!(%url, "GET time entries");
        self.fetch(builder).await
    }

    /// Fetches a single time entry, or `None` if the id does not exist.
    pub async fn get_time_entry(&self, id: u64) -> Result<Option<TimeEntry>, ApiError> {
        let url = self.url(&format!("time_entries/{id}.json"));
        tracing::debug!(%url, "GET time entry");
        self.fetch_optional(self.http.get(&url)).await
    }

    /// Creates a new time entry and returns the stored resource.
    pub async fn create_time_entry(&self, entry: &TimeEntryData) -> Result<TimeEntry, ApiError> {
        let url = self.url("time_entries.json");
        tracing::debug!(%url, "POST time entry");
        self.fetch(self.http.post(&url).json(&TimeEntryBody { time_entry: entry }))
            .await
    }

    /// Updates a time entry, or returns `None` if the id does not exist.
    pub async fn update_time_entry(
        &self,
        id: u64,
        entry: &TimeEntryData,
    ) -> Result<Option<TimeEntry>, ApiError> {
        let url = self.url(&format!("time_entries/{id}.json"));
        tracing::debug!(%url, "PUT time entry");
        self.fetch_optional(self.http.put(&url).json(&TimeEntryBody { time_entry: entry }))
            .await
    }

    /// Deletes a time entry. Returns `false` if the id does not exist.
    pub async fn delete_time_entry(&self, id: u64) -> Result<bool, ApiError> {
        let url = self.url(&format!("time_entries/{id}.json"));
        tracing::debug!(%url, "DELETE time entry");
        let (status, body) = self.send(self.http.delete(&url)).await?;
        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !status.is_success() {
            return Err(api_error(status, &body));
        }
        Ok(true)
    }

    // ========== Projects ==========

    /// Lists all projects, archived ones included.
    pub async fn get_projects(&self) -> Result<Vec<Project>, ApiError> {
        let url = self.url("projects.json");
        tracing::debug!(%url, "GET projects");
        self.fetch(self.http.get(&url)).await
    }

    /// Creates a new project.
    pub async fn create_project(&self, project: &ProjectData) -> Result<Project, ApiError> {
        let url = self.url("projects.json");
        tracing::debug!(%url, "POST project");
        self.fetch(self.http.post(&url).json(&ProjectBody { project }))
            .await
    }

    /// Updates a project, or returns `None` if the id does not exist.
    pub async fn update_project(
        &self,
        id: u64,
        project: &ProjectData,
    ) -> Result<Option<Project>, ApiError> {
        let url = self.url(&format!("projects/{id}.json"));
        tracing::debug!(%url, "PUT project");
        self.fetch_optional(self.http.put(&url).json(&ProjectBody { project }))
            .await
    }

    /// Archives or reopens a project by flipping its active flag.
    pub async fn set_project_active(
        &self,
        id: u64,
        active: bool,
    ) -> Result<Option<Project>, ApiError> {
        let patch = ProjectData {
            is_active: Some(active),
            ..ProjectData::default()
        };
        self.update_project(id, &patch).await
    }

    // ========== Clients ==========

    /// Lists all clients.
    pub async fn get_clients(&self) -> Result<Vec<Client>, ApiError> {
        let url = self.url("clients.json");
        tracing::debug!(%url, "GET clients");
        self.fetch(self.http.get(&url)).await
    }

    /// Creates a new client.
    pub async fn create_client(&self, client: &ClientData) -> Result<Client, ApiError> {
        let url = self.url("clients.json");
        tracing::debug!(%url, "POST client");
        self.fetch(self.http.post(&url).json(&ClientBody { client }))
            .await
    }

    /// Updates a client, or returns `None` if the id does not exist.
    pub async fn update_client(
        &self,
        id: u64,
        client: &ClientData,
    ) -> Result<Option<Client>, ApiError> {
        let url = self.url(&format!("clients/{id}.json"));
        tracing::debug!(%url, "PUT client");
        self.fetch_optional(self.http.put(&url).json(&ClientBody { client }))
            .await
    }

    /// Deletes a client. Returns `false` if the id does not exist.
    pub async fn delete_client(&self, id: u64) -> Result<bool, ApiError> {
        let url = self.url(&format!("clients/{id}.json"));
        tracing::debug!(%url, "DELETE client");
        let (status, body) = self.send(self.http.delete(&url)).await?;
        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !status.is_success() {
            return Err(api_error(status, &body));
        }
        Ok(true)
    }

    // ========== Workspaces, users, tasks ==========

    /// Lists the workspaces visible to the authenticated user.
    pub async fn get_workspaces(&self) -> Result<Vec<Workspace>, ApiError> {
        let url = self.url("workspaces.json");
        tracing::debug!(%url, "GET workspaces");
        self.fetch(self.http.get(&url)).await
    }

    /// Lists the users of a workspace.
    pub async fn get_workspace_users(
        &self,
        workspace_id: u64,
    ) -> Result<Vec<WorkspaceUser>, ApiError> {
        let url = self.url(&format!("workspaces/{workspace_id}/users.json"));
        tracing::debug!(%url, "GET workspace users");
        self.fetch(self.http.get(&url)).await
    }

    /// Lists all tasks.
    pub async fn get_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let url = self.url("tasks.json");
        tracing::debug!(%url, "GET tasks");
        self.fetch(self.http.get(&url)).await
    }
}

/// Decodes a `{"data": ...}` envelope into the inner value.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    #[derive(serde::Deserialize)]
    struct Envelope<T> {
        data: T,
    }

    serde_json::from_str::<Envelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|err| ApiError::InvalidResponse(err.to_string()))
}

fn api_error(status: StatusCode, body: &str) -> ApiError {
    let message = parse_error_message(body).unwrap_or_else(|| {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            status.to_string()
        } else {
            trimmed.chars().take(200).collect()
        }
    });
    ApiError::Api { status, message }
}

fn parse_error_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorPayload {
        error: ErrorDetails,
    }

    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum ErrorDetails {
        Structured { message: String },
        Plain(String),
    }

    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .map(|payload| match payload.error {
            ErrorDetails::Structured { message } | ErrorDetails::Plain(message) => message,
        })
}
