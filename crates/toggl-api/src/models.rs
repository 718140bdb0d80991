//! Typed resource representations for the v6 wire format.
//!
//! Incoming resources deserialize leniently: fields the service may omit are
//! optional or defaulted. Outgoing payloads are separate structs that
//! serialize only the fields being sent, since the service rejects unknown
//! nulls on some endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client name reported to the service on created entries.
pub(crate) const CREATED_WITH: &str = "toggl-cli";

fn default_true() -> bool {
    true
}

// ========== Incoming resources ==========

/// A workspace: the account/organization scope owning projects and clients.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Workspace {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub profile_name: Option<String>,
    #[serde(default, rename = "current_user_is_admin")]
    pub is_admin: bool,
}

/// A member of a workspace.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkspaceUser {
    pub fullname: String,
    pub email: String,
}

/// A billing client scoped to a workspace.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Client {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub workspace: Option<Workspace>,
}

/// A project that time entries can be booked against.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub billable: Option<bool>,
    #[serde(default)]
    pub estimated_workhours: Option<i64>,
    #[serde(default)]
    pub workspace: Option<Workspace>,
    #[serde(default)]
    pub client: Option<Client>,
}

/// A task scoped to a workspace, optionally tied to a project.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub project: Option<Project>,
    #[serde(default)]
    pub workspace: Option<Workspace>,
    #[serde(default)]
    pub estimated_seconds: Option<i64>,
}

/// A time entry. A negative `duration` marks a currently running entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeEntry {
    pub id: u64,
    #[serde(default)]
    pub description: String,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub stop: Option<DateTime<Utc>>,
    pub duration: i64,
    #[serde(default)]
    pub billable: bool,
    #[serde(default)]
    pub project: Option<Project>,
}

impl TimeEntry {
    /// Returns true while the entry is still running.
    pub const fn is_running(&self) -> bool {
        self.duration < 0
    }

    /// Builds an update payload carrying this entry's current state.
    pub fn to_data(&self) -> TimeEntryData {
        TimeEntryData {
            description: self.description.clone(),
            start: self.start,
            stop: self.stop,
            duration: self.duration,
            billable: self.billable,
            ignore_start_and_stop: false,
            project: self.project.as_ref().map(ProjectRef::from),
            created_with: CREATED_WITH,
        }
    }
}

// ========== Outgoing payloads ==========

/// Minimal project reference embedded in outgoing payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRef {
    pub id: u64,
    pub name: String,
}

impl From<&Project> for ProjectRef {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
        }
    }
}

/// Minimal workspace reference embedded in outgoing payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkspaceRef {
    pub id: u64,
    pub name: String,
}

impl From<&Workspace> for WorkspaceRef {
    fn from(workspace: &Workspace) -> Self {
        Self {
            id: workspace.id,
            name: workspace.name.clone(),
        }
    }
}

/// Minimal client reference embedded in outgoing payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientRef {
    pub id: u64,
    pub name: String,
}

impl From<&Client> for ClientRef {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id,
            name: client.name.clone(),
        }
    }
}

/// Outgoing time entry body, for both creation and updates.
#[derive(Debug, Clone, Serialize)]
pub struct TimeEntryData {
    pub description: String,
    pub start: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<DateTime<Utc>>,
    pub duration: i64,
    pub billable: bool,
    pub ignore_start_and_stop: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectRef>,
    pub(crate) created_with: &'static str,
}

impl TimeEntryData {
    /// Starts a payload with the required fields; the rest default off.
    pub fn new(description: impl Into<String>, start: DateTime<Utc>, duration: i64) -> Self {
        Self {
            description: description.into(),
            start,
            stop: None,
            duration,
            billable: false,
            ignore_start_and_stop: false,
            project: None,
            created_with: CREATED_WITH,
        }
    }
}

/// Outgoing project body. Only the fields present are sent, so the same
/// struct serves creation and partial updates (including archive/reopen,
/// which flip `is_active` alone).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_workhours: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocalc_estimated_workhours: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<WorkspaceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientRef>,
}

/// Outgoing client body for creation and partial updates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClientData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<WorkspaceRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn time_entry_deserializes_completed_entry() {
        let payload = json!({
            "id": 42,
            "description": "write report",
            "start": "2025-03-03T09:00:00+00:00",
            "stop": "2025-03-03T10:30:00+00:00",
            "duration": 5400,
            "billable": false,
            "project": {"id": 7, "name": "Internal"}
        });

        let entry: TimeEntry = serde_json::from_value(payload).unwrap();
        assert_eq!(entry.id, 42);
        assert_eq!(entry.description, "write report");
        assert_eq!(entry.duration, 5400);
        assert!(!entry.is_running());
        assert_eq!(
            entry.start,
            Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap()
        );
        assert_eq!(entry.project.unwrap().name, "Internal");
    }

    #[test]
    fn time_entry_deserializes_running_entry_without_stop() {
        let payload = json!({
            "id": 43,
            "description": "standup",
            "start": "2025-03-03T09:00:00+00:00",
            "duration": -1
        });

        let entry: TimeEntry = serde_json::from_value(payload).unwrap();
        assert!(entry.is_running());
        assert!(entry.stop.is_none());
        assert!(entry.project.is_none());
    }

    #[test]
    fn time_entry_accepts_non_utc_offsets() {
        let payload = json!({
            "id": 44,
            "description": "",
            "start": "2025-03-03T11:00:00+02:00",
            "duration": 60
        });

        let entry: TimeEntry = serde_json::from_value(payload).unwrap();
        assert_eq!(
            entry.start,
            Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap()
        );
    }

    #[test]
    fn project_defaults_to_active() {
        let project: Project = serde_json::from_value(json!({"id": 1, "name": "X"})).unwrap();
        assert!(project.is_active);

        let archived: Project =
            serde_json::from_value(json!({"id": 2, "name": "Y", "is_active": false})).unwrap();
        assert!(!archived.is_active);
    }

    #[test]
    fn workspace_admin_flag_maps_wire_name() {
        let payload = json!({
            "id": 10,
            "name": "Acme",
            "profile_name": "Pro",
            "current_user_is_admin": true
        });
        let workspace: Workspace = serde_json::from_value(payload).unwrap();
        assert!(workspace.is_admin);
        assert_eq!(workspace.profile_name.as_deref(), Some("Pro"));
    }

    #[test]
    fn client_tolerates_missing_billing_fields() {
        let client: Client = serde_json::from_value(json!({"id": 3, "name": "Corp"})).unwrap();
        assert!(client.hourly_rate.is_none());
        assert!(client.currency.is_none());
        assert!(client.workspace.is_none());
    }

    #[test]
    fn task_carries_project_association() {
        let payload = json!({
            "id": 5,
            "name": "review",
            "project": {"id": 7, "name": "Internal"},
            "estimated_seconds": 3600
        });
        let task: Task = serde_json::from_value(payload).unwrap();
        assert_eq!(task.project.unwrap().id, 7);
        assert_eq!(task.estimated_seconds, Some(3600));
    }

    #[test]
    fn time_entry_data_omits_unset_stop_and_project() {
        let start = Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap();
        let data = TimeEntryData::new("standup", start, -1);

        let value = serde_json::to_value(&data).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("stop"));
        assert!(!object.contains_key("project"));
        assert_eq!(object["created_with"], "toggl-cli");
        assert_eq!(object["duration"], -1);
    }

    #[test]
    fn time_entry_data_includes_project_ref_when_set() {
        let start = Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap();
        let mut data = TimeEntryData::new("work", start, 3600);
        data.project = Some(ProjectRef {
            id: 7,
            name: "Internal".to_string(),
        });

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["project"]["id"], 7);
        assert_eq!(value["project"]["name"], "Internal");
    }

    #[test]
    fn entry_to_data_round_trips_fields() {
        let entry: TimeEntry = serde_json::from_value(json!({
            "id": 42,
            "description": "write report",
            "start": "2025-03-03T09:00:00+00:00",
            "stop": "2025-03-03T10:30:00+00:00",
            "duration": 5400,
            "project": {"id": 7, "name": "Internal"}
        }))
        .unwrap();

        let data = entry.to_data();
        assert_eq!(data.description, "write report");
        assert_eq!(data.duration, 5400);
        assert_eq!(data.stop, entry.stop);
        assert_eq!(data.project.unwrap().id, 7);
    }

    #[test]
    fn project_patch_serializes_only_present_fields() {
        let patch = ProjectData {
            is_active: Some(false),
            ..ProjectData::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            value.as_object().unwrap().keys().collect::<Vec<_>>(),
            vec!["is_active"]
        );
    }
}
