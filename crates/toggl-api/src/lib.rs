//! Toggl REST API integration for the time-tracking CLI.
//!
//! Wraps the fixed set of v6 resource endpoints (time entries, projects,
//! clients, workspaces, tasks, users) behind typed methods. Authentication
//! is HTTP Basic; all payloads are JSON with the service's `{"data": ...}`
//! response envelope.

mod client;
mod models;

pub use client::{ApiError, TogglApi};
pub use models::{
    Client, ClientData, ClientRef, Project, ProjectData, ProjectRef, Task, TimeEntry,
    TimeEntryData, Workspace, WorkspaceRef, WorkspaceUser,
};
