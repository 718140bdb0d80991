//! Workspaces command: list workspaces and their members.

use std::io::Write;

use anyhow::Result;
use toggl_api::{TogglApi, Workspace, WorkspaceUser};

use crate::WorkspacesAction;

/// Runs a workspaces subcommand.
pub async fn run<W: Write>(
    writer: &mut W,
    api: &TogglApi,
    action: &WorkspacesAction,
) -> Result<()> {
    match action {
        WorkspacesAction::List { verbose_list } => {
            let workspaces = api.get_workspaces().await?;
            write!(writer, "{}", render_list(&workspaces, *verbose_list))?;
        }
        WorkspacesAction::Users { id } => {
            let users = api.get_workspace_users(*id).await?;
            write!(writer, "{}", render_users(&users))?;
        }
    }

    Ok(())
}

/// Renders the workspace list with profile and admin details.
pub fn render_list(workspaces: &[Workspace], verbose: bool) -> String {
    let mut output = String::new();
    for workspace in workspaces {
        let id_part = if verbose {
            format!("[{}] ", workspace.id)
        } else {
            String::new()
        };
        let profile = workspace.profile_name.as_deref().unwrap_or("-");
        let admin = if workspace.is_admin { "yes" } else { "no" };
        output.push_str(&format!(
            "* {id_part}{} [Profile: ({profile}) Admin: ({admin})]\n",
            workspace.name
        ));
    }
    output
}

/// Renders a workspace member list.
pub fn render_users(users: &[WorkspaceUser]) -> String {
    let mut output = String::new();
    for user in users {
        output.push_str(&format!("* {} <{}>\n", user.fullname, user.email));
    }
    output.push_str(&format!("Total users: {}\n", users.len()));
    output
}
