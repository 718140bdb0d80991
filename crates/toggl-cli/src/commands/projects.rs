//! Projects command: list, create, update, archive, and reopen projects.

use std::io::Write;

use anyhow::{Context, Result};
use toggl_api::{ClientRef, Project, ProjectData, TogglApi, WorkspaceRef};
use toggl_core::AliasTable;

use crate::commands::util;
use crate::{Config, ProjectsAction};

/// Runs a projects subcommand.
pub async fn run<W: Write>(
    writer: &mut W,
    api: &TogglApi,
    config: &Config,
    action: &ProjectsAction,
) -> Result<()> {
    match action {
        ProjectsAction::List {
            show_archived,
            verbose_list,
        } => {
            let projects = api.get_projects().await?;
            let aliases = AliasTable::new(config.aliases.clone());
            let show_archived = *show_archived || config.show_archived_projects;
            let output = render_list(&projects, &aliases, show_archived, *verbose_list);
            write!(writer, "{output}")?;
        }

        ProjectsAction::Add {
            name,
            workspace,
            client,
            billable,
            estimated_workhours,
            auto_calc,
        } => {
            let workspaces = api.get_workspaces().await?;
            let workspace = util::find_workspace(&workspaces, workspace)?;

            let client = match client {
                Some(needle) => {
                    let clients = api.get_clients().await?;
                    Some(ClientRef::from(util::find_client(&clients, needle)?))
                }
                None => None,
            };

            let data = ProjectData {
                name: Some(name.clone()),
                billable: Some(*billable),
                estimated_workhours: *estimated_workhours,
                autocalc_estimated_workhours: Some(*auto_calc),
                is_active: None,
                workspace: Some(WorkspaceRef::from(workspace)),
                client,
            };
            let project = api.create_project(&data).await?;
            writeln!(
                writer,
                "Created project '{}' with id {}",
                project.name, project.id
            )?;
        }

        ProjectsAction::Update {
            project,
            name,
            billable,
            estimated_workhours,
            auto_calc,
            workspace,
            client,
        } => {
            let projects = api.get_projects().await?;
            let aliases = AliasTable::new(config.aliases.clone());
            let target = util::find_project(&projects, &aliases, project)?;

            let workspace = match workspace {
                Some(needle) => {
                    let workspaces = api.get_workspaces().await?;
                    Some(WorkspaceRef::from(util::find_workspace(
                        &workspaces,
                        needle,
                    )?))
                }
                None => None,
            };
            let client = match client {
                Some(needle) => {
                    let clients = api.get_clients().await?;
                    Some(ClientRef::from(util::find_client(&clients, needle)?))
                }
                None => None,
            };

            let data = ProjectData {
                name: name.clone(),
                billable: *billable,
                estimated_workhours: *estimated_workhours,
                autocalc_estimated_workhours: *auto_calc,
                is_active: None,
                workspace,
                client,
            };
            let updated = api
                .update_project(target.id, &data)
                .await?
                .with_context(|| format!("project {} disappeared during the update", target.id))?;
            writeln!(writer, "Updated project '{}'", updated.name)?;
        }

        ProjectsAction::Archive { ids } => set_active(writer, api, ids, false).await?,
        ProjectsAction::Reopen { ids } => set_active(writer, api, ids, true).await?,
    }

    Ok(())
}

async fn set_active<W: Write>(
    writer: &mut W,
    api: &TogglApi,
    ids: &[u64],
    active: bool,
) -> Result<()> {
    let verb = if active { "Reopened" } else { "Archived" };
    for &id in ids {
        match api.set_project_active(id, active).await? {
            Some(project) => writeln!(writer, "{verb} project '{}'", project.name)?,
            None => writeln!(writer, "Project {id} not found")?,
        }
    }
    Ok(())
}

/// Renders the project list. Active projects get a `*` marker, archived a
/// `-`; aliased projects show their alias.
pub fn render_list(
    projects: &[Project],
    aliases: &AliasTable,
    show_archived: bool,
    verbose: bool,
) -> String {
    let mut output = String::new();
    for project in projects {
        if !project.is_active && !show_archived {
            continue;
        }
        let marker = if project.is_active { '*' } else { '-' };
        let id_part = if verbose {
            format!("[{}] ", project.id)
        } else {
            String::new()
        };
        let alias_part = aliases
            .alias_for(&project.name)
            .map_or_else(String::new, |alias| format!("(@{alias})"));
        output.push_str(&format!(
            "{marker} {id_part}{alias_part:<10} {}\n",
            project.name
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn project(id: u64, name: &str, is_active: bool) -> Project {
        Project {
            id,
            name: name.to_string(),
            is_active,
            billable: None,
            estimated_workhours: None,
            workspace: None,
            client: None,
        }
    }

    #[test]
    fn render_list_hides_archived_by_default() {
        let projects = vec![project(7, "Internal", true), project(8, "Old", false)];
        let aliases = AliasTable::new(HashMap::new());

        let output = render_list(&projects, &aliases, false, false);
        assert!(output.contains("Internal"));
        assert!(!output.contains("Old"));

        let output = render_list(&projects, &aliases, true, false);
        assert!(output.contains("* "));
        assert!(output.contains("- "));
        assert!(output.contains("Old"));
    }

    #[test]
    fn render_list_shows_ids_when_verbose() {
        let projects = vec![project(7, "Internal", true)];
        let aliases = AliasTable::new(HashMap::new());

        let output = render_list(&projects, &aliases, false, true);
        assert!(output.contains("[7] "));
    }

    #[test]
    fn render_list_shows_aliases() {
        let projects = vec![project(8, "Website redesign", true)];
        let aliases = AliasTable::new(HashMap::from([(
            "web".to_string(),
            "Website redesign".to_string(),
        )]));

        let output = render_list(&projects, &aliases, false, false);
        assert!(output.contains("(@web)"));
        assert!(output.contains("Website redesign"));
    }
}
