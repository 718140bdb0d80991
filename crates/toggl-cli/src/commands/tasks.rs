//! Tasks command: list tasks with their project and estimate.

use std::io::Write;

use anyhow::Result;
use toggl_api::{Task, TogglApi};
use toggl_core::{DurationStyle, elapsed};

use crate::commands::util;
use crate::{Config, TasksAction};

/// Runs a tasks subcommand.
pub async fn run<W: Write>(
    writer: &mut W,
    api: &TogglApi,
    config: &Config,
    action: &TasksAction,
) -> Result<()> {
    match action {
        TasksAction::List => {
            let tasks = api.get_tasks().await?;
            write!(
                writer,
                "{}",
                render_list(&tasks, util::duration_style(config))
            )?;
        }
    }

    Ok(())
}

/// Renders the task list with project association and time estimate.
pub fn render_list(tasks: &[Task], style: DurationStyle) -> String {
    let mut output = String::new();
    for task in tasks {
        let project = task
            .project
            .as_ref()
            .map_or_else(|| "(No Project)".to_string(), |p| format!("@{}", p.name));
        match task.estimated_seconds {
            Some(seconds) => output.push_str(&format!(
                "* {} {project} [Estimated: {}]\n",
                task.name,
                elapsed(seconds, style, " ")
            )),
            None => output.push_str(&format!("* {} {project}\n", task.name)),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use toggl_api::Project;

    fn task(name: &str, project: Option<&str>, estimated_seconds: Option<i64>) -> Task {
        Task {
            id: 5,
            name: name.to_string(),
            project: project.map(|name| Project {
                id: 7,
                name: name.to_string(),
                is_active: true,
                billable: None,
                estimated_workhours: None,
                workspace: None,
                client: None,
            }),
            workspace: None,
            estimated_seconds,
        }
    }

    #[test]
    fn render_list_shows_project_and_estimate() {
        let tasks = vec![task("review", Some("Internal"), Some(5400))];
        insta::assert_snapshot!(
            render_list(&tasks, DurationStyle::Standard),
            @"* review @Internal [Estimated: 1h 30m]"
        );
    }

    #[test]
    fn render_list_handles_missing_fields() {
        let tasks = vec![task("triage", None, None)];
        insta::assert_snapshot!(
            render_list(&tasks, DurationStyle::Standard),
            @"* triage (No Project)"
        );
    }
}
