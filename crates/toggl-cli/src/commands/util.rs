//! Shared lookup and rendering helpers for subcommands.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use toggl_api::{Client, Project, TimeEntry, Workspace};
use toggl_core::{AliasTable, DurationStyle, elapsed, entry_seconds};

use crate::Config;

/// How to render a single time entry.
pub struct EntryFormat<'a> {
    /// Include the entry id and start/stop times.
    pub verbose: bool,
    /// Show the project name; when grouping by project, the start date is
    /// shown instead.
    pub show_project: bool,
    /// strftime format for start/stop times.
    pub entry_datefmt: &'a str,
    pub style: DurationStyle,
}

/// Renders one time entry as a display line.
///
/// Running entries are marked with `*` and accrue duration up to `now`.
pub fn format_entry(entry: &TimeEntry, now: DateTime<Utc>, format: &EntryFormat<'_>) -> String {
    let running = if entry.is_running() { "* " } else { "" };
    let seconds = entry_seconds(entry.duration, entry.start, now);
    let duration = elapsed(seconds, format.style, "");

    let label = match (&entry.project, format.show_project) {
        (None, _) => " (No Project)".to_string(),
        (Some(project), true) => format!(" @{}", project.name),
        (Some(_), false) => format!(" {}", entry.start.with_timezone(&Local).date_naive()),
    };

    if format.verbose {
        let start = entry
            .start
            .with_timezone(&Local)
            .format(format.entry_datefmt);
        let stop = entry.stop.map_or_else(String::new, |stop| {
            stop.with_timezone(&Local)
                .format(format.entry_datefmt)
                .to_string()
        });
        format!(
            "[{}] {running}{}{label} {duration} ({start} - {stop})",
            entry.id, entry.description
        )
    } else {
        format!("{running}{}{label} {duration}", entry.description)
    }
}

/// The duration unit scheme selected by the configuration.
pub const fn duration_style(config: &Config) -> DurationStyle {
    if config.use_mandays {
        DurationStyle::Mandays
    } else {
        DurationStyle::Standard
    }
}

/// Finds the currently running entry, if any.
pub fn find_running(entries: &[TimeEntry]) -> Option<&TimeEntry> {
    entries.iter().find(|entry| entry.is_running())
}

/// Finds a project by exact id, alias, or unique name prefix.
pub fn find_project<'a>(
    projects: &'a [Project],
    aliases: &AliasTable,
    needle: &str,
) -> Result<&'a Project> {
    let resolved = aliases.resolve(needle);
    projects
        .iter()
        .find(|project| project.id.to_string() == resolved || project.name.starts_with(resolved))
        .with_context(|| format!("no project matching '{needle}'"))
}

/// Finds a workspace by exact id or name prefix.
pub fn find_workspace<'a>(workspaces: &'a [Workspace], needle: &str) -> Result<&'a Workspace> {
    workspaces
        .iter()
        .find(|workspace| {
            workspace.id.to_string() == needle || workspace.name.starts_with(needle)
        })
        .with_context(|| format!("no workspace matching '{needle}'"))
}

/// Finds a client by exact id or name prefix.
pub fn find_client<'a>(clients: &'a [Client], needle: &str) -> Result<&'a Client> {
    clients
        .iter()
        .find(|client| client.id.to_string() == needle || client.name.starts_with(needle))
        .with_context(|| format!("no client matching '{needle}'"))
}
