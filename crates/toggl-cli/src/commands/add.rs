//! Add command: create a completed time entry.

use std::io::Write;

use anyhow::Result;
use chrono::{Local, Utc};
use toggl_api::{ProjectRef, TimeEntryData, TogglApi};
use toggl_core::{AliasTable, parse_duration, parse_local};

use crate::commands::util;
use crate::{AddArgs, Config};

/// Runs the add command.
pub async fn run<W: Write>(
    writer: &mut W,
    api: &TogglApi,
    config: &Config,
    args: &AddArgs,
) -> Result<()> {
    let today = Local::now().date_naive();

    let start = match &args.start {
        Some(start) => parse_local(start, today)?,
        None => Utc::now(),
    };
    let stop = match &args.end {
        Some(end) => parse_local(end, today)?,
        None => Utc::now(),
    };
    let duration = match &args.duration {
        Some(duration) => parse_duration(duration)?,
        None => (stop - start).num_seconds().max(0),
    };

    let mut data = TimeEntryData::new(args.msg.as_str(), start, duration);
    data.stop = Some(stop);
    data.ignore_start_and_stop = config.ignore_start_times;

    if let Some(proj) = &args.proj {
        let projects = api.get_projects().await?;
        let aliases = AliasTable::new(config.aliases.clone());
        let project = util::find_project(&projects, &aliases, proj)?;
        data.project = Some(ProjectRef::from(project));
    }

    let entry = api.create_time_entry(&data).await?;
    writeln!(writer, "New entry added with id {}", entry.id)?;

    Ok(())
}
