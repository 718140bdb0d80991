//! Start command: begin a running time entry.

use std::io::Write;

use anyhow::Result;
use chrono::{Local, Utc};
use toggl_api::{ProjectRef, TimeEntryData, TogglApi};
use toggl_core::{AliasTable, parse_local};

use crate::commands::util;
use crate::{Config, StartArgs};

/// Runs the start command. A running entry carries a negative duration until
/// it is stopped.
pub async fn run<W: Write>(
    writer: &mut W,
    api: &TogglApi,
    config: &Config,
    args: &StartArgs,
) -> Result<()> {
    let today = Local::now().date_naive();

    let start = match &args.time {
        Some(time) => parse_local(time, today)?,
        None => Utc::now(),
    };

    let mut data = TimeEntryData::new(args.msg.as_str(), start, -1);
    data.ignore_start_and_stop = config.ignore_start_times;

    if let Some(proj) = &args.proj {
        let projects = api.get_projects().await?;
        let aliases = AliasTable::new(config.aliases.clone());
        let project = util::find_project(&projects, &aliases, proj)?;
        data.project = Some(ProjectRef::from(project));
    }

    let entry = api.create_time_entry(&data).await?;
    writeln!(writer, "New entry started with id {}", entry.id)?;

    Ok(())
}
