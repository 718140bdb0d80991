//! Stop command: finish the currently running time entry.

use std::io::Write;

use anyhow::{Context, Result, bail};
use chrono::{Local, Utc};
use toggl_api::TogglApi;
use toggl_core::{default_query_range, elapsed, parse_local};

use crate::commands::util;
use crate::{Config, StopArgs};

/// Runs the stop command.
pub async fn run<W: Write>(
    writer: &mut W,
    api: &TogglApi,
    config: &Config,
    args: &StopArgs,
) -> Result<()> {
    let today = Local::now().date_naive();
    let entries = api.get_time_entries(Some(default_query_range(today))).await?;

    let Some(entry) = util::find_running(&entries) else {
        bail!("you're not working on anything right now");
    };

    let stop = match &args.time {
        Some(time) => parse_local(time, today)?,
        None => Utc::now(),
    };
    let duration = (stop - entry.start).num_seconds().max(0);

    let mut data = entry.to_data();
    data.stop = Some(stop);
    data.duration = duration;

    api.update_time_entry(entry.id, &data)
        .await?
        .with_context(|| format!("entry {} disappeared before it could be stopped", entry.id))?;

    writeln!(
        writer,
        "Stopped '{}' ({})",
        entry.description,
        elapsed(duration, util::duration_style(config), " ")
    )?;

    Ok(())
}
