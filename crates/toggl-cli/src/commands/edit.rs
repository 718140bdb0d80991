//! Edit command: patch fields of an existing time entry.

use std::io::Write;

use anyhow::{Context, Result, bail};
use chrono::Local;
use toggl_api::{ProjectRef, TogglApi};
use toggl_core::{AliasTable, parse_duration, parse_local};

use crate::commands::util;
use crate::{Config, EditArgs};

/// Runs the edit command. Unspecified fields keep their current values.
pub async fn run<W: Write>(
    writer: &mut W,
    api: &TogglApi,
    config: &Config,
    args: &EditArgs,
) -> Result<()> {
    let Some(entry) = api.get_time_entry(args.id).await? else {
        bail!("entry {} not found", args.id);
    };

    let today = Local::now().date_naive();
    let mut data = entry.to_data();

    if let Some(msg) = &args.msg {
        data.description = msg.clone();
    }
    if let Some(start) = &args.start {
        data.start = parse_local(start, today)?;
    }
    if let Some(end) = &args.end {
        data.stop = Some(parse_local(end, today)?);
    }
    if let Some(duration) = &args.duration {
        data.duration = parse_duration(duration)?;
    }
    if args.calc_duration {
        let stop = data
            .stop
            .context("cannot calculate duration without a stop time")?;
        data.duration = (stop - data.start).num_seconds().max(0);
    }

    if let Some(proj) = &args.proj {
        let projects = api.get_projects().await?;
        let aliases = AliasTable::new(config.aliases.clone());
        let project = util::find_project(&projects, &aliases, proj)?;
        data.project = Some(ProjectRef::from(project));
    }

    let Some(updated) = api.update_time_entry(args.id, &data).await? else {
        bail!("entry {} disappeared during the update", args.id);
    };

    writeln!(writer, "Updated entry {}", updated.id)?;

    Ok(())
}
