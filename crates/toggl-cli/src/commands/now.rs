//! Now command: show the currently running time entry.

use std::io::Write;

use anyhow::Result;
use chrono::{Local, Utc};
use toggl_api::TogglApi;
use toggl_core::default_query_range;

use crate::commands::util::{self, EntryFormat};
use crate::{Config, NowArgs};

/// Runs the now command.
pub async fn run<W: Write>(
    writer: &mut W,
    api: &TogglApi,
    config: &Config,
    args: &NowArgs,
) -> Result<()> {
    let today = Local::now().date_naive();
    let entries = api.get_time_entries(Some(default_query_range(today))).await?;

    match util::find_running(&entries) {
        Some(entry) => {
            let format = EntryFormat {
                verbose: args.verbose_list,
                show_project: true,
                entry_datefmt: &config.entry_datefmt,
                style: util::duration_style(config),
            };
            writeln!(writer, "{}", util::format_entry(entry, Utc::now(), &format))?;
        }
        None => writeln!(writer, "You're not working on anything right now.")?,
    }

    Ok(())
}
