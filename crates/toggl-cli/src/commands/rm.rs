//! Rm command: delete a time entry.

use std::io::Write;

use anyhow::{Result, bail};
use toggl_api::TogglApi;

use crate::RmArgs;

/// Runs the rm command.
pub async fn run<W: Write>(writer: &mut W, api: &TogglApi, args: &RmArgs) -> Result<()> {
    if !api.delete_time_entry(args.id).await? {
        bail!("entry {} does not exist", args.id);
    }
    writeln!(writer, "Deleted entry {}", args.id)?;

    Ok(())
}
