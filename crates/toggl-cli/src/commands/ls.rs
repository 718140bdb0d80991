//! Ls command: list time entries bucketed by day or by project.
//!
//! Entries come back from the service in UTC; bucketing happens on the
//! local calendar day of each entry's start time.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, Utc};
use regex::Regex;
use toggl_api::{TimeEntry, TogglApi};
use toggl_core::{DurationStyle, default_query_range, elapsed, entry_seconds, parse_local};

use crate::commands::util::{self, EntryFormat};
use crate::{Config, LsArgs};

/// Rendering options for a listing.
pub struct LsView<'a> {
    pub datefmt: &'a str,
    pub entry_datefmt: &'a str,
    pub style: DurationStyle,
    pub verbose: bool,
    pub quiet: bool,
    pub sum: bool,
}

/// Runs the ls command.
pub async fn run<W: Write>(
    writer: &mut W,
    api: &TogglApi,
    config: &Config,
    args: &LsArgs,
) -> Result<()> {
    let today = Local::now().date_naive();
    let (default_start, default_end) = default_query_range(today);

    let start = match &args.start {
        Some(start) => parse_local(start, today)?,
        None => default_start,
    };
    let end = match &args.end {
        Some(end) => parse_local(end, today)?,
        None => default_end,
    };

    let mut entries = api.get_time_entries(Some((start, end))).await?;

    if let Some(pattern) = &args.grep {
        let regex = Regex::new(pattern).with_context(|| format!("invalid regex '{pattern}'"))?;
        entries.retain(|entry| regex.is_match(&entry.description));
    }

    let view = LsView {
        datefmt: &config.datefmt,
        entry_datefmt: &config.entry_datefmt,
        style: util::duration_style(config),
        verbose: args.verbose_list,
        quiet: args.quiet,
        sum: args.sum,
    };

    let output = if args.by_project {
        render_by_project(&entries, Utc::now(), &view)
    } else {
        render_by_day(&entries, Utc::now(), &view)
    };
    write!(writer, "{output}")?;

    Ok(())
}

/// Renders entries bucketed by local calendar day, oldest first.
pub fn render_by_day(entries: &[TimeEntry], now: DateTime<Utc>, view: &LsView<'_>) -> String {
    let mut days: BTreeMap<NaiveDate, Vec<&TimeEntry>> = BTreeMap::new();
    for entry in entries {
        let day = entry.start.with_timezone(&Local).date_naive();
        days.entry(day).or_default().push(entry);
    }

    let format = EntryFormat {
        verbose: view.verbose,
        show_project: true,
        entry_datefmt: view.entry_datefmt,
        style: view.style,
    };

    let mut output = String::new();
    let mut total = 0_i64;
    for (day, day_entries) in &days {
        writeln!(output, "{}", day.format(view.datefmt)).unwrap();

        let mut subtotal = 0_i64;
        for entry in day_entries {
            subtotal += entry_seconds(entry.duration, entry.start, now);
            if !view.quiet {
                writeln!(output, "   {}", util::format_entry(entry, now, &format)).unwrap();
            }
        }
        writeln!(output, "   ({})", elapsed(subtotal, view.style, " ")).unwrap();
        total += subtotal;
    }

    if view.sum {
        writeln!(output, "Total time: {}", elapsed(total, view.style, " ")).unwrap();
    }
    output
}

/// Renders entries bucketed by project name. Entries without a project fall
/// into a "(No Project)" bucket, which sorts first.
pub fn render_by_project(entries: &[TimeEntry], now: DateTime<Utc>, view: &LsView<'_>) -> String {
    let mut projects: BTreeMap<String, Vec<&TimeEntry>> = BTreeMap::new();
    for entry in entries {
        let name = entry
            .project
            .as_ref()
            .map_or_else(|| "(No Project)".to_string(), |p| format!("@{}", p.name));
        projects.entry(name).or_default().push(entry);
    }

    let format = EntryFormat {
        verbose: view.verbose,
        show_project: false,
        entry_datefmt: view.entry_datefmt,
        style: view.style,
    };

    let mut output = String::new();
    let mut total = 0_i64;
    for (name, project_entries) in &projects {
        writeln!(output, "{name}").unwrap();

        let mut subtotal = 0_i64;
        for entry in project_entries {
            subtotal += entry_seconds(entry.duration, entry.start, now);
            if !view.quiet {
                writeln!(output, "   {}", util::format_entry(entry, now, &format)).unwrap();
            }
        }
        writeln!(output, "   ({})", elapsed(subtotal, view.style, " ")).unwrap();
        total += subtotal;
    }

    if view.sum {
        writeln!(output, "Total time: {}", elapsed(total, view.style, " ")).unwrap();
    }
    output
}
