//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Command-line client for the Toggl time-tracking service.
///
/// Talks to the REST API with the HTTP Basic credentials from the config
/// file and renders results as human-readable text.
#[derive(Debug, Parser)]
#[command(name = "toggl", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (logs requests and responses).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List time entries for a date range.
    Ls(LsArgs),

    /// Show the currently running time entry.
    Now(NowArgs),

    /// Add a completed time entry.
    Add(AddArgs),

    /// Start a new running time entry.
    Start(StartArgs),

    /// Stop the currently running time entry.
    Stop(StopArgs),

    /// Edit an existing time entry.
    Edit(EditArgs),

    /// Remove a time entry.
    Rm(RmArgs),

    /// Manage projects.
    Projects {
        #[command(subcommand)]
        action: ProjectsAction,
    },

    /// Manage clients.
    Clients {
        #[command(subcommand)]
        action: ClientsAction,
    },

    /// Inspect workspaces.
    Workspaces {
        #[command(subcommand)]
        action: WorkspacesAction,
    },

    /// Inspect tasks.
    Tasks {
        #[command(subcommand)]
        action: TasksAction,
    },

    /// Open the Toggl website in the configured browser.
    Web,
}

#[derive(Debug, Args)]
pub struct LsArgs {
    /// Start of the date range (defaults to Monday of this week).
    #[arg(short, long)]
    pub start: Option<String>,

    /// End of the date range (defaults to the end of today).
    #[arg(short, long)]
    pub end: Option<String>,

    /// Only show entries whose description matches this regex.
    #[arg(short, long)]
    pub grep: Option<String>,

    /// Group entries by project instead of by day.
    #[arg(short = 'p', long)]
    pub by_project: bool,

    /// Show entry ids and start/stop times.
    #[arg(long)]
    pub verbose_list: bool,

    /// Do not show entries, only group sums.
    #[arg(short, long)]
    pub quiet: bool,

    /// Show a grand total over the range.
    #[arg(short = 'S', long)]
    pub sum: bool,
}

#[derive(Debug, Args)]
pub struct NowArgs {
    /// Show entry ids and start/stop times.
    #[arg(long)]
    pub verbose_list: bool,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Entry description.
    #[arg(short, long)]
    pub msg: String,

    /// Project for the entry (name, id, or @alias).
    #[arg(short, long)]
    pub proj: Option<String>,

    /// Start time (defaults to now).
    #[arg(short, long)]
    pub start: Option<String>,

    /// End time (defaults to now).
    #[arg(short, long)]
    pub end: Option<String>,

    /// Duration as [[H:]M:]S (defaults to end minus start).
    #[arg(short, long)]
    pub duration: Option<String>,
}

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Entry description.
    #[arg(short, long)]
    pub msg: String,

    /// Project for the entry (name, id, or @alias).
    #[arg(short, long)]
    pub proj: Option<String>,

    /// Start time (defaults to now).
    #[arg(short, long)]
    pub time: Option<String>,
}

#[derive(Debug, Args)]
pub struct StopArgs {
    /// Stop time (defaults to now).
    #[arg(short, long)]
    pub time: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// The time entry id to edit.
    #[arg(short, long)]
    pub id: u64,

    /// New description.
    #[arg(short, long)]
    pub msg: Option<String>,

    /// New project (name, id, or @alias).
    #[arg(short, long)]
    pub proj: Option<String>,

    /// New start time.
    #[arg(short, long)]
    pub start: Option<String>,

    /// New end time.
    #[arg(short, long)]
    pub end: Option<String>,

    /// New duration as [[H:]M:]S.
    #[arg(short, long)]
    pub duration: Option<String>,

    /// Recalculate the duration from the start and stop times.
    #[arg(short = 'c', long)]
    pub calc_duration: bool,
}

#[derive(Debug, Args)]
pub struct RmArgs {
    /// The time entry id to remove.
    #[arg(short, long)]
    pub id: u64,
}

/// Project management actions.
#[derive(Debug, Subcommand)]
pub enum ProjectsAction {
    /// List projects.
    List {
        /// Include archived projects.
        #[arg(long)]
        show_archived: bool,

        /// Show project ids.
        #[arg(long)]
        verbose_list: bool,
    },

    /// Create a new project.
    Add {
        /// Project name.
        #[arg(short, long)]
        name: String,

        /// Workspace the project belongs to (name or id).
        #[arg(short, long)]
        workspace: String,

        /// Client the project is billed to (name or id).
        #[arg(short, long)]
        client: Option<String>,

        /// Mark the project billable.
        #[arg(short, long)]
        billable: bool,

        /// Estimated work hours.
        #[arg(short, long)]
        estimated_workhours: Option<i64>,

        /// Automatically calculate estimated work hours.
        #[arg(long)]
        auto_calc: bool,
    },

    /// Update an existing project.
    Update {
        /// Project to update (name, id, or @alias).
        project: String,

        /// New name.
        #[arg(short, long)]
        name: Option<String>,

        /// New billable value.
        #[arg(short, long)]
        billable: Option<bool>,

        /// New estimated work hours.
        #[arg(short, long)]
        estimated_workhours: Option<i64>,

        /// New auto-calculation setting.
        #[arg(long)]
        auto_calc: Option<bool>,

        /// New workspace (name or id).
        #[arg(short, long)]
        workspace: Option<String>,

        /// New client (name or id).
        #[arg(short, long)]
        client: Option<String>,
    },

    /// Archive projects by id.
    Archive {
        /// Project ids to archive.
        #[arg(required = true)]
        ids: Vec<u64>,
    },

    /// Reopen archived projects by id.
    Reopen {
        /// Project ids to reopen.
        #[arg(required = true)]
        ids: Vec<u64>,
    },
}

/// Client management actions.
#[derive(Debug, Subcommand)]
pub enum ClientsAction {
    /// List clients.
    List {
        /// Show client ids.
        #[arg(long)]
        verbose_list: bool,
    },

    /// Create a new client.
    Add {
        /// Client name.
        #[arg(short, long)]
        name: String,

        /// Hourly rate.
        #[arg(short, long)]
        rate: Option<f64>,

        /// Billing currency.
        #[arg(short, long)]
        currency: Option<String>,

        /// Workspace the client belongs to (name or id).
        #[arg(short, long)]
        workspace: Option<String>,
    },

    /// Update an existing client.
    Update {
        /// Client to update (name or id).
        client: String,

        /// New name.
        #[arg(short, long)]
        name: Option<String>,

        /// New hourly rate.
        #[arg(short, long)]
        rate: Option<f64>,

        /// New billing currency.
        #[arg(short, long)]
        currency: Option<String>,

        /// New workspace (name or id).
        #[arg(short, long)]
        workspace: Option<String>,
    },

    /// Delete a client.
    Rm {
        /// The client id to delete.
        #[arg(short, long)]
        id: u64,
    },
}

/// Workspace actions.
#[derive(Debug, Subcommand)]
pub enum WorkspacesAction {
    /// List workspaces.
    List {
        /// Show workspace ids.
        #[arg(long)]
        verbose_list: bool,
    },

    /// List the users of a workspace.
    Users {
        /// The workspace id.
        #[arg(short, long)]
        id: u64,
    },
}

/// Task actions.
#[derive(Debug, Subcommand)]
pub enum TasksAction {
    /// List tasks.
    List,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_ls_with_range_and_filters() {
        let cli = Cli::try_parse_from([
            "toggl", "ls", "-s", "2025-03-03", "-e", "2025-03-05", "-g", "report", "-p", "-S",
        ])
        .unwrap();
        let Some(Commands::Ls(args)) = cli.command else {
            panic!("expected ls");
        };
        assert_eq!(args.start.as_deref(), Some("2025-03-03"));
        assert_eq!(args.end.as_deref(), Some("2025-03-05"));
        assert_eq!(args.grep.as_deref(), Some("report"));
        assert!(args.by_project);
        assert!(args.sum);
        assert!(!args.quiet);
    }

    #[test]
    fn parses_add_with_project_alias() {
        let cli =
            Cli::try_parse_from(["toggl", "add", "-m", "standup", "-p", "@web", "-d", "0:15:00"])
                .unwrap();
        let Some(Commands::Add(args)) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.msg, "standup");
        assert_eq!(args.proj.as_deref(), Some("@web"));
        assert_eq!(args.duration.as_deref(), Some("0:15:00"));
    }

    #[test]
    fn add_requires_message() {
        assert!(Cli::try_parse_from(["toggl", "add"]).is_err());
    }

    #[test]
    fn parses_nested_project_actions() {
        let cli = Cli::try_parse_from([
            "toggl",
            "projects",
            "add",
            "-n",
            "Website",
            "-w",
            "Acme",
            "--billable",
        ])
        .unwrap();
        let Some(Commands::Projects {
            action:
                ProjectsAction::Add {
                    name,
                    workspace,
                    billable,
                    ..
                },
        }) = cli.command
        else {
            panic!("expected projects add");
        };
        assert_eq!(name, "Website");
        assert_eq!(workspace, "Acme");
        assert!(billable);
    }

    #[test]
    fn archive_requires_at_least_one_id() {
        assert!(Cli::try_parse_from(["toggl", "projects", "archive"]).is_err());
        let cli = Cli::try_parse_from(["toggl", "projects", "archive", "1", "2"]).unwrap();
        let Some(Commands::Projects {
            action: ProjectsAction::Archive { ids },
        }) = cli.command
        else {
            panic!("expected archive");
        };
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn verbose_flag_is_global() {
        let cli = Cli::try_parse_from(["toggl", "now", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn update_billable_takes_explicit_value() {
        let cli =
            Cli::try_parse_from(["toggl", "projects", "update", "7", "--billable", "false"])
                .unwrap();
        let Some(Commands::Projects {
            action: ProjectsAction::Update {
                project, billable, ..
            },
        }) = cli.command
        else {
            panic!("expected projects update");
        };
        assert_eq!(project, "7");
        assert_eq!(billable, Some(false));
    }
}
