//! Toggl CLI library.
//!
//! This crate provides the command-line interface for the Toggl client.

mod cli;
pub mod commands;
mod config;

pub use cli::{
    AddArgs, Cli, ClientsAction, Commands, EditArgs, LsArgs, NowArgs, ProjectsAction, RmArgs,
    StartArgs, StopArgs, TasksAction, WorkspacesAction,
};
pub use config::{Config, default_config_path};
