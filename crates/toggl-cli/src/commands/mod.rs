//! CLI subcommand implementations.

pub mod add;
pub mod clients;
pub mod edit;
pub mod ls;
pub mod now;
pub mod projects;
pub mod rm;
pub mod start;
pub mod stop;
pub mod tasks;
pub mod util;
pub mod web;
pub mod workspaces;
