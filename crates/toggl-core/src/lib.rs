//! Core domain logic for the Toggl client.
//!
//! This crate contains the pure pieces of the CLI:
//! - Duration parsing and human-readable elapsed-time formatting
//! - Local-timezone normalization of user-supplied times and query ranges
//! - Project alias resolution

mod alias;
mod duration;
mod localtime;

pub use alias::AliasTable;
pub use duration::{DurationError, DurationStyle, elapsed, entry_seconds, parse_duration};
pub use localtime::{TimeParseError, default_query_range, local_midnight_to_utc, parse_local};
