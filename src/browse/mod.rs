//! Browse module - session state and shell input
//!
//! This module owns the interactive side of the engine while staying
//! UI-agnostic: the session turns events into state and state into views,
//! and the input parser turns text lines into events. Rendering lives in
//! `output`.
//!
//! # Architecture
//!
//! - `session`: `BrowseSession`, `Event`, `View`
//! - `input`: line parser for the `shell` command

pub mod input;
pub mod session;

pub use input::{ShellCommand, Target, parse_line};
pub use session::{BrowseSession, BrowseSessionBuilder, Event, View, ViewItem};

/// Errors that can occur while building a session or reading shell input
#[derive(Debug, thiserror::Error)]
pub enum BrowseError {
    #[error("Unknown command '{0}' (type 'help' for a list)")]
    InvalidCommand(String),

    #[error("Invalid value for {command}: {reason}")]
    InvalidValue { command: String, reason: String },

    #[error("'{0}' needs an argument")]
    MissingArgument(String),

    #[error("No item #{0} on this page")]
    NoSuchItem(usize),

    #[error("Failed to build session: {0}")]
    BuildError(String),
}
