//! Error kinds surfaced by the setup run
//!
//! Everything in the crate returns `anyhow::Result`; the two failure kinds
//! that callers care about are wrapped in [`SetupError`] so they can be
//! recovered with `downcast_ref`.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a delegated command or of a file operation
#[derive(Debug, Error)]
pub enum SetupError {
    /// An external command exited non-zero or could not be spawned
    #[error("command `{command}` failed: {reason}")]
    Command { command: String, reason: String },

    /// A file or directory operation failed
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SetupError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the offending command line for command failures
    pub fn command_line(&self) -> Option<&str> {
        match self {
            Self::Command { command, .. } => Some(command),
            Self::Io { .. } => None,
        }
    }
}
