//! Command runner for delegated tool invocations
//!
//! npm, npx and husky are driven through their own command lines. Each
//! command is run once through the platform shell with inherited standard
//! streams, so interactive prompts from the child reach the user directly.
//! A failing command is reported and turned into [`SetupError::Command`];
//! nothing is retried.

use anyhow::Result;
use std::path::Path;
use std::process::Command;

use crate::constants::ERROR_EXECUTING_COMMAND;
use crate::error::SetupError;
use crate::utils::print_error;

/// Runs a command line in a working directory
pub trait CommandRunner {
    /// Runs `command` with `dir` as its working directory
    ///
    /// Returns `Ok(())` when the process exits with status 0.
    fn run(&self, command: &str, dir: &Path) -> Result<()>;
}

/// Production runner that goes through `sh -c` (or `cmd /C` on windows)
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }

    fn shell_command(command: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, dir: &Path) -> Result<()> {
        // stdio is inherited by default with `status()`
        let outcome = Self::shell_command(command).current_dir(dir).status();

        let reason = match outcome {
            Ok(status) if status.success() => return Ok(()),
            Ok(status) => status.to_string(),
            Err(e) => e.to_string(),
        };

        print_error(&format!("{ERROR_EXECUTING_COMMAND}{command}"));
        Err(SetupError::Command {
            command: command.to_string(),
            reason,
        }
        .into())
    }
}

pub mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Runner that records command lines instead of executing them
    ///
    /// A command fails when it contains one of the configured fragments.
    #[derive(Default)]
    pub struct RecordingRunner {
        calls: RefCell<Vec<(String, PathBuf)>>,
        fail_on: Vec<String>,
    }

    impl RecordingRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every command containing `fragment` fail with a non-zero exit
        pub fn failing_on(mut self, fragment: &str) -> Self {
            self.fail_on.push(fragment.to_string());
            self
        }

        /// Command lines seen so far, in order
        pub fn commands(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|(c, _)| c.clone()).collect()
        }

        /// Working directories passed alongside each command
        pub fn directories(&self) -> Vec<PathBuf> {
            self.calls.borrow().iter().map(|(_, d)| d.clone()).collect()
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, command: &str, dir: &Path) -> Result<()> {
            self.calls
                .borrow_mut()
                .push((command.to_string(), dir.to_path_buf()));

            if self.fail_on.iter().any(|f| command.contains(f.as_str())) {
                return Err(SetupError::Command {
                    command: command.to_string(),
                    reason: "exit status: 1".to_string(),
                }
                .into());
            }
            Ok(())
        }
    }
}
