//! project-tools - JavaScript project bootstrapper
//!
//! project-tools installs a conventional "format + lint commit messages +
//! git hooks" toolchain into a JavaScript project by driving the tools' own
//! command lines and writing a few static files.
//!
//! # What a run does
//!
//! - Initializes `package.json` when missing and installs husky, commitlint,
//!   commitizen and Prettier as dev dependencies
//! - Writes `.prettierrc` and `commitlint.config.js` (always overwritten)
//! - Initializes commitizen and husky, then writes four hook scripts under
//!   `.husky/` and marks them executable
//! - Registers `format` / `format:check` scripts and ignores `.husky/_`
//!
//! # Architecture
//!
//! - [`setup`] - The ordered setup steps and the top-level error boundary
//! - [`command`] - Running delegated command lines
//! - [`files`] - Idempotent file, directory and ignore-list helpers
//! - [`filesystem`] - Filesystem abstraction with a mock implementation
//! - [`templates`] - Static config and hook payloads
//! - [`config`] - Optional `.project-tools.toml`
//! - [`error`] - Command and I/O error kinds
//! - [`constants`] / [`utils`] - Messages and terminal output
//!
//! # Usage Example
//!
//! ```no_run
//! use project_tools::command::ShellRunner;
//! use project_tools::config::Config;
//! use project_tools::filesystem::RealFileSystem;
//! use project_tools::setup::Setup;
//!
//! let setup = Setup::new(".", ShellRunner::new(), RealFileSystem::new(), Config::default());
//! let report = setup.run().expect("setup failed");
//! println!("wrote {} files", report.files_written.len());
//! ```

pub mod command;
pub mod config;
pub mod constants;
pub mod error;
pub mod files;
pub mod filesystem;
pub mod setup;
pub mod templates;
pub mod utils;
