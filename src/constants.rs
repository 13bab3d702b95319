//! Constants used throughout the application
//!
//! This module centralizes the command lines, file names and user-facing
//! messages of the setup run, so the orchestrator reads as a list of steps.
//!
//! # Organization
//!
//! - **Files and Directories**: paths written or patched in the target project
//! - **Commands**: the command lines delegated to npm, npx and husky
//! - **Messages**: step headers and status lines
//! - **Icons**: status prefixes
//!
//! # Usage
//!
//! ```rust
//! use project_tools::constants::{FILE_GITIGNORE, MSG_ENTRY_ADDED};
//!
//! println!("{}", MSG_ENTRY_ADDED.replace("{}", ".husky/_"));
//! assert_eq!(FILE_GITIGNORE, ".gitignore");
//! ```

use colored::*;

// Files and Directories
pub const FILE_PACKAGE_JSON: &str = "package.json";
pub const FILE_PRETTIER_CONFIG: &str = ".prettierrc";
pub const FILE_COMMITLINT_CONFIG: &str = "commitlint.config.js";
pub const FILE_GITIGNORE: &str = ".gitignore";
pub const CONFIG_FILE_NAME: &str = ".project-tools.toml";
pub const HUSKY_DIR: &str = ".husky";
pub const HUSKY_INTERNAL_ENTRY: &str = ".husky/_";
pub const DEFAULT_SOURCE_DIR: &str = "src";

// Commands
pub const CMD_NPM_INIT: &str = "npm init -y";
pub const CMD_NPM_INSTALL_DEV: &str = "npm install --save-dev";
pub const CMD_COMMITIZEN_INIT: &str =
    "npx commitizen init cz-conventional-changelog --save-dev --save-exact --force";
pub const CMD_SET_PREPARE_SCRIPT: &str = "npm pkg set scripts.prepare=\"husky\"";
pub const CMD_RUN_PREPARE: &str = "npm run prepare";
pub const CMD_PKG_SET: &str = "npm pkg set";

/// Developer tools installed into every project, in install order
pub const DEV_DEPENDENCIES: &[&str] = &[
    "husky",
    "@commitlint/config-conventional",
    "@commitlint/cli",
    "commitizen",
    "cz-conventional-changelog",
    "prettier",
];

// Package scripts
pub const SCRIPT_FORMAT: &str = "format";
pub const SCRIPT_FORMAT_CHECK: &str = "format:check";

// Messages
pub const MSG_STARTING: &str = "Starting tools configuration...";
pub const MSG_MANIFEST_MISSING: &str = "package.json not found. Initializing npm project...";
pub const MSG_INSTALLING: &str = "Installing dependencies...";
pub const MSG_CONFIGURING_PRETTIER: &str = "Configuring Prettier...";
pub const MSG_CONFIGURING_COMMITLINT: &str = "Configuring Commitlint...";
pub const MSG_CONFIGURING_COMMITIZEN: &str = "Configuring Commitizen...";
pub const MSG_CONFIGURING_HUSKY: &str = "Configuring Husky...";
pub const MSG_CREATING_HOOKS: &str = "Creating husky hooks...";
pub const MSG_UPDATING_SCRIPTS: &str = "Updating package.json scripts...";
pub const MSG_UPDATING_GITIGNORE: &str = "Checking/updating .gitignore...";
pub const MSG_COMPLETED: &str = "Configuration completed successfully!";
pub const MSG_FILE_CREATED: &str = "Created {}";
pub const MSG_DIRECTORY_CREATED: &str = "Created directory {}";
pub const MSG_ENTRY_ADDED: &str = "Added {} to .gitignore";
pub const MSG_ENTRY_EXISTS: &str = "{} already exists in .gitignore";

// Warnings and errors
pub const WARNING_NOT_A_GIT_REPO: &str =
    "No git repository found here. Husky needs one to install its hooks; run `git init` first.";
pub const WARNING_CONFIG_READ: &str = "Failed to read {}: ";
pub const WARNING_CONFIG_PARSE: &str = "Failed to parse {}: ";
pub const ERROR_EXECUTING_COMMAND: &str = "Error executing command: ";
pub const ERROR_DURING_CONFIGURATION: &str = "Error during configuration:";

// Icons
pub const ICON_STEP: &str = "»";
pub const ICON_SUCCESS: &str = "✓";
pub const ICON_ERROR: &str = "✗";
pub const ICON_INFO: &str = "ℹ";
pub const ICON_WARNING: &str = "⚠";

// UI Formatting
pub const HEADER_SEPARATOR_WIDTH: usize = 50;

/// Creates the banner printed at the start of a setup run
pub fn section_header(title: &str) -> String {
    let title_formatted = title.bright_cyan().bold();
    let separator = "=".repeat(HEADER_SEPARATOR_WIDTH).bright_blue();
    format!("{title_formatted}\n{separator}")
}
