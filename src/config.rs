//! Configuration management for project-tools
//!
//! An optional `.project-tools.toml` in the target directory adjusts the
//! few values that vary between projects. Without it the setup run uses the
//! built-in defaults.
//!
//! # File Format
//!
//! ```toml
//! [project]
//! source_dir = "lib"
//!
//! [dependencies]
//! extra = ["eslint", "lint-staged"]
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_SOURCE_DIR, DEV_DEPENDENCIES, WARNING_CONFIG_PARSE,
    WARNING_CONFIG_READ,
};
use crate::filesystem::{FileSystem, RealFileSystem};
use crate::utils::{fill, print_warning};

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub dependencies: DependenciesConfig,
}

/// Settings describing the project layout
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProjectConfig {
    /// Directory the `format` and `format:check` scripts run Prettier on
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
        }
    }
}

fn default_source_dir() -> String {
    DEFAULT_SOURCE_DIR.to_string()
}

/// Extra packages installed next to the fixed tool set
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct DependenciesConfig {
    #[serde(default)]
    pub extra: Vec<String>,
}

impl Config {
    /// Loads `.project-tools.toml` from `dir`
    ///
    /// A missing file yields the defaults. A file that cannot be read or
    /// parsed is reported as a warning and also yields the defaults, so a
    /// broken config never blocks the setup run.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use project_tools::config::Config;
    /// use std::path::Path;
    ///
    /// let config = Config::load_from_path(Path::new(".")).expect("config");
    /// println!("formatting {}", config.project.source_dir);
    /// ```
    pub fn load_from_path(dir: &Path) -> Result<Self> {
        Self::load_with(&RealFileSystem::new(), dir)
    }

    /// Same as [`load_from_path`](Self::load_from_path), reading through `fs`
    pub fn load_with<F: FileSystem>(fs: &F, dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !fs.exists(&path) {
            return Ok(Config::default());
        }

        let content = match fs.read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                print_warning(&format!("{}{e}", fill(WARNING_CONFIG_READ, CONFIG_FILE_NAME)));
                return Ok(Config::default());
            }
        };

        match toml::from_str::<Config>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                print_warning(&format!("{}{e}", fill(WARNING_CONFIG_PARSE, CONFIG_FILE_NAME)));
                Ok(Config::default())
            }
        }
    }

    /// The fixed tool set followed by any configured extras
    pub fn dev_dependencies(&self) -> Vec<String> {
        DEV_DEPENDENCIES
            .iter()
            .map(|d| d.to_string())
            .chain(self.dependencies.extra.iter().cloned())
            .collect()
    }
}
