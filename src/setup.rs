//! Setup orchestration
//!
//! A setup run is a fixed, linear sequence of steps against one project
//! directory:
//!
//! 1. Initialize `package.json` if it is missing
//! 2. Install the developer tools
//! 3. Write `.prettierrc`
//! 4. Write `commitlint.config.js`
//! 5. Initialize commitizen
//! 6. Configure husky and write the hook scripts
//! 7. Register the `format` and `format:check` scripts
//! 8. Ignore husky's internal directory
//!
//! The first failing step aborts the run. Nothing is rolled back; every
//! step converges when repeated, so running setup again finishes the job.

use anyhow::Result;
use console::style;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::command::{CommandRunner, ShellRunner};
use crate::config::Config;
use crate::constants::*;
use crate::files::ProjectFiles;
use crate::filesystem::{FileSystem, RealFileSystem};
use crate::templates::{PrettierConfig, COMMITLINT_CONFIG, HOOK_SCRIPTS};
use crate::utils::{print_step, print_success, print_warning};

/// What a completed setup run changed
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SetupReport {
    /// `npm init -y` had to create the manifest
    pub manifest_initialized: bool,
    /// Config files and hook scripts written, in order
    pub files_written: Vec<PathBuf>,
    /// The husky directory did not exist before this run
    pub hook_dir_created: bool,
    /// The husky entry was appended to `.gitignore`
    pub gitignore_updated: bool,
}

/// Orchestrates the setup steps for one project directory
pub struct Setup<R: CommandRunner, F: FileSystem> {
    runner: R,
    files: ProjectFiles<F>,
    config: Config,
}

impl<R: CommandRunner, F: FileSystem> Setup<R, F> {
    pub fn new(root: impl Into<PathBuf>, runner: R, fs: F, config: Config) -> Self {
        Self {
            runner,
            files: ProjectFiles::new(root, fs),
            config,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn files(&self) -> &ProjectFiles<F> {
        &self.files
    }

    /// Runs every step in order, stopping at the first error
    pub fn run(&self) -> Result<SetupReport> {
        println!("{}", section_header(MSG_STARTING));
        self.check_git_repository();

        let mut report = SetupReport {
            manifest_initialized: self.setup_dependencies()?,
            ..SetupReport::default()
        };
        report.files_written.push(self.setup_prettier()?);
        report.files_written.push(self.setup_commitlint()?);
        self.setup_commitizen()?;

        let (hook_dir_created, hooks) = self.setup_husky()?;
        report.hook_dir_created = hook_dir_created;
        report.files_written.extend(hooks);

        self.setup_scripts()?;

        print_step(MSG_UPDATING_GITIGNORE);
        report.gitignore_updated = self.files.add_to_gitignore(HUSKY_INTERNAL_ENTRY)?;

        print_success(MSG_COMPLETED);
        Ok(report)
    }

    /// Warns when the project is not inside a git work tree
    fn check_git_repository(&self) {
        if git2::Repository::discover(self.files.root()).is_err() {
            print_warning(WARNING_NOT_A_GIT_REPO);
        }
    }

    fn exec(&self, command: &str) -> Result<()> {
        self.runner.run(command, self.files.root())
    }

    /// Steps 1 and 2: make sure a manifest exists, then install the tools
    ///
    /// Returns whether the manifest had to be initialized.
    pub fn setup_dependencies(&self) -> Result<bool> {
        let initialized = if self.files.exists(FILE_PACKAGE_JSON) {
            false
        } else {
            print_step(MSG_MANIFEST_MISSING);
            self.exec(CMD_NPM_INIT)?;
            true
        };

        print_step(MSG_INSTALLING);
        let install = format!(
            "{CMD_NPM_INSTALL_DEV} {}",
            self.config.dev_dependencies().join(" ")
        );
        self.exec(&install)?;

        Ok(initialized)
    }

    /// Step 3: overwrite `.prettierrc` with the default options
    pub fn setup_prettier(&self) -> Result<PathBuf> {
        print_step(MSG_CONFIGURING_PRETTIER);
        let content = PrettierConfig::default().render()?;
        self.files.create_file(FILE_PRETTIER_CONFIG, &content)
    }

    /// Step 4: overwrite `commitlint.config.js`
    pub fn setup_commitlint(&self) -> Result<PathBuf> {
        print_step(MSG_CONFIGURING_COMMITLINT);
        self.files
            .create_file(FILE_COMMITLINT_CONFIG, COMMITLINT_CONFIG)
    }

    /// Step 5: let commitizen register its adapter in the manifest
    pub fn setup_commitizen(&self) -> Result<()> {
        print_step(MSG_CONFIGURING_COMMITIZEN);
        self.exec(CMD_COMMITIZEN_INIT)
    }

    /// Step 6: install husky, then write and mark the hook scripts
    ///
    /// Returns whether the hook directory was created and the paths of the
    /// hook scripts.
    pub fn setup_husky(&self) -> Result<(bool, Vec<PathBuf>)> {
        print_step(MSG_CONFIGURING_HUSKY);
        self.exec(CMD_SET_PREPARE_SCRIPT)?;
        self.exec(CMD_RUN_PREPARE)?;

        let created = self.files.ensure_directory_exists(HUSKY_DIR)?;

        print_step(MSG_CREATING_HOOKS);
        let mut written = Vec::with_capacity(HOOK_SCRIPTS.len());
        for hook in HOOK_SCRIPTS {
            written.push(self.files.create_file(&hook_file(hook.name), hook.content)?);
        }

        for hook in HOOK_SCRIPTS {
            self.files.make_executable(&hook_file(hook.name))?;
        }

        Ok((created, written))
    }

    /// Step 7: register the formatting scripts
    pub fn setup_scripts(&self) -> Result<()> {
        print_step(MSG_UPDATING_SCRIPTS);
        let src = &self.config.project.source_dir;
        self.exec(&pkg_set_script(SCRIPT_FORMAT, &format!("prettier --write {src}")))?;
        self.exec(&pkg_set_script(
            SCRIPT_FORMAT_CHECK,
            &format!("prettier --check {src}"),
        ))?;
        Ok(())
    }
}

fn hook_file(name: &str) -> String {
    format!("{HUSKY_DIR}/{name}")
}

/// Builds `npm pkg set scripts.<name>="<value>"`
pub fn pkg_set_script(name: &str, value: &str) -> String {
    format!("{CMD_PKG_SET} scripts.{name}=\"{value}\"")
}

/// Runs the full setup against `dir` with the real shell and filesystem
///
/// This is the top-level error boundary: the first error is printed to
/// stderr and turned into a failure exit code.
pub fn setup(dir: &Path) -> ExitCode {
    let result = Config::load_from_path(dir).and_then(|config| {
        Setup::new(dir, ShellRunner::new(), RealFileSystem::new(), config).run()
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!();
            eprintln!(
                "{} {} {e:#}",
                style(ICON_ERROR).red().bold(),
                style(ERROR_DURING_CONFIGURATION).red().bold()
            );
            ExitCode::FAILURE
        }
    }
}
