//! project-tools - JavaScript project bootstrapper
//!
//! This is the main entry point for the `ptools` CLI. It installs and wires
//! up Prettier, commitlint, commitizen and husky in the target directory.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use project_tools::setup::setup;

/// Command-line arguments for project-tools
#[derive(Parser)]
#[command(name = "ptools")]
#[command(about = "Set up formatting, commit linting and git hooks", long_about = None)]
struct Cli {
    /// Print version information
    #[arg(short, long)]
    version: bool,

    /// Project directory to set up (defaults to the current directory)
    #[arg(short = 'C', long = "dir", value_name = "PATH")]
    dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("project-tools v{}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let dir = cli.dir.unwrap_or_else(|| PathBuf::from("."));
    setup(&dir)
}
