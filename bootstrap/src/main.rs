//! Prepare the local development environment.
//!
//! Runs `uv sync --all-extras` and `uv run pre-commit install` in the project
//! root, then prints follow-up hints. The exit code is the failing tool's exit
//! code, or 1 when the tool is not installed.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use bootstrap::config::{CONFIG_FILE_NAME, load_config, load_config_or_default};
use bootstrap::exit_codes;
use bootstrap::logging;
use bootstrap::paths::{default_root, resolve_root};
use bootstrap::process::SystemRunner;
use bootstrap::setup::run_setup;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bootstrap",
    version,
    about = "Install project dependencies and git hooks"
)]
struct Cli {
    /// Project root used as the working directory for every step.
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Setup plan to use instead of `<root>/bootstrap.toml`.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log each step to stderr (`RUST_LOG` still takes precedence).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("@@@ Error: {:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<i32> {
    let root = match &cli.root {
        Some(path) => resolve_root(path)?,
        None => default_root()?,
    };
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => load_config_or_default(&root.join(CONFIG_FILE_NAME))?,
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    run_setup(
        &root,
        &config,
        &SystemRunner,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}
