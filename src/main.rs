use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use finance_tracker::cli::{Session, Shell};
use finance_tracker::config::paths::{FinancePaths, DATA_DIR_ENV};

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance manager for the terminal",
    long_about = "fintrack records incomes and expenses for a set of users through \
                  an interactive menu and keeps its data in users.json, \
                  transactions.json and categories.json."
)]
struct Cli {
    /// Directory holding the data files (defaults to the current directory)
    #[arg(long, env = DATA_DIR_ENV, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    finance_tracker::init_tracing(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => FinancePaths::with_base_dir(dir),
        None => FinancePaths::new()?,
    };
    debug!(dir = %paths.base_dir().display(), "using data directory");

    let session = Session::open(paths)?;

    let stdin = io::stdin();
    let mut shell = Shell::new(session, stdin.lock(), io::stdout());
    shell.run().context("interactive session failed")?;

    Ok(())
}
