//! Finance tracker - a personal finance manager for the terminal
//!
//! Records incomes and expenses for a set of users, keeps a list of expense
//! categories, and produces simple text reports. All data lives in three JSON
//! files in a data directory.
//!
//! # Architecture
//!
//! - `config`: Data directory resolution
//! - `error`: Custom error types
//! - `models`: Users, transactions, categories and money
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Monthly summary, category and balance reports
//! - `display`: Terminal formatting
//! - `cli`: Session state, command layer and the interactive shell
//!
//! # Example
//!
//! ```rust,no_run
//! use finance_tracker::cli::{Session, Shell};
//! use finance_tracker::config::FinancePaths;
//!
//! # fn main() -> Result<(), finance_tracker::FinanceError> {
//! let session = Session::open(FinancePaths::new()?)?;
//! let stdin = std::io::stdin();
//! let mut shell = Shell::new(session, stdin.lock(), std::io::stdout());
//! shell.run()?;
//! # Ok(())
//! # }
//! ```

use std::sync::Once;

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, writing to stderr
///
/// `RUST_LOG` takes precedence; otherwise the crate logs at `warn`, or at
/// `debug` when `verbose` is set. Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let default_level = if verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("finance_tracker={}", default_level)));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
