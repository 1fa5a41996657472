//! Configuration module for the finance tracker
//!
//! Resolves where the data files live. Logging configuration lives in
//! [`crate::init_tracing`].

pub mod paths;

pub use paths::FinancePaths;
