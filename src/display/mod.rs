//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables and the text bar charts used by reports.

pub mod category;
pub mod report;
pub mod transaction;
pub mod user;

pub use category::format_category_list;
pub use report::{format_bar, BAR_LEGEND};
pub use transaction::format_transaction_list;
pub use user::format_user_list;
