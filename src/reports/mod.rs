//! Reports module for the finance tracker
//!
//! Pure aggregations over the transaction list: monthly summary, spending by
//! category, and running balance to a date.

pub mod category_report;
pub mod daily_balance;
pub mod monthly_summary;

pub use category_report::{CategoryReport, CategoryTotal};
pub use daily_balance::DailyBalanceReport;
pub use monthly_summary::MonthlySummaryReport;
