//! Core data models for the finance tracker
//!
//! This module contains the data structures of the tracking domain: users,
//! income/expense transactions, and the category list.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;
pub mod user;

pub use category::{CategoryList, DefaultCategory};
pub use ids::{TransactionId, UserId};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionDetails, TransactionKind};
pub use user::User;
