//! Service layer for the finance tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, id assignment and persistence after each mutation.

pub mod category;
pub mod transaction;
pub mod user;

pub use category::CategoryService;
pub use transaction::{CreateTransactionInput, TransactionService, TransactionUpdate};
pub use user::UserService;
