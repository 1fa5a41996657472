//! Command layer
//!
//! Every menu action the shell offers is a `Command`. `execute` applies it to a
//! `Session` and returns the text to show; it never touches the terminal, so
//! it can be driven directly from tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::cli::session::Session;
use crate::display::{format_category_list, format_transaction_list, format_user_list};
use crate::error::FinanceResult;
use crate::models::{Money, TransactionId, UserId};
use crate::reports::{CategoryReport, DailyBalanceReport, MonthlySummaryReport};
use crate::services::{CategoryService, TransactionService, TransactionUpdate, UserService};

/// A single action against the session
#[derive(Debug, Clone)]
pub enum Command {
    AddUser {
        username: String,
        email: String,
    },
    SelectUser(UserId),
    ListUsers,
    AddIncome {
        amount: Money,
        source: String,
        description: String,
        date: NaiveDateTime,
    },
    AddExpense {
        amount: Money,
        category: String,
        description: String,
        date: NaiveDateTime,
    },
    EditTransaction {
        id: TransactionId,
        update: TransactionUpdate,
    },
    DeleteTransaction(TransactionId),
    ListTransactions,
    ListCategories,
    AddCategory(String),
    MonthlySummary {
        year: i32,
        month: u32,
    },
    CategoryReport,
    DailyBalance(NaiveDate),
}

impl Command {
    /// Transaction and report commands are only available with an active user
    pub fn requires_active_user(&self) -> bool {
        matches!(
            self,
            Command::AddIncome { .. }
                | Command::AddExpense { .. }
                | Command::EditTransaction { .. }
                | Command::DeleteTransaction(_)
                | Command::ListTransactions
                | Command::MonthlySummary { .. }
                | Command::CategoryReport
                | Command::DailyBalance(_)
        )
    }
}

/// Result of a successful command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text for the user, newline terminated
    pub message: String,
    /// Whether stored data changed (and was saved)
    pub mutated: bool,
}

impl Outcome {
    fn changed(message: impl Into<String>) -> Self {
        Self {
            message: line(message.into()),
            mutated: true,
        }
    }

    fn view(message: impl Into<String>) -> Self {
        Self {
            message: line(message.into()),
            mutated: false,
        }
    }
}

fn line(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// Apply `command` to the session
///
/// Mutating commands are persisted before this returns. A gated command with
/// no active user fails with `NoActiveUser` and changes nothing.
pub fn execute(session: &mut Session, command: Command) -> FinanceResult<Outcome> {
    if command.requires_active_user() {
        session.require_active_user()?;
    }

    match command {
        Command::AddUser { username, email } => {
            UserService::new(session.storage_mut()).create(username, email)?;
            Ok(Outcome::changed("User added successfully!"))
        }

        Command::SelectUser(id) => {
            let user = session.select_user(id)?;
            Ok(Outcome::view(format!(
                "Active user changed to {}",
                user.username
            )))
        }

        Command::ListUsers => {
            let active = session.active_user_id();
            let service = UserService::new(session.storage_mut());
            Ok(Outcome::view(format_user_list(service.list(), active)))
        }

        Command::AddIncome {
            amount,
            source,
            description,
            date,
        } => {
            TransactionService::new(session.storage_mut()).add_income(
                amount,
                source,
                description,
                date,
            )?;
            Ok(Outcome::changed("Income added successfully!"))
        }

        Command::AddExpense {
            amount,
            category,
            description,
            date,
        } => {
            TransactionService::new(session.storage_mut()).add_expense(
                amount,
                category,
                description,
                date,
            )?;
            Ok(Outcome::changed("Expense added successfully!"))
        }

        Command::EditTransaction { id, update } => {
            TransactionService::new(session.storage_mut()).update(id, update)?;
            Ok(Outcome::changed("Transaction updated successfully!"))
        }

        Command::DeleteTransaction(id) => {
            TransactionService::new(session.storage_mut()).delete(id)?;
            Ok(Outcome::changed("Transaction deleted successfully!"))
        }

        Command::ListTransactions => {
            let service = TransactionService::new(session.storage_mut());
            Ok(Outcome::view(format_transaction_list(service.list())))
        }

        Command::ListCategories => {
            let service = CategoryService::new(session.storage_mut());
            Ok(Outcome::view(format_category_list(service.list())))
        }

        Command::AddCategory(name) => {
            CategoryService::new(session.storage_mut()).add(name)?;
            Ok(Outcome::changed("Category added successfully!"))
        }

        Command::MonthlySummary { year, month } => {
            let txns = session.storage().transactions.get_all();
            let report = MonthlySummaryReport::generate(txns, year, month)?;
            Ok(Outcome::view(report.format_terminal()))
        }

        Command::CategoryReport => {
            let report = CategoryReport::generate(session.storage().transactions.get_all())?;
            Ok(Outcome::view(report.format_terminal()))
        }

        Command::DailyBalance(date) => {
            let txns = session.storage().transactions.get_all();
            let report = DailyBalanceReport::generate(txns, date)?;
            Ok(Outcome::view(report.format_terminal()))
        }
    }
}
