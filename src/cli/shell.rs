//! Interactive menu shell
//!
//! Reads one line per prompt from any `BufRead` and writes the transcript to
//! any `Write`, turning answers into `Command`s for the command layer. End of
//! input behaves like choosing Exit.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::cli::command::{execute, Command};
use crate::cli::menu::{
    CategoryChoice, EditAction, MainChoice, Menu, ReportChoice, TransactionChoice, UserChoice,
};
use crate::cli::prompt::{
    parse_amount, parse_date, parse_month, parse_number, parse_transaction_date, select_category,
};
use crate::cli::session::Session;
use crate::display::format_category_list;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{TransactionId, TransactionKind, UserId};
use crate::services::TransactionUpdate;

const CHOICE_PROMPT: &str = "Enter your choice: ";
const INVALID_CHOICE: &str = "Invalid choice. Try again.";
const TRANSACTION_DATE_PROMPT: &str = "Enter date (YYYY-MM-DD, blank for now): ";

/// Whether the caller should keep going or shut down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Read an answer, leaving the current menu at end of input
macro_rules! answer {
    ($shell:expr, $prompt:expr) => {
        match $shell.ask($prompt)? {
            Some(line) => line,
            None => return Ok(Flow::Exit),
        }
    };
}

/// The interactive shell over a session
pub struct Shell<R, W> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    /// Give back the session once the shell is done
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Run the main menu until Exit or end of input, then save
    ///
    /// Only storage and terminal failures end the loop with an error; bad
    /// answers are reported and the menu is shown again.
    pub fn run(&mut self) -> FinanceResult<()> {
        loop {
            self.show_main_menu()?;
            let Some(line) = self.read_line()? else {
                debug!("end of input");
                break;
            };

            let flow = match MainChoice::parse(&line) {
                Some(MainChoice::Users) => self.users_menu()?,
                Some(MainChoice::Transactions) => {
                    if self.gate()? {
                        self.transactions_menu()?
                    } else {
                        Flow::Continue
                    }
                }
                Some(MainChoice::Categories) => self.categories_menu()?,
                Some(MainChoice::Reports) => {
                    if self.gate()? {
                        self.reports_menu()?
                    } else {
                        Flow::Continue
                    }
                }
                Some(MainChoice::Exit) => Flow::Exit,
                None => {
                    self.say(INVALID_CHOICE)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.session.save()?;
        info!("session ended, data saved");

        Ok(())
    }

    fn show_main_menu(&mut self) -> FinanceResult<()> {
        let current = self
            .session
            .active_user()
            .map(|user| user.username.clone())
            .unwrap_or_else(|| "None".to_string());

        write!(
            self.output,
            "\n{}\nCurrent User: {}\n{}{}",
            MainChoice::TITLE,
            current,
            MainChoice::render_options(),
            CHOICE_PROMPT
        )?;
        Ok(())
    }

    /// Report and refuse when no user is active
    fn gate(&mut self) -> FinanceResult<bool> {
        match self.session.require_active_user() {
            Ok(_) => Ok(true),
            Err(err) => {
                self.say(&err.to_string())?;
                Ok(false)
            }
        }
    }

    fn users_menu(&mut self) -> FinanceResult<Flow> {
        loop {
            let Some(line) = self.choose::<UserChoice>()? else {
                return Ok(Flow::Exit);
            };

            match UserChoice::parse(&line) {
                Some(UserChoice::Add) => {
                    let username = answer!(self, "Enter username: ");
                    let email = answer!(self, "Enter email: ");
                    self.run_command(Command::AddUser { username, email })?;
                }
                Some(UserChoice::ChangeActive) => {
                    self.run_command(Command::ListUsers)?;
                    let input = answer!(self, "Select user ID: ");
                    match parse_number::<UserId>(&input) {
                        Ok(id) => self.run_command(Command::SelectUser(id))?,
                        Err(_) => self.say("Invalid user ID")?,
                    }
                }
                Some(UserChoice::View) => self.run_command(Command::ListUsers)?,
                Some(UserChoice::Back) => return Ok(Flow::Continue),
                None => self.say(INVALID_CHOICE)?,
            }
        }
    }

    fn transactions_menu(&mut self) -> FinanceResult<Flow> {
        loop {
            let Some(line) = self.choose::<TransactionChoice>()? else {
                return Ok(Flow::Exit);
            };

            let flow = match TransactionChoice::parse(&line) {
                Some(TransactionChoice::AddIncome) => self.add_income()?,
                Some(TransactionChoice::AddExpense) => self.add_expense()?,
                Some(TransactionChoice::EditOrDelete) => self.edit_or_delete()?,
                Some(TransactionChoice::View) => {
                    self.run_command(Command::ListTransactions)?;
                    Flow::Continue
                }
                Some(TransactionChoice::Back) => return Ok(Flow::Continue),
                None => {
                    self.say(INVALID_CHOICE)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }
    }

    fn add_income(&mut self) -> FinanceResult<Flow> {
        let amount = answer!(self, "Enter amount: ");
        let Ok(amount) = parse_amount(&amount) else {
            self.say("Invalid amount!")?;
            return Ok(Flow::Continue);
        };
        let source = answer!(self, "Enter source: ");
        let description = answer!(self, "Enter description: ");
        let date = answer!(self, TRANSACTION_DATE_PROMPT);
        let Ok(date) = parse_transaction_date(&date) else {
            self.say("Invalid date format!")?;
            return Ok(Flow::Continue);
        };

        self.run_command(Command::AddIncome {
            amount,
            source,
            description,
            date,
        })?;
        Ok(Flow::Continue)
    }

    fn add_expense(&mut self) -> FinanceResult<Flow> {
        self.show_categories()?;
        let number = answer!(self, "Select category number: ");
        let Some(category) = select_category(self.session.storage().categories.get_all(), &number)
        else {
            self.say("Invalid category!")?;
            return Ok(Flow::Continue);
        };
        let amount = answer!(self, "Enter amount: ");
        let Ok(amount) = parse_amount(&amount) else {
            self.say("Invalid amount!")?;
            return Ok(Flow::Continue);
        };
        let description = answer!(self, "Enter description: ");
        let date = answer!(self, TRANSACTION_DATE_PROMPT);
        let Ok(date) = parse_transaction_date(&date) else {
            self.say("Invalid date format!")?;
            return Ok(Flow::Continue);
        };

        self.run_command(Command::AddExpense {
            amount,
            category,
            description,
            date,
        })?;
        Ok(Flow::Continue)
    }

    fn edit_or_delete(&mut self) -> FinanceResult<Flow> {
        self.run_command(Command::ListTransactions)?;
        let input = answer!(self, "Enter transaction ID to edit/delete (0 to cancel): ");
        let id: TransactionId = match parse_number(&input) {
            Ok(id) => id,
            Err(err) => {
                self.say(&err.to_string())?;
                return Ok(Flow::Continue);
            }
        };
        if id.value() == 0 {
            return Ok(Flow::Continue);
        }

        let Some(kind) = self.session.storage().transactions.get(id).map(|t| t.kind()) else {
            self.say("Transaction not found!")?;
            return Ok(Flow::Continue);
        };

        write!(self.output, "{}", EditAction::render_options())?;
        let action = answer!(self, "Choose action: ");

        match EditAction::parse(&action) {
            Some(EditAction::Edit) => {
                let amount = answer!(self, "Enter new amount: ");
                let Ok(amount) = parse_amount(&amount) else {
                    self.say("Invalid amount!")?;
                    return Ok(Flow::Continue);
                };
                let description = answer!(self, "Enter new description: ");

                let detail = match kind {
                    TransactionKind::Expense => {
                        self.show_categories()?;
                        let number = answer!(self, "Select new category number: ");
                        select_category(self.session.storage().categories.get_all(), &number)
                    }
                    TransactionKind::Income => Some(answer!(self, "Enter new source: ")),
                };

                self.run_command(Command::EditTransaction {
                    id,
                    update: TransactionUpdate {
                        amount: Some(amount),
                        description: Some(description),
                        detail,
                    },
                })?;
            }
            Some(EditAction::Delete) => self.run_command(Command::DeleteTransaction(id))?,
            None => self.say(INVALID_CHOICE)?,
        }

        Ok(Flow::Continue)
    }

    fn categories_menu(&mut self) -> FinanceResult<Flow> {
        loop {
            let Some(line) = self.choose::<CategoryChoice>()? else {
                return Ok(Flow::Exit);
            };

            match CategoryChoice::parse(&line) {
                Some(CategoryChoice::View) => self.run_command(Command::ListCategories)?,
                Some(CategoryChoice::Add) => {
                    let name = answer!(self, "Enter new category name: ");
                    self.run_command(Command::AddCategory(name))?;
                }
                Some(CategoryChoice::Back) => return Ok(Flow::Continue),
                None => self.say(INVALID_CHOICE)?,
            }
        }
    }

    fn reports_menu(&mut self) -> FinanceResult<Flow> {
        loop {
            let Some(line) = self.choose::<ReportChoice>()? else {
                return Ok(Flow::Exit);
            };

            match ReportChoice::parse(&line) {
                Some(ReportChoice::MonthlySummary) => {
                    let year = answer!(self, "Enter year (YYYY): ");
                    let Ok(year) = parse_number::<i32>(&year) else {
                        self.say("Invalid year!")?;
                        continue;
                    };
                    let month = answer!(self, "Enter month (MM): ");
                    let Ok(month) = parse_month(&month) else {
                        self.say("Invalid month!")?;
                        continue;
                    };
                    self.run_command(Command::MonthlySummary { year, month })?;
                }
                Some(ReportChoice::CategoryReport) => self.run_command(Command::CategoryReport)?,
                Some(ReportChoice::DailyBalance) => {
                    let date = answer!(self, "Enter date (YYYY-MM-DD): ");
                    match parse_date(&date) {
                        Ok(date) => self.run_command(Command::DailyBalance(date))?,
                        Err(_) => self.say("Invalid date format!")?,
                    }
                }
                Some(ReportChoice::Back) => return Ok(Flow::Continue),
                None => self.say(INVALID_CHOICE)?,
            }
        }
    }

    /// Execute a command, printing its outcome or a recoverable failure
    fn run_command(&mut self, command: Command) -> FinanceResult<()> {
        match execute(&mut self.session, command) {
            Ok(outcome) => write!(self.output, "{}", outcome.message)?,
            Err(err) => match failure_message(&err) {
                Some(message) => self.say(&message)?,
                None => return Err(err),
            },
        }
        Ok(())
    }

    fn show_categories(&mut self) -> FinanceResult<()> {
        let listing = format_category_list(self.session.storage().categories.get_all());
        write!(self.output, "{}", listing)?;
        Ok(())
    }

    /// Show a submenu and read the choice
    fn choose<M: Menu>(&mut self) -> FinanceResult<Option<String>> {
        write!(self.output, "\n{}", M::render())?;
        self.ask(CHOICE_PROMPT)
    }

    fn ask(&mut self, prompt: &str) -> FinanceResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.read_line()
    }

    fn say(&mut self, text: &str) -> FinanceResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// One line without its terminator; `None` at end of input
    fn read_line(&mut self) -> FinanceResult<Option<String>> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

/// The message shown for an error the shell recovers from
///
/// Returns `None` for storage and I/O failures, which end the session.
fn failure_message(err: &FinanceError) -> Option<String> {
    match err {
        FinanceError::NoActiveUser | FinanceError::Parse(_) | FinanceError::Overflow(_) => {
            Some(err.to_string())
        }
        FinanceError::NotFound {
            entity_type: "User",
            ..
        } => Some("Invalid user ID".to_string()),
        FinanceError::NotFound { .. } => Some("Transaction not found!".to_string()),
        FinanceError::Duplicate { .. } => Some("Category already exists!".to_string()),
        FinanceError::Validation(_) => Some("Invalid category!".to_string()),
        _ => None,
    }
}
