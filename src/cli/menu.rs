//! Menu definitions
//!
//! Each menu is an enum of its choices. A choice is selected by typing its
//! number exactly; anything else is rejected.

/// A numbered text menu
pub trait Menu: Sized + Copy + 'static {
    /// Heading printed above the options
    const TITLE: &'static str;

    /// Choices in display order; choice `n` is `ITEMS[n - 1]`
    const ITEMS: &'static [(Self, &'static str)];

    /// Select a choice from one line of input
    fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        if input.trim() != number.to_string() {
            return None;
        }
        Self::ITEMS.get(number.checked_sub(1)?).map(|(choice, _)| *choice)
    }

    /// One numbered line per choice
    fn render_options() -> String {
        Self::ITEMS
            .iter()
            .enumerate()
            .map(|(index, (_, label))| format!("{}. {}\n", index + 1, label))
            .collect()
    }

    /// Title followed by the options
    fn render() -> String {
        format!("{}\n{}", Self::TITLE, Self::render_options())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Users,
    Transactions,
    Categories,
    Reports,
    Exit,
}

impl Menu for MainChoice {
    const TITLE: &'static str = "Personal Finance Manager";
    const ITEMS: &'static [(Self, &'static str)] = &[
        (Self::Users, "Manage Users"),
        (Self::Transactions, "Manage Transactions"),
        (Self::Categories, "Manage Categories"),
        (Self::Reports, "Generate Reports"),
        (Self::Exit, "Exit"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserChoice {
    Add,
    ChangeActive,
    View,
    Back,
}

impl Menu for UserChoice {
    const TITLE: &'static str = "User Management";
    const ITEMS: &'static [(Self, &'static str)] = &[
        (Self::Add, "Add New User"),
        (Self::ChangeActive, "Change Active User"),
        (Self::View, "View Users"),
        (Self::Back, "Back"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionChoice {
    AddIncome,
    AddExpense,
    EditOrDelete,
    View,
    Back,
}

impl Menu for TransactionChoice {
    const TITLE: &'static str = "Transaction Management";
    const ITEMS: &'static [(Self, &'static str)] = &[
        (Self::AddIncome, "Add Income"),
        (Self::AddExpense, "Add Expense"),
        (Self::EditOrDelete, "Edit/Delete Transaction"),
        (Self::View, "View Transactions"),
        (Self::Back, "Back"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryChoice {
    View,
    Add,
    Back,
}

impl Menu for CategoryChoice {
    const TITLE: &'static str = "Category Management";
    const ITEMS: &'static [(Self, &'static str)] = &[
        (Self::View, "View Categories"),
        (Self::Add, "Add Custom Category"),
        (Self::Back, "Back"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportChoice {
    MonthlySummary,
    CategoryReport,
    DailyBalance,
    Back,
}

impl Menu for ReportChoice {
    const TITLE: &'static str = "Reports";
    const ITEMS: &'static [(Self, &'static str)] = &[
        (Self::MonthlySummary, "Monthly Summary"),
        (Self::CategoryReport, "Category Report"),
        (Self::DailyBalance, "Daily Balance"),
        (Self::Back, "Back"),
    ];
}

/// Action picked after choosing a transaction to edit or delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Edit,
    Delete,
}

impl Menu for EditAction {
    const TITLE: &'static str = "Transaction Action";
    const ITEMS: &'static [(Self, &'static str)] =
        &[(Self::Edit, "Edit"), (Self::Delete, "Delete")];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_numbers() {
        assert_eq!(MainChoice::parse("1"), Some(MainChoice::Users));
        assert_eq!(MainChoice::parse("5\n"), Some(MainChoice::Exit));
        assert_eq!(ReportChoice::parse("3"), Some(ReportChoice::DailyBalance));
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        assert_eq!(MainChoice::parse("0"), None);
        assert_eq!(MainChoice::parse("6"), None);
        assert_eq!(MainChoice::parse("01"), None);
        assert_eq!(MainChoice::parse("+1"), None);
        assert_eq!(MainChoice::parse("users"), None);
        assert_eq!(CategoryChoice::parse(""), None);
    }

    #[test]
    fn test_render() {
        assert_eq!(
            CategoryChoice::render(),
            "Category Management\n1. View Categories\n2. Add Custom Category\n3. Back\n"
        );
        assert!(MainChoice::render().starts_with("Personal Finance Manager\n1. Manage Users\n"));
        assert_eq!(EditAction::render_options(), "1. Edit\n2. Delete\n");
    }
}
