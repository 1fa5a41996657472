//! Category Report
//!
//! Sums expenses per category across all time, largest first.

use crate::display::report::{format_bar, BAR_LEGEND};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, Transaction};

/// Total spending in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    pub transaction_count: usize,
}

/// Expense totals grouped by category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    /// Groups ordered by descending total; ties keep first-seen order
    pub rows: Vec<CategoryTotal>,
}

impl CategoryReport {
    /// Generate the report over every expense
    ///
    /// Groups by the category string stored on each expense, so categories
    /// that no longer exist in the list still show up. Fails with `Overflow`
    /// when a category total leaves the decimal range.
    pub fn generate(transactions: &[Transaction]) -> FinanceResult<Self> {
        let mut rows: Vec<CategoryTotal> = Vec::new();

        for txn in transactions {
            let Some(category) = txn.category() else {
                continue;
            };

            match rows.iter_mut().find(|row| row.category == category) {
                Some(row) => {
                    row.total = row.total.checked_add(txn.amount).ok_or_else(|| {
                        FinanceError::Overflow(format!("total for category '{}'", category))
                    })?;
                    row.transaction_count += 1;
                }
                None => rows.push(CategoryTotal {
                    category: category.to_string(),
                    total: txn.amount,
                    transaction_count: 1,
                }),
            }
        }

        // sort_by is stable
        rows.sort_by(|a, b| b.total.cmp(&a.total));

        Ok(Self { rows })
    }

    /// Sum over all categories, `None` if it leaves the decimal range
    pub fn total(&self) -> Option<Money> {
        Money::checked_sum(self.rows.iter().map(|row| row.total))
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::from("Category Report:\n");

        if self.rows.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        for row in &self.rows {
            output.push_str(&format!("{}: {}\n", row.category, row.total));
            output.push_str(&format!("|{}\n", format_bar(row.total)));
        }
        output.push_str(BAR_LEGEND);
        output.push('\n');

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionId;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn expense(id: u32, amount: &str, category: &str) -> Transaction {
        Transaction::expense(
            TransactionId::new(id),
            Money::parse(amount).unwrap(),
            at(id),
            category,
            "",
        )
    }

    #[test]
    fn test_groups_and_orders_descending() {
        let txns = vec![
            expense(1, "20", "Food"),
            expense(2, "300", "Bills"),
            expense(3, "30.50", "Food"),
            Transaction::income(
                TransactionId::new(4),
                Money::from_units(5000),
                at(4),
                "Employer",
                "",
            ),
            expense(5, "120", "Shopping"),
        ];

        let report = CategoryReport::generate(&txns).unwrap();
        let order: Vec<_> = report.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(order, vec!["Bills", "Shopping", "Food"]);

        let food = &report.rows[2];
        assert_eq!(food.total, Money::parse("50.50").unwrap());
        assert_eq!(food.transaction_count, 2);
        assert_eq!(report.total(), Some(Money::parse("470.50").unwrap()));
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let txns = vec![
            expense(1, "10", "Zeta"),
            expense(2, "10", "Alpha"),
            expense(3, "10", "Mid"),
        ];

        let report = CategoryReport::generate(&txns).unwrap();
        let order: Vec<_> = report.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(order, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_category_total_beyond_decimal_range_is_an_error() {
        let max = "79228162514264337593543950335";
        let txns = vec![expense(1, max, "Bills"), expense(2, max, "Bills")];

        let err = CategoryReport::generate(&txns).unwrap_err();
        assert!(matches!(err, FinanceError::Overflow(_)));

        // separate categories fit on their own; only the grand total overflows
        let txns = vec![expense(1, max, "Bills"), expense(2, max, "Food")];
        let report = CategoryReport::generate(&txns).unwrap();
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.total(), None);
    }

    #[test]
    fn test_no_expenses() {
        let report = CategoryReport::generate(&[]).unwrap();
        assert!(report.rows.is_empty());
        assert_eq!(
            report.format_terminal(),
            "Category Report:\nNo expenses recorded.\n"
        );
    }

    #[test]
    fn test_format_terminal() {
        let report = CategoryReport::generate(&[expense(1, "250", "Food")]).unwrap();
        assert_eq!(
            report.format_terminal(),
            "Category Report:\nFood: 250\n|##\n(Each # represents approximately 100 units)\n"
        );
    }
}
