//! Report formatting utilities for terminal output
//!
//! Provides the text bar chart shared by the reports.

use crate::models::Money;

/// Character used to draw bars
pub const BAR_CHAR: char = '#';

/// Longest bar ever drawn
pub const MAX_BAR_LENGTH: usize = 50;

/// Legend printed under every bar chart
pub const BAR_LEGEND: &str = "(Each # represents approximately 100 units)";

/// Length of the bar for an amount: one mark per whole 100, capped
///
/// Negative amounts draw nothing.
pub fn bar_length(amount: Money) -> usize {
    amount.whole_hundreds().min(MAX_BAR_LENGTH)
}

/// Draw the bar for an amount
pub fn format_bar(amount: Money) -> String {
    BAR_CHAR.to_string().repeat(bar_length(amount))
}
