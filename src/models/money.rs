//! Money type for representing currency amounts
//!
//! Wraps an arbitrary-precision `Decimal` so that sums such as
//! `150.25 + 99.99` are exact. Serialized as a JSON string (`"150.25"`) so the
//! stored value never passes through a float.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

/// Represents a monetary amount as an exact decimal value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from a decimal value
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a Money amount from a whole number of units
    ///
    /// # Examples
    /// ```
    /// use finance_tracker::models::Money;
    /// assert_eq!(Money::from_units(1000).to_string(), "1000");
    /// ```
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal value
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Number of whole hundreds in the amount, rounded toward negative infinity
    ///
    /// Returns zero for negative amounts and saturates at `usize::MAX`.
    pub fn whole_hundreds(&self) -> usize {
        if self.is_negative() {
            return 0;
        }
        (self.0 / Decimal::ONE_HUNDRED)
            .floor()
            .to_usize()
            .unwrap_or(usize::MAX)
    }

    /// Add two amounts, `None` when the result leaves the decimal range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract two amounts, `None` when the result leaves the decimal range
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Sum a sequence of amounts, `None` on overflow
    ///
    /// # Examples
    /// ```
    /// use finance_tracker::models::Money;
    /// let parts = ["150.25", "99.99"].map(|s| Money::parse(s).unwrap());
    /// assert_eq!(Money::checked_sum(parts).unwrap().to_string(), "250.24");
    /// ```
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |acc, amount| acc.checked_add(amount))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "0.125"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest).trim();

        if rest.is_empty() || rest.starts_with(&['-', '+'][..]) {
            return Err(MoneyParseError::InvalidFormat(s.trim().to_string()));
        }

        let value = Decimal::from_str(rest)
            .map_err(|_| MoneyParseError::InvalidFormat(s.trim().to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        Money::parse(s).unwrap()
    }

    #[test]
    fn test_parse() {
        assert_eq!(money("10.50").to_string(), "10.50");
        assert_eq!(money("$10.50"), money("10.5"));
        assert_eq!(money("-10.50"), -money("10.50"));
        assert_eq!(money("  10 ").to_string(), "10");
        assert_eq!(money("0.125").to_string(), "0.125");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12.3.4").is_err());
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("$").is_err());
    }

    #[test]
    fn test_decimal_sum_is_exact() {
        let total = money("150.25").checked_add(money("99.99")).unwrap();
        assert_eq!(total, money("250.24"));
        assert_eq!(total.to_string(), "250.24");

        let tenths = Money::checked_sum(std::iter::repeat(money("0.1")).take(10)).unwrap();
        assert_eq!(tenths, Money::from_units(1));
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(1000);
        let b = money("200");

        assert_eq!(a.checked_sub(b), Some(Money::from_units(800)));
        assert_eq!(-a, Money::from_units(-1000));
        assert_eq!(Money::checked_sum(Vec::new()), Some(Money::zero()));
    }

    #[test]
    fn test_overflow_is_reported_not_panicking() {
        let max = money("79228162514264337593543950335");

        assert_eq!(max.checked_add(money("1")), None);
        assert_eq!((-max).checked_sub(money("1")), None);
        assert_eq!(Money::checked_sum([max, max]), None);
        assert_eq!(max.checked_add(-max), Some(Money::zero()));
    }

    #[test]
    fn test_whole_hundreds() {
        assert_eq!(money("0").whole_hundreds(), 0);
        assert_eq!(money("99.99").whole_hundreds(), 0);
        assert_eq!(money("100").whole_hundreds(), 1);
        assert_eq!(money("1234.56").whole_hundreds(), 12);
        assert_eq!(money("-500").whole_hundreds(), 0);
    }

    #[test]
    fn test_is_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_negative());
        assert!(money("-0.01").is_negative());
    }

    #[test]
    fn test_serialization_is_string() {
        let m = money("150.25");
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"150.25\"");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
