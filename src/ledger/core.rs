//! Defines the core data models and operations for the expense ledger.

use serde::{Deserialize, Serialize};

use crate::Error;

/// A validated, non-empty expense name.
///
/// Leading and trailing whitespace is trimmed at construction time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseName(String);

impl ExpenseName {
    /// Create an expense name.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyExpenseName] if `name` is
    /// empty or contains only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyExpenseName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create an expense name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for ExpenseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExpenseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single named monetary entry in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// What the money was spent on.
    pub name: ExpenseName,
    /// How much was spent, in currency units. Always finite and greater
    /// than zero for expenses created through [Expense::parse].
    pub amount: f64,
}

impl Expense {
    /// Create an expense from raw form input.
    ///
    /// `raw_name` is trimmed and must be non-empty; `raw_amount` must
    /// parse as a finite number greater than zero.
    ///
    /// # Errors
    /// This function will return an:
    /// - [Error::EmptyExpenseName] if the trimmed name is empty,
    /// - or [Error::InvalidAmount] if the amount does not parse or is not
    ///   a positive, finite number.
    pub fn parse(raw_name: &str, raw_amount: &str) -> Result<Self, Error> {
        let name = ExpenseName::new(raw_name)?;
        let amount = parse_amount(raw_amount)?;

        Ok(Self { name, amount })
    }
}

fn parse_amount(raw_amount: &str) -> Result<f64, Error> {
    let amount: f64 = raw_amount
        .trim()
        .parse()
        .map_err(|_| Error::InvalidAmount(raw_amount.to_string()))?;

    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(Error::InvalidAmount(raw_amount.to_string()))
    }
}

/// The ordered list of expenses for the current ledger.
///
/// Order is insertion order and an expense's index is its position in
/// that order. The ledger itself is purely in-memory; callers persist it
/// with [super::save_ledger] after each mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    records: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger from records already in insertion order.
    pub fn from_records(records: Vec<Expense>) -> Self {
        Self { records }
    }

    /// Append `expense` to the end of the ledger.
    pub fn add(&mut self, expense: Expense) {
        self.records.push(expense);
    }

    /// Remove and return the expense at `index`, shifting all later
    /// expenses down one position.
    ///
    /// An out-of-range index is a no-op and returns `None`.
    pub fn delete(&mut self, index: usize) -> Option<Expense> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }

    /// Remove every expense from the ledger.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// The expenses in insertion order.
    pub fn records(&self) -> &[Expense] {
        &self.records
    }

    /// The sum of all expense amounts, recomputed from the full list on
    /// every call.
    pub fn total(&self) -> f64 {
        self.records.iter().map(|expense| expense.amount).sum()
    }

    /// The number of expenses in the ledger.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger holds no expenses.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod expense_tests {
    use super::{Expense, ExpenseName};
    use crate::Error;

    #[test]
    fn parse_succeeds_with_valid_input() {
        let expense = Expense::parse("Coffee", "3.5").expect("Expected a valid expense");

        assert_eq!(expense.name, ExpenseName::new_unchecked("Coffee"));
        assert_eq!(expense.amount, 3.5);
    }

    #[test]
    fn parse_trims_name_and_amount() {
        let expense = Expense::parse("  Coffee  ", " 3.5 ").expect("Expected a valid expense");

        assert_eq!(expense.name.as_ref(), "Coffee");
        assert_eq!(expense.amount, 3.5);
    }

    #[test]
    fn parse_rejects_empty_and_whitespace_names() {
        for name in ["", "   ", "\t\n"] {
            let result = Expense::parse(name, "3.5");

            assert_eq!(result, Err(Error::EmptyExpenseName), "name: {name:?}");
        }
    }

    #[test]
    fn parse_rejects_bad_amounts() {
        for amount in ["", "abc", "3.5abc", "0", "-1", "NaN", "inf", "-inf"] {
            let result = Expense::parse("Coffee", amount);

            assert_eq!(
                result,
                Err(Error::InvalidAmount(amount.to_string())),
                "amount: {amount:?}"
            );
        }
    }
}
