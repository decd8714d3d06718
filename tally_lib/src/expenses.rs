use crate::categories::Category;
use crate::errors::{Error, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// An expense exactly as it is stored in the expense file.
///
/// All fields are kept as text: this is what is listed and searched, and
/// deleting an expense compares these strings literally against what the
/// user selected.  Use `parsed_amount()` when a number is needed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseRow {
    pub date: String,
    pub name: String,
    pub amount: String,
    pub category: String,
}

impl ExpenseRow {
    pub fn new(date: &str, name: &str, amount: &str, category: &str) -> Self {
        ExpenseRow {
            date: date.into(),
            name: name.into(),
            amount: amount.into(),
            category: category.into(),
        }
    }

    /// Build from the fields of one line of the file.  Returns None unless
    /// there are exactly four of them.
    pub(crate) fn from_fields(fields: Vec<String>) -> Option<Self> {
        let [date, name, amount, category]: [String; 4] =
            fields.try_into().ok()?;
        Some(ExpenseRow {
            date,
            name,
            amount,
            category,
        })
    }

    /// The fields in storage order
    pub fn fields(&self) -> [&str; 4] {
        [&self.date, &self.name, &self.amount, &self.category]
    }

    pub fn parsed_amount(&self) -> Option<Decimal> {
        parse_amount(&self.amount)
    }
}

impl fmt::Display for ExpenseRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.name, self.amount, self.category
        )
    }
}

/// Parse an amount as typed by the user or read from a file.
/// Surrounding blanks are ignored and scientific notation is accepted.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// The raw values entered in the form, before validation.
/// Such objects are short-lived, so that one can write
///     Expense::from_form(ExpenseForm {
///         name: "Coffee",
///         ..Default::default()
///     }, today)
#[derive(Default)]
pub struct ExpenseForm<'a> {
    pub name: &'a str,
    pub amount: &'a str,
    pub category: &'a str,
}

/// A validated expense, ready to be saved
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub date: NaiveDate,
    pub name: String,
    pub amount: Decimal,
    pub category: Category,
}

impl Expense {
    /// Validate the form.  Nothing is written anywhere if this fails.
    /// Negative amounts are accepted (refunds).
    pub fn from_form(form: ExpenseForm, date: NaiveDate) -> Result<Self> {
        if form.name.is_empty()
            || form.amount.is_empty()
            || form.category.is_empty()
        {
            return Err(Error::Validation("Please fill all fields!".into()));
        }

        let amount = parse_amount(form.amount).ok_or_else(|| {
            Error::Validation("Amount must be a number!".into())
        })?;

        Ok(Expense {
            date,
            name: form.name.into(),
            amount,
            category: form.category.parse()?,
        })
    }

    pub fn to_row(&self) -> ExpenseRow {
        ExpenseRow {
            date: self.date.format("%Y-%m-%d").to_string(),
            name: self.name.clone(),
            amount: self.amount.to_string(),
            category: self.category.to_string(),
        }
    }
}
