use crate::errors::Error;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A calendar month, written `YYYY-MM` in the store.
/// Expenses are attached to a month by the textual prefix of their date, so
/// this type mostly exists to build that prefix and the first day of the
/// month used by recurring expenses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn of(date: NaiveDate) -> Self {
        Month {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The `YYYY-MM` prefix shared by the dates of this month
    pub fn prefix(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// The date used for recurring expenses, `YYYY-MM-01`
    pub fn first_day(&self) -> String {
        format!("{}-01", self.prefix())
    }

    /// Whether the stored date (as text) falls in this month
    pub fn contains(&self, date: &str) -> bool {
        date.starts_with(&self.prefix())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix())
    }
}

impl FromStr for Month {
    type Err = Error;

    /// Parse `YYYY-MM`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
            .map(Month::of)
            .map_err(|_| {
                Error::Validation(format!("Invalid month {s:?}, expected YYYY-MM"))
            })
    }
}
