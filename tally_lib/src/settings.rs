use rust_decimal::Decimal;
use std::path::PathBuf;

/// Where the data lives, and the budget to check against.
/// These are fixed for the lifetime of the application.
#[derive(Clone, Debug)]
pub struct Settings {
    pub expense_path: PathBuf,
    pub recurring_path: PathBuf,

    // Monthly budget
    pub budget: Decimal,

    // Fraction of the budget from which we warn the user
    pub alert_ratio: Decimal,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            expense_path: PathBuf::from("expense.csv"),
            recurring_path: PathBuf::from("recurring.csv"),
            budget: Decimal::from(3000),
            alert_ratio: Decimal::new(8, 1),
        }
    }
}
