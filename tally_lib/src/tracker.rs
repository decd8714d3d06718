use crate::aggregates::{self, BudgetAlert, Spending};
use crate::errors::Result;
use crate::expenses::{Expense, ExpenseForm, ExpenseRow};
use crate::months::Month;
use crate::recurring::RecurringStore;
use crate::search;
use crate::settings::Settings;
use crate::store::{ExpenseStore, Loaded};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Everything the front-end needs: the two files plus the budget.
/// Every call re-reads the expense file, there is no state in between.
pub struct Tracker {
    expenses: ExpenseStore,
    recurring: RecurringStore,
    budget: Decimal,
    alert_ratio: Decimal,
}

impl Tracker {
    pub fn new(settings: &Settings) -> Self {
        Tracker {
            expenses: ExpenseStore::new(&settings.expense_path),
            recurring: RecurringStore::new(&settings.recurring_path),
            budget: settings.budget,
            alert_ratio: settings.alert_ratio,
        }
    }

    pub fn expenses(&self) -> &ExpenseStore {
        &self.expenses
    }

    pub fn recurring(&self) -> &RecurringStore {
        &self.recurring
    }

    pub fn budget(&self) -> Decimal {
        self.budget
    }

    /// Validate the form and record the expense, dated `today`.
    pub fn save(
        &self,
        form: ExpenseForm,
        today: NaiveDate,
    ) -> Result<ExpenseRow> {
        let row = Expense::from_form(form, today)?.to_row();
        self.expenses.append(&row)?;
        Ok(row)
    }

    pub fn append(&self, row: &ExpenseRow) -> Result<()> {
        self.expenses.append(row)
    }

    pub fn read_all(&self) -> Result<Loaded<ExpenseRow>> {
        self.expenses.read_all()
    }

    pub fn delete_matching(&self, row: &ExpenseRow) -> Result<usize> {
        self.expenses.delete_matching(row)
    }

    pub fn delete_first_matching(&self, row: &ExpenseRow) -> Result<usize> {
        self.expenses.delete_first_matching(row)
    }

    pub fn search(&self, term: &str) -> Result<Loaded<ExpenseRow>> {
        let loaded = self.expenses.read_all()?;
        Ok(Loaded {
            rows: search::search(loaded.rows, term),
            skipped: loaded.skipped,
        })
    }

    /// Total over all expenses.  `skipped` counts both the malformed lines
    /// of the file and the expenses with an invalid amount.
    pub fn total_spent(&self) -> Result<Spending> {
        let loaded = self.expenses.read_all()?;
        let mut spending = aggregates::total_spent(&loaded.rows);
        spending.skipped += loaded.skipped;
        Ok(spending)
    }

    /// Total for one month.  Malformed lines have no usable date, they are
    /// counted in `skipped` whatever the month.
    pub fn month_spent(&self, month: Month) -> Result<Spending> {
        let loaded = self.expenses.read_all()?;
        let mut spending = aggregates::month_spent(&loaded.rows, month);
        spending.skipped += loaded.skipped;
        Ok(spending)
    }

    pub fn check_budget_alert(
        &self,
        month: Month,
    ) -> Result<Option<BudgetAlert>> {
        let loaded = self.expenses.read_all()?;
        Ok(aggregates::check_budget_alert(
            &loaded.rows,
            month,
            self.budget,
            self.alert_ratio,
        ))
    }

    /// See `RecurringStore::apply`
    pub fn apply_recurring(&self, month: Month) -> Result<Option<usize>> {
        self.recurring.apply(&self.expenses, month)
    }
}
