use crate::errors::Result;
use crate::expenses::ExpenseRow;
use crate::months::Month;
use crate::store::{load_rows, read_file, ExpenseStore, Loaded};
use log::debug;
use std::path::{Path, PathBuf};

/// An expense that comes back every month (rent, subscriptions,...).
/// The amount is kept as text and copied verbatim into each expense.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecurringTemplate {
    pub name: String,
    pub amount: String,
    pub category: String,
}

impl RecurringTemplate {
    fn from_fields(fields: Vec<String>) -> Option<Self> {
        let [name, amount, category]: [String; 3] = fields.try_into().ok()?;
        Some(RecurringTemplate {
            name,
            amount,
            category,
        })
    }

    /// The expense this template creates for the given month
    pub fn instantiate(&self, month: Month) -> ExpenseRow {
        ExpenseRow::new(
            &month.first_day(),
            &self.name,
            &self.amount,
            &self.category,
        )
    }
}

/// The file of recurring templates.  It is maintained by hand, we never
/// write to it.
pub struct RecurringStore {
    path: PathBuf,
}

impl RecurringStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecurringStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The templates, or None when the file does not exist
    pub fn read_all(&self) -> Result<Option<Loaded<RecurringTemplate>>> {
        Ok(read_file(&self.path)?.map(|content| {
            load_rows(&self.path, &content, RecurringTemplate::from_fields)
        }))
    }

    /// Add one expense per template to `expenses`, dated on the first day of
    /// `month`.  Returns the number of expenses added, or None if there is
    /// no template file (in which case nothing happens).
    ///
    /// There is no memory of previous applications: calling this twice in
    /// the same month adds every recurring expense twice.
    pub fn apply(
        &self,
        expenses: &ExpenseStore,
        month: Month,
    ) -> Result<Option<usize>> {
        let Some(templates) = self.read_all()? else {
            return Ok(None);
        };
        let rows = templates
            .rows
            .iter()
            .map(|t| t.instantiate(month))
            .collect::<Vec<_>>();
        expenses.append_all(&rows)?;
        debug!("applied {} recurring expense(s) for {month}", rows.len());
        Ok(Some(rows.len()))
    }
}

#[cfg(test)]
mod test {
    use crate::expenses::ExpenseRow;
    use crate::months::Month;
    use crate::recurring::RecurringStore;
    use crate::store::ExpenseStore;
    use chrono::NaiveDate;
    use std::fs;

    fn march() -> Month {
        Month::of(NaiveDate::from_ymd_opt(2024, 3, 17).unwrap())
    }

    #[test]
    fn test_no_template_file() {
        let dir = tempfile::tempdir().unwrap();
        let expenses = ExpenseStore::new(dir.path().join("expense.csv"));
        let recurring = RecurringStore::new(dir.path().join("recurring.csv"));
        assert_eq!(recurring.apply(&expenses, march()).unwrap(), None);
        assert!(!expenses.path().exists());
    }

    #[test]
    fn test_apply_twice_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let expenses = ExpenseStore::new(dir.path().join("expense.csv"));
        let recurring = RecurringStore::new(dir.path().join("recurring.csv"));
        fs::write(
            recurring.path(),
            "Rent,900,Living\nbad line\nPhone,19.99,Misc\n",
        )
        .unwrap();

        let rent = ExpenseRow::new("2024-03-01", "Rent", "900", "Living");
        let phone = ExpenseRow::new("2024-03-01", "Phone", "19.99", "Misc");

        assert_eq!(recurring.apply(&expenses, march()).unwrap(), Some(2));
        assert_eq!(
            expenses.read_all().unwrap().rows,
            vec![rent.clone(), phone.clone()]
        );

        assert_eq!(recurring.apply(&expenses, march()).unwrap(), Some(2));
        assert_eq!(
            expenses.read_all().unwrap().rows,
            vec![rent.clone(), phone.clone(), rent, phone]
        );

        // The template file itself is never modified
        assert_eq!(
            fs::read_to_string(recurring.path()).unwrap(),
            "Rent,900,Living\nbad line\nPhone,19.99,Misc\n"
        );
    }

    #[test]
    fn test_empty_template_file() {
        let dir = tempfile::tempdir().unwrap();
        let expenses = ExpenseStore::new(dir.path().join("expense.csv"));
        let recurring = RecurringStore::new(dir.path().join("recurring.csv"));
        fs::write(recurring.path(), "").unwrap();
        assert_eq!(recurring.apply(&expenses, march()).unwrap(), Some(0));
        assert!(expenses.read_all().unwrap().rows.is_empty());
    }
}
