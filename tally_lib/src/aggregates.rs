use crate::expenses::ExpenseRow;
use crate::months::Month;
use log::warn;
use rust_decimal::Decimal;

/// The sum of a set of expenses.
#[derive(Debug, Default, PartialEq)]
pub struct Spending {
    pub total: Decimal,

    // Number of expenses that were ignored because their amount could not be
    // parsed, or would overflow the total.  Such expenses never make the
    // computation fail.
    pub skipped: usize,
}

impl Spending {
    fn sum<'a>(rows: impl Iterator<Item = &'a ExpenseRow>) -> Self {
        let mut spending = Spending::default();
        for row in rows {
            let Some(amount) = row.parsed_amount() else {
                warn!("Ignoring expense with invalid amount: {row}");
                spending.skipped += 1;
                continue;
            };
            match spending.total.checked_add(amount) {
                Some(total) => spending.total = total,
                None => {
                    warn!("Ignoring expense, total would overflow: {row}");
                    spending.skipped += 1;
                }
            }
        }
        spending
    }
}

/// Total spent, over all expenses
pub fn total_spent(rows: &[ExpenseRow]) -> Spending {
    Spending::sum(rows.iter())
}

/// Total spent during one month.  An expense belongs to the month when its
/// stored date starts with `YYYY-MM`.
pub fn month_spent(rows: &[ExpenseRow], month: Month) -> Spending {
    Spending::sum(rows.iter().filter(|r| month.contains(&r.date)))
}

/// Raised when spending for the month gets close to the budget
#[derive(Debug, PartialEq)]
pub struct BudgetAlert {
    pub month: Month,
    pub spent: Decimal,
    pub budget: Decimal,

    // The spending from which we raise an alert (budget * ratio)
    pub threshold: Decimal,
}

/// Check whether the spending for `month` has reached `ratio` of the budget
/// (for instance 0.8 to be warned at 80%).
pub fn check_budget_alert(
    rows: &[ExpenseRow],
    month: Month,
    budget: Decimal,
    ratio: Decimal,
) -> Option<BudgetAlert> {
    let spent = month_spent(rows, month).total;
    let threshold = budget.checked_mul(ratio).unwrap_or(Decimal::MAX);
    if spent >= threshold {
        Some(BudgetAlert {
            month,
            spent,
            budget,
            threshold,
        })
    } else {
        None
    }
}
