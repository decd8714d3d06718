use tally_lib::aggregates::{BudgetAlert, Spending};
use tally_lib::formatters::Formatter;
use tally_lib::months::Month;

pub fn total_line(total: &Spending, format: &Formatter) -> String {
    let mut out = format!("Total Spent: {}\n", format.display(total.total));
    push_skipped(&mut out, total);
    out
}

pub fn month_line(
    month: Month,
    spent: &Spending,
    budget: rust_decimal::Decimal,
    format: &Formatter,
) -> String {
    let mut out = format!(
        "Spent in {month}: {} of {} budget\n",
        format.display(spent.total),
        format.display(budget),
    );
    push_skipped(&mut out, spent);
    out
}

pub fn alert_line(alert: &BudgetAlert, format: &Formatter) -> String {
    format!(
        "Budget Alert: You've spent {} in {}, over {} of your {} budget!\n",
        format.display(alert.spent),
        alert.month,
        format.display(alert.threshold),
        format.display(alert.budget),
    )
}

fn push_skipped(into: &mut String, spending: &Spending) {
    if spending.skipped > 0 {
        into.push_str(&format!(
            "   ({} invalid expense(s) ignored)\n",
            spending.skipped
        ));
    }
}

#[cfg(test)]
mod test {
    use crate::status_view::{alert_line, month_line, total_line};
    use rust_decimal_macros::dec;
    use tally_lib::aggregates::{BudgetAlert, Spending};
    use tally_lib::formatters::Formatter;

    #[test]
    fn test_lines() {
        let f = Formatter::default();
        assert_eq!(
            total_line(
                &Spending {
                    total: dec!(4.5),
                    skipped: 0
                },
                &f
            ),
            "Total Spent: ₹4.50\n"
        );
        assert_eq!(
            total_line(
                &Spending {
                    total: dec!(0),
                    skipped: 2
                },
                &f
            ),
            "Total Spent: ₹0.00\n   (2 invalid expense(s) ignored)\n"
        );

        let jan = "2024-01".parse().unwrap();
        assert_eq!(
            month_line(jan, &Spending::default(), dec!(3000), &f),
            "Spent in 2024-01: ₹0.00 of ₹3,000.00 budget\n"
        );
        assert_eq!(
            alert_line(
                &BudgetAlert {
                    month: jan,
                    spent: dec!(2400),
                    budget: dec!(3000),
                    threshold: dec!(2400),
                },
                &f
            ),
            "Budget Alert: You've spent ₹2,400.00 in 2024-01, over ₹2,400.00 \
             of your ₹3,000.00 budget!\n"
        );
    }
}
