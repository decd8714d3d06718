use crate::tables::{Align, Column, ColumnFooter, Table, Truncate, Width};
use console::Term;
use tally_lib::aggregates::total_spent;
use tally_lib::expenses::ExpenseRow;
use tally_lib::formatters::Formatter;

pub struct Settings {
    // Show amounts exactly as stored, rather than rounded.  This is the text
    // that `delete` expects.
    pub raw_amounts: bool,

    pub table: crate::tables::Settings,
}

#[derive(Clone, Copy)]
enum Field {
    Date,
    Name,
    Amount,
    Category,
}

/// A table of expenses, with the sum of the amounts as footer
pub fn expenses_view(rows: &[ExpenseRow], settings: Settings) -> String {
    // The currency is shown in the column title
    let format = Formatter {
        symbol: String::new(),
    };

    let image = |row: &ExpenseRow, field: &Field| match field {
        Field::Date => row.date.clone(),
        Field::Name => row.name.clone(),
        Field::Category => row.category.clone(),
        Field::Amount => match row.parsed_amount() {
            Some(amount) if !settings.raw_amounts => format.display(amount),
            Some(_) | None => row.amount.clone(),
        },
    };

    let columns = vec![
        Column::new(Field::Date, &image)
            .with_title("Date")
            .with_footer(ColumnFooter::Hide),
        Column::new(Field::Name, &image)
            .with_title("Expense Name")
            .with_width(Width::ExpandWithMin(8))
            .with_truncate(Truncate::Right),
        Column::new(Field::Amount, &image)
            .with_title("Amount (₹)")
            .with_align(Align::Right)
            .with_truncate(Truncate::Left),
        Column::new(Field::Category, &image)
            .with_title("Category")
            .with_footer(ColumnFooter::Hide),
    ];

    let mut table = Table::new(columns, &settings.table).with_col_headers();
    table.add_rows(rows);

    let total = total_spent(rows).total;
    table.add_footer(&ExpenseRow::new("", "Total", &total.to_string(), ""));
    table.to_string(Term::stdout().size().1 as usize)
}
