use crate::expenses::ExpenseRow;

/// Whether any field of the row contains the term, ignoring case.
/// The empty term matches every row.
pub fn matches(row: &ExpenseRow, term: &str) -> bool {
    let term = term.to_lowercase();
    row.fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// The rows that match the term, in their original order
pub fn search(rows: Vec<ExpenseRow>, term: &str) -> Vec<ExpenseRow> {
    rows.into_iter().filter(|row| matches(row, term)).collect()
}
