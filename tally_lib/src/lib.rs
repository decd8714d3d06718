pub mod aggregates;
pub mod categories;
pub mod csv_rows;
pub mod errors;
pub mod expenses;
pub mod formatters;
pub mod months;
pub mod recurring;
pub mod search;
pub mod settings;
pub mod store;
pub mod tracker;
