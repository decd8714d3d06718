#[derive(Clone, Copy)]
pub enum Width {
    Auto,
    ExpandWithMin(usize),
}
#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Center,
    Right,
}
#[derive(Clone, Copy)]
pub enum Truncate {
    Left,  //  Remove left-most characters
    Right, //  Remove right-most characters
}
#[derive(Clone, Copy)]
pub enum ColumnFooter {
    Show,
    Hide,
}

pub struct Column<'a, TRow, TCol> {
    align: Align,
    truncate: Truncate,
    width: Width,
    footer: ColumnFooter,
    title: Option<String>,
    data: TCol,
    get_content: &'a dyn Fn(&TRow, &TCol) -> String,

    min_width: usize,
    computed_width: usize,
}
impl<'a, TRow, TCol> Column<'a, TRow, TCol> {
    pub fn new(
        data: TCol,
        get_content: &'a dyn Fn(&TRow, &TCol) -> String,
    ) -> Self {
        Self {
            align: Align::Left,
            truncate: Truncate::Right,
            width: Width::Auto,
            footer: ColumnFooter::Show,
            title: None,
            computed_width: 0,
            min_width: 0,
            data,
            get_content,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_footer(mut self, footer: ColumnFooter) -> Self {
        self.footer = footer;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_truncate(mut self, truncate: Truncate) -> Self {
        self.truncate = truncate;
        self
    }

    pub fn with_width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    fn content(&self, row: &TRow) -> String {
        (self.get_content)(row, &self.data)
    }

    fn title_width(&self) -> usize {
        self.title.as_ref().map_or(0, |t| t.chars().count())
    }
}

#[derive(Debug)]
enum RowData {
    Separator,
    Cells(Vec<String>),
    Headers,
}

impl RowData {
    fn cell(&self, colidx: usize) -> &str {
        match self {
            RowData::Cells(cells) => cells.get(colidx).map_or("", String::as_str),
            RowData::Separator | RowData::Headers => "",
        }
    }
}

#[derive(Clone)]
pub struct Settings {
    pub colsep: String,
}
impl Default for Settings {
    fn default() -> Self {
        Settings {
            colsep: "│".to_string(),
        }
    }
}

/// A table rendered as text, adapted to the width of the terminal.
pub struct Table<'a, TRow, TCol> {
    columns: Vec<Column<'a, TRow, TCol>>,
    rows: Vec<RowData>,
    settings: Settings,
}
impl<'a, TRow, TCol> Table<'a, TRow, TCol> {
    pub fn new(
        columns: Vec<Column<'a, TRow, TCol>>,
        settings: &Settings,
    ) -> Self {
        Self {
            rows: Vec::new(),
            columns,
            settings: settings.clone(),
        }
    }

    pub fn with_col_headers(mut self) -> Self {
        self.rows.push(RowData::Headers);
        self.rows.push(RowData::Separator);
        self
    }

    pub fn add_rows(&mut self, rows: &[TRow]) {
        for row in rows {
            self.add_row(row);
        }
    }

    pub fn add_row(&mut self, row: &TRow) {
        self.rows.push(RowData::Cells(
            self.columns.iter().map(|col| col.content(row)).collect(),
        ));
    }

    pub fn add_footer(&mut self, total: &TRow) {
        self.rows.push(RowData::Separator);
        self.rows.push(RowData::Cells(
            self.columns
                .iter()
                .map(|col| match col.footer {
                    ColumnFooter::Hide => String::new(),
                    ColumnFooter::Show => col.content(total),
                })
                .collect(),
        ));
    }

    /// The width of the widest cell in a column
    fn natural_width(&self, colidx: usize) -> usize {
        let title = self.columns.get(colidx).map_or(0, Column::title_width);
        self.rows
            .iter()
            .map(|row| match row {
                RowData::Separator => 0,
                RowData::Headers => title,
                RowData::Cells(_) => row.cell(colidx).chars().count(),
            })
            .max()
            .unwrap_or(0)
    }

    /// Compute the size allocated for each column.
    /// max_width should not include the space for column separators.
    fn compute_widths(&mut self, max_width: usize) {
        let mut expandable_count: usize = 0;
        let mut expandable_width: usize = 0;
        let mut fixed_width: usize = 0; // minimal requested width

        let natural = (0..self.columns.len())
            .map(|colidx| self.natural_width(colidx))
            .collect::<Vec<_>>();

        for (col, w) in self.columns.iter_mut().zip(natural) {
            match col.width {
                Width::Auto => {
                    col.computed_width = w;
                    col.min_width = w;
                    fixed_width += w;
                }
                Width::ExpandWithMin(col_min) => {
                    col.computed_width = w;
                    col.min_width = std::cmp::min(w, col_min);
                    expandable_width += w;
                    expandable_count += 1;
                    fixed_width += col.min_width;
                }
            }
        }

        if expandable_width + fixed_width > max_width {
            if fixed_width > max_width {
                // Screen is too narrow, so all expandable columns get their
                // minimal size, and rows will wrap.
                for col in self.columns.iter_mut() {
                    if let Width::ExpandWithMin(_) = col.width {
                        col.computed_width = col.min_width;
                    }
                }
            } else {
                // Divide the extra space amongst all expandable columns
                let adjust = (max_width - fixed_width) / expandable_count;
                for col in self.columns.iter_mut() {
                    if let Width::ExpandWithMin(_) = col.width {
                        col.computed_width =
                            std::cmp::min(col.computed_width, col.min_width + adjust);
                    }
                }
            }
        }
    }

    pub fn to_string(&mut self, max_width: usize) -> String {
        let seps = self.columns.len().saturating_sub(1)
            * self.settings.colsep.chars().count();
        self.compute_widths(max_width.saturating_sub(seps));
        let mut result = String::new();

        for row in &self.rows {
            for (colidx, col) in self.columns.iter().enumerate() {
                match row {
                    RowData::Separator => {
                        push_sep(&mut result, col.computed_width);
                    }
                    RowData::Headers => {
                        push_align(
                            &mut result,
                            truncate(
                                col.title.as_deref().unwrap_or(""),
                                col.truncate,
                                col.computed_width,
                            ),
                            col.computed_width,
                            Align::Center,
                        );
                    }
                    RowData::Cells(_) => {
                        push_align(
                            &mut result,
                            truncate(
                                row.cell(colidx),
                                col.truncate,
                                col.computed_width,
                            ),
                            col.computed_width,
                            col.align,
                        );
                    }
                }

                if colidx + 1 < self.columns.len() {
                    result.push_str(&self.settings.colsep);
                }
            }
            result.push('\n');
        }

        result
    }
}

fn trunc_keep_last(s: &str, max_width: usize) -> &str {
    if max_width == 0 {
        return "";
    }
    s.char_indices()
        .rev()
        .nth(max_width - 1)
        .map_or_else(|| s, |(i, _)| s.get(i..).unwrap_or(s))
}
fn trunc_keep_first(s: &str, max_width: usize) -> &str {
    s.char_indices()
        .nth(max_width)
        .map_or_else(|| s, |(i, _)| s.get(..i).unwrap_or(s))
}
fn push_sep(into: &mut String, width: usize) {
    into.push_str(&format!("{:─^width$}", "", width = width,));
}
fn push_align(into: &mut String, value: &str, width: usize, align: Align) {
    match align {
        Align::Left => into.push_str(&format!("{:<width$}", value)),
        Align::Center => into.push_str(&format!("{:^width$}", value)),
        Align::Right => into.push_str(&format!("{:>width$}", value)),
    }
}

/// Truncate the string if necessary
fn truncate(val: &str, truncate: Truncate, width: usize) -> &str {
    if val.chars().count() <= width {
        val
    } else {
        match truncate {
            Truncate::Right => trunc_keep_first(val, width),
            Truncate::Left => trunc_keep_last(val, width),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::tables::{Align, Column, ColumnFooter, Table, Truncate, Width};

    #[test]
    fn test_table() {
        let image = |row: &[&str; 2], idx: &usize| {
            row.get(*idx).map_or(String::new(), |s| s.to_string())
        };

        let columns = vec![
            Column::new(0, &image)
                .with_width(Width::ExpandWithMin(3))
                .with_truncate(Truncate::Left),
            Column::new(1, &image)
                .with_width(Width::Auto)
                .with_align(Align::Right),
        ];
        let mut table =
            Table::new(columns, &crate::tables::Settings::default());

        table.add_row(&["abcdefghijklmnopqrstuvwxyz", "123"]);
        table.add_row(&["abcdefghijklmn", "123456789"]);

        // We have plenty of space to display the columns
        assert_eq!(
            table.to_string(40),
            "abcdefghijklmnopqrstuvwxyz│      123\n\
             abcdefghijklmn            │123456789\n"
        );

        // But we can adapt to shorter widths
        assert_eq!(
            table.to_string(20),
            "qrstuvwxyz│      123\n\
             efghijklmn│123456789\n"
        );

        // First column wants 3 chars, plus separator, plus 9 chars for the
        // second column.  Below 13, rows would wrap.
        assert_eq!(
            table.to_string(13),
            "xyz│      123\n\
             lmn│123456789\n"
        );
        assert_eq!(
            table.to_string(1),
            "xyz│      123\n\
             lmn│123456789\n"
        );
    }

    #[test]
    fn test_headers_and_footer() {
        let image = |row: &(&str, u32), idx: &usize| match *idx {
            0 => row.0.to_string(),
            _ => row.1.to_string(),
        };
        let columns = vec![
            Column::new(0, &image)
                .with_title("Name")
                .with_footer(ColumnFooter::Hide),
            Column::new(1, &image)
                .with_title("Qty")
                .with_align(Align::Right),
        ];
        let mut table =
            Table::new(columns, &crate::tables::Settings::default())
                .with_col_headers();
        table.add_rows(&[("apples", 3), ("kiwis", 12)]);
        table.add_footer(&("", 15));

        assert_eq!(
            table.to_string(80),
            " Name │Qty\n\
             ──────│───\n\
             apples│  3\n\
             kiwis │ 12\n\
             ──────│───\n\
             \u{20}     │ 15\n"
        );
    }
}
