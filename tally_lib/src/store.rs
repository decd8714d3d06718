use crate::csv_rows;
use crate::errors::{Error, Result};
use crate::expenses::ExpenseRow;
use log::{debug, warn};
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// The rows read from one of the store files.
/// Lines that do not have the expected shape are not returned, but they are
/// counted so that the user can be told about them.
#[derive(Debug)]
pub struct Loaded<T> {
    pub rows: Vec<T>,
    pub skipped: usize,
}

impl<T> Default for Loaded<T> {
    fn default() -> Self {
        Loaded {
            rows: Vec::new(),
            skipped: 0,
        }
    }
}

/// Read a whole file.  A missing file is the same as an empty one.
pub(crate) fn read_file(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{} does not exist, nothing to read", path.display());
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Decode every line of `content` with `build`, skipping (and logging)
/// those that are malformed.
pub(crate) fn load_rows<T>(
    path: &Path,
    content: &[u8],
    build: impl Fn(Vec<String>) -> Option<T>,
) -> Loaded<T> {
    let mut loaded = Loaded::default();
    for record in csv_rows::parse(content) {
        match record {
            Ok(rec) => {
                let line = rec.line;
                match build(rec.fields) {
                    Some(row) => loaded.rows.push(row),
                    None => {
                        warn!(
                            "{}:{line}: unexpected number of fields, skipped",
                            path.display()
                        );
                        loaded.skipped += 1;
                    }
                }
            }
            Err(e) => {
                warn!("{}: {e}, skipped", path.display());
                loaded.skipped += 1;
            }
        }
    }
    loaded
}

/// The file of all recorded expenses, one per line, in insertion order.
/// Nothing is cached: each operation goes back to the file.
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ExpenseStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add one expense at the end of the file, creating it if needed.
    pub fn append(&self, row: &ExpenseRow) -> Result<()> {
        self.append_all(std::slice::from_ref(row))
    }

    /// Add several expenses through a single open of the file.
    pub fn append_all(&self, rows: &[ExpenseRow]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut wtr = csv_rows::writer(file);
        for row in rows {
            wtr.write_record(row.fields())?;
        }
        wtr.flush()?;
        debug!("{}: appended {} row(s)", self.path.display(), rows.len());
        Ok(())
    }

    /// All expenses, in file order
    pub fn read_all(&self) -> Result<Loaded<ExpenseRow>> {
        Ok(match read_file(&self.path)? {
            None => Loaded::default(),
            Some(content) => {
                load_rows(&self.path, &content, ExpenseRow::from_fields)
            }
        })
    }

    /// Remove every expense whose fields are exactly those of `row`, and
    /// return how many were removed.  Field-identical duplicates are all
    /// removed.
    pub fn delete_matching(&self, row: &ExpenseRow) -> Result<usize> {
        self.delete(row, true)
    }

    /// Remove only the first expense whose fields are exactly those of `row`
    pub fn delete_first_matching(&self, row: &ExpenseRow) -> Result<usize> {
        self.delete(row, false)
    }

    fn delete(&self, row: &ExpenseRow, all: bool) -> Result<usize> {
        let content = read_file(&self.path)?.unwrap_or_default();
        let mut kept = Vec::new();
        let mut removed = 0;

        // Lines that have the wrong number of fields are not ours to drop,
        // they are written back.  But a line we cannot decode would be
        // lost, so we refuse to rewrite the file at all.
        for record in csv_rows::parse(&content) {
            let record = record?;
            if (all || removed == 0) && record.fields == row.fields() {
                removed += 1;
            } else {
                kept.push(record.fields);
            }
        }

        if removed == 0 {
            return Err(Error::NothingToDelete(row.to_string()));
        }

        self.rewrite(&kept)?;
        debug!("{}: deleted {removed} row(s)", self.path.display());
        Ok(removed)
    }

    /// Replace the contents of the file.  The new contents are written to a
    /// sibling file first, then renamed over the original, so that a failure
    /// leaves the original untouched.
    fn rewrite(&self, records: &[Vec<String>]) -> Result<()> {
        let tmp = tmp_path(&self.path);
        let result = write_records(&tmp, records)
            .and_then(|()| fs::rename(&tmp, &self.path).map_err(Error::from));
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_records(path: &Path, records: &[Vec<String>]) -> Result<()> {
    let mut wtr = csv_rows::writer(File::create(path)?);
    for fields in records {
        wtr.write_record(fields)?;
    }
    wtr.flush()?;
    wtr.get_ref().sync_all()?;
    Ok(())
}
