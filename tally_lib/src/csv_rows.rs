//! Reading and writing the comma-separated lines of the store files.
//!
//! Fields are quoted only when they contain a comma, a double quote or a
//! line break.  Records may have any number of fields: checking the shape
//! is up to the caller, so that a malformed line can be skipped (or kept
//! as is) rather than failing the whole file.

use crate::errors::Result;
use std::io::Write;

/// One non-blank record of a file
#[derive(Debug, PartialEq)]
pub struct Record {
    // Line on which the record starts, 1-based
    pub line: usize,
    pub fields: Vec<String>,
}

/// A writer producing one "\n"-terminated line per record, no header.
pub fn writer<W: Write>(into: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(into)
}

/// Split a whole file into records.  Blank lines are dropped.  A record
/// that cannot be decoded (invalid UTF-8) is returned as an error, so that
/// the caller can decide whether to skip it.
pub fn parse(content: &[u8]) -> Vec<Result<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content);
    reader
        .records()
        .map(|record| {
            let record = record?;
            Ok(Record {
                line: record.position().map_or(0, |p| p.line() as usize),
                fields: record.iter().map(String::from).collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use crate::csv_rows::{parse, writer, Record};
    use crate::errors::Error;

    fn fields(content: &str) -> Vec<Vec<String>> {
        parse(content.as_bytes())
            .into_iter()
            .map(|r| r.unwrap().fields)
            .collect()
    }

    #[test]
    fn test_write() {
        let mut wtr = writer(Vec::new());
        wtr.write_record(["2024-01-15", "Coffee", "4.50", "Food"]).unwrap();
        wtr.write_record(["2024-01-16", "Rice, beans", "3", "Food"]).unwrap();
        wtr.write_record(["2024-01-17", "The \"best\"", "1", "Fun"]).unwrap();
        wtr.write_record(["not", "an", "expense"]).unwrap();
        let out = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        assert_eq!(
            out,
            "2024-01-15,Coffee,4.50,Food\n\
             2024-01-16,\"Rice, beans\",3,Food\n\
             2024-01-17,\"The \"\"best\"\"\",1,Fun\n\
             not,an,expense\n"
        );
    }

    #[test]
    fn test_read() {
        assert_eq!(
            fields("a,b,c\r\n\r\n\"x, y\",\"say \"\"hi\"\"\",\n"),
            vec![
                vec!["a".to_string(), "b".into(), "c".into()],
                vec!["x, y".to_string(), "say \"hi\"".into(), "".into()],
            ]
        );

        // No trailing newline on the last line
        assert_eq!(fields("a,b"), vec![vec!["a".to_string(), "b".into()]]);
        assert!(parse(b"").is_empty());

        // An unterminated quote runs to the end of the file
        assert_eq!(
            fields("a,b\n\"oops,c\n"),
            vec![
                vec!["a".to_string(), "b".into()],
                vec!["oops,c\n".to_string()],
            ]
        );
    }

    #[test]
    fn test_line_numbers() {
        let records = parse(b"a\n\"multi\nline\"\nb\n");
        assert_eq!(
            records.into_iter().map(|r| r.unwrap()).collect::<Vec<_>>(),
            vec![
                Record { line: 1, fields: vec!["a".into()] },
                Record { line: 2, fields: vec!["multi\nline".into()] },
                Record { line: 4, fields: vec!["b".into()] },
            ]
        );
    }

    #[test]
    fn test_invalid_utf8() {
        let records = parse(b"a,b\n\xff,c\nd\n");
        assert_eq!(records.len(), 3);
        assert!(matches!(records.first(), Some(Ok(_))));
        assert!(matches!(records.get(1), Some(Err(Error::Csv { .. }))));
        assert!(matches!(
            records.get(2),
            Some(Ok(Record { line: 3, .. }))
        ));
    }
}
