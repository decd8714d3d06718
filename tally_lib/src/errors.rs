#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input from the user was rejected before touching any file.
    #[error("{0}")]
    Validation(String),

    #[error("No expense matches {0}")]
    NothingToDelete(String),

    #[error("line {line}: {msg}")]
    Csv { line: usize, msg: String },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        let line = e.position().map_or(0, |p| p.line() as usize);
        let msg = e.to_string();
        if let csv::ErrorKind::Io(io) = e.into_kind() {
            Error::Io(io)
        } else {
            Error::Csv { line, msg }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use crate::errors::Error;

    #[test]
    fn test_display() {
        let e = Error::Validation("Amount must be a number!".into());
        assert_eq!(e.to_string(), "Amount must be a number!");

        let e = Error::Csv {
            line: 3,
            msg: "invalid UTF-8".into(),
        };
        assert_eq!(e.to_string(), "line 3: invalid UTF-8");
    }

    #[test]
    fn test_from_csv() {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(&b"a,b\n\xff\n"[..]);
        let e: Error = reader.records().nth(1).unwrap().unwrap_err().into();
        assert!(matches!(e, Error::Csv { line: 2, .. }));

        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let e: Error = csv::Error::from(io).into();
        assert!(matches!(e, Error::Io(_)));
    }
}
