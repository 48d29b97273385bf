use std::path::PathBuf;
use thiserror::Error;

/// Failure inside a spreadsheet backend, before it is attributed to a phase.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Workbook(#[from] calamine::Error),

    #[error("{0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Format error: {0}")]
    Format(String),
}

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: BackendError,
    },

    #[error(
        "cannot write part {chunk} to {}: {source} ({written} part(s) already written)",
        path.display()
    )]
    Write {
        path: PathBuf,
        chunk: usize,
        written: usize,
        #[source]
        source: BackendError,
    },
}

impl SplitError {
    /// Process exit status for the error category: 1 validation, 2 read, 3 write.
    pub fn exit_code(&self) -> u8 {
        match self {
            SplitError::Validation(_) => 1,
            SplitError::Read { .. } => 2,
            SplitError::Write { .. } => 3,
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            SplitError::Validation(_) => "validation",
            SplitError::Read { .. } => "read",
            SplitError::Write { .. } => "write",
        }
    }
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, SplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_category() {
        let v = SplitError::Validation("missing field: source".into());
        let r = SplitError::Read {
            path: "in.xlsx".into(),
            source: BackendError::Format("no worksheets".into()),
        };
        let w = SplitError::Write {
            path: "out/in_parte_2.xlsx".into(),
            chunk: 2,
            written: 1,
            source: std::io::Error::other("disk full").into(),
        };
        assert_eq!((v.exit_code(), r.exit_code(), w.exit_code()), (1, 2, 3));
        assert_eq!(w.category(), "write");
    }

    #[test]
    fn messages_carry_the_cause() {
        let w = SplitError::Write {
            path: "out/in_parte_2.xlsx".into(),
            chunk: 2,
            written: 1,
            source: std::io::Error::other("disk full").into(),
        };
        let msg = w.to_string();
        assert!(msg.contains("part 2"), "{msg}");
        assert!(msg.contains("disk full"), "{msg}");
        assert!(msg.contains("1 part(s) already written"), "{msg}");
    }
}
