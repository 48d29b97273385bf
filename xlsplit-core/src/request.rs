use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::error::{Result, SplitError};

/// Validated inputs for one split run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitRequest {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub rows_per_file: NonZeroUsize,
}

impl SplitRequest {
    pub fn new(
        source: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        rows_per_file: NonZeroUsize,
    ) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
            rows_per_file,
        }
    }

    /// Build a request from raw form/flag values. Presence of all three
    /// fields is checked before the row count is parsed; nothing touches
    /// the filesystem.
    pub fn parse(
        source: Option<&str>,
        output_dir: Option<&str>,
        rows_per_file: Option<&str>,
    ) -> Result<Self> {
        let source = require("source", source)?;
        let output_dir = require("output dir", output_dir)?;
        let rows = require("rows per file", rows_per_file)?;
        let rows_per_file = parse_rows_per_file(rows)?;
        Ok(Self::new(source, output_dir, rows_per_file))
    }
}

/// Reject absent or blank values with `missing field: <name>`.
pub fn require<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(SplitError::Validation(format!("missing field: {field}"))),
    }
}

pub fn parse_rows_per_file(raw: &str) -> Result<NonZeroUsize> {
    let invalid = || {
        SplitError::Validation(format!(
            "rows per file must be a positive integer, got {raw:?}"
        ))
    };
    let n: i64 = raw.trim().parse().map_err(|_| invalid())?;
    usize::try_from(n)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(invalid)
}
