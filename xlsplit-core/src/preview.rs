use std::fmt;
use std::path::Path;

use crate::domain::{Row, Table};
use crate::error::{Result, SplitError};
use crate::io::backend::{Backend, open_source};
use crate::io::source::TableSource;
use crate::request::require;

pub const PREVIEW_ROWS: usize = 10;

/// First rows of a sheet, rendered as an aligned text table by `Display`.
#[derive(Clone, Debug, PartialEq)]
pub struct TablePreview {
    pub header: Row,
    pub rows: Vec<Row>,
}

impl From<Table> for TablePreview {
    fn from(t: Table) -> Self {
        Self {
            header: t.header,
            rows: t.rows,
        }
    }
}

pub fn preview(source: &str) -> Result<TablePreview> {
    preview_rows(source, PREVIEW_ROWS)
}

pub fn preview_rows(source: &str, max_rows: usize) -> Result<TablePreview> {
    preview_with(open_source(Backend::Excel).as_ref(), source, max_rows)
}

pub fn preview_with(
    reader: &dyn TableSource,
    source: &str,
    max_rows: usize,
) -> Result<TablePreview> {
    let source = require("source", Some(source))?;
    let path = Path::new(source);
    let table = reader
        .load_head(path, max_rows)
        .map_err(|e| SplitError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(table.into())
}

impl fmt::Display for TablePreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.header.iter().map(ToString::to_string).collect();
        if self.rows.is_empty() {
            return write!(f, "Empty table\nColumns: [{}]", names.join(", "));
        }

        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|r| r.iter().map(ToString::to_string).collect())
            .collect();
        let ncols = cells.iter().map(Vec::len).chain([names.len()]).max().unwrap_or(0);

        let index_w = (self.rows.len() - 1).to_string().len();
        let mut widths = vec![0usize; ncols];
        for line in std::iter::once(&names).chain(cells.iter()) {
            for (w, s) in widths.iter_mut().zip(line) {
                *w = (*w).max(s.chars().count());
            }
        }

        write!(f, "{:>index_w$}", "")?;
        for (c, &w) in widths.iter().enumerate() {
            write!(f, "  {:>w$}", names.get(c).map_or("", String::as_str))?;
        }
        for (i, line) in cells.iter().enumerate() {
            write!(f, "\n{i:>index_w$}")?;
            for (c, &w) in widths.iter().enumerate() {
                write!(f, "  {:>w$}", line.get(c).map_or("", String::as_str))?;
            }
        }
        Ok(())
    }
}
