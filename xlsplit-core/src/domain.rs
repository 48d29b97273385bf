// xlsplit_core/src/domain.rs
use std::fmt;

use crate::plan::ChunkSpan;

/// One spreadsheet cell, kept in the type the reader produced so it can be
/// written back without conversion.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    String(String),
    Float(f64),
    Int(i64),
    Bool(bool),
    /// Excel serial date-time (days since the workbook epoch).
    DateTime(f64),
    /// Excel serial duration in days.
    Duration(f64),
    DateTimeIso(String),
    DurationIso(String),
    Error(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::String(s) | Cell::DateTimeIso(s) | Cell::DurationIso(s) | Cell::Error(s) => {
                f.write_str(s)
            }
            Cell::Float(v) | Cell::DateTime(v) | Cell::Duration(v) => write!(f, "{v}"),
            Cell::Int(v) => write!(f, "{v}"),
            Cell::Bool(true) => f.write_str("True"),
            Cell::Bool(false) => f.write_str("False"),
        }
    }
}

pub type Row = Vec<Cell>;

/// A loaded worksheet: the header row plus every data row below it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub header: Row,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(header: Row, rows: Vec<Row>) -> Self {
        Self { header, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.header.iter().map(ToString::to_string).collect()
    }

    /// Rows covered by `span`; spans past the end are clamped.
    pub fn rows_in(&self, span: ChunkSpan) -> &[Row] {
        let end = span.end.min(self.rows.len());
        let start = span.start.min(end);
        &self.rows[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_render_like_their_values() {
        assert_eq!(Cell::Float(2020.0).to_string(), "2020");
        assert_eq!(Cell::Float(1.5).to_string(), "1.5");
        assert_eq!(Cell::Int(-7).to_string(), "-7");
        assert_eq!(Cell::Bool(true).to_string(), "True");
        assert_eq!(Cell::Empty.to_string(), "");
        assert_eq!(Cell::Error("#DIV/0!".into()).to_string(), "#DIV/0!");
    }

    #[test]
    fn rows_in_clamps_to_table() {
        let rows = (0..5).map(|i| vec![Cell::Int(i)]).collect();
        let table = Table::new(vec![Cell::String("n".into())], rows);
        let tail = table.rows_in(ChunkSpan {
            index: 1,
            start: 3,
            end: 6,
        });
        assert_eq!(tail, &[vec![Cell::Int(3)], vec![Cell::Int(4)]]);
        assert!(
            table
                .rows_in(ChunkSpan {
                    index: 9,
                    start: 9,
                    end: 12
                })
                .is_empty()
        );
        assert_eq!(table.column_names(), vec!["n".to_string()]);
    }
}
