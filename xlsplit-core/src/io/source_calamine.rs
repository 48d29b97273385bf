use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;

use super::source::TableSource;
use crate::domain::{Cell, Row, Table};
use crate::error::BackendError;

/// Reads `.xlsx`/`.xlsm`/`.xlsb`/`.xls`/`.ods` workbooks; the format is
/// detected from the file itself. Only the first worksheet is used and its
/// first row is the header.
pub struct CalamineSource;

impl CalamineSource {
    fn first_sheet(path: &Path) -> Result<Range<Data>, BackendError> {
        let mut workbook = open_workbook_auto(path)?;
        match workbook.worksheet_range_at(0) {
            Some(range) => Ok(range?),
            None => Err(BackendError::Format("workbook has no worksheets".into())),
        }
    }
}

impl TableSource for CalamineSource {
    fn load(&self, path: &Path) -> Result<Table, BackendError> {
        let range = Self::first_sheet(path)?;
        Ok(table_from_rows(range.rows(), usize::MAX))
    }

    fn load_head(&self, path: &Path, max_rows: usize) -> Result<Table, BackendError> {
        let range = Self::first_sheet(path)?;
        Ok(table_from_rows(range.rows(), max_rows))
    }
}

fn table_from_rows<'a>(mut rows: impl Iterator<Item = &'a [Data]>, max_rows: usize) -> Table {
    let Some(header) = rows.next() else {
        return Table::default();
    };
    Table::new(
        to_row(header),
        rows.take(max_rows).map(to_row).collect(),
    )
}

fn to_row(cells: &[Data]) -> Row {
    cells.iter().map(to_cell).collect()
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::String(s.clone()),
        Data::Float(f) => Cell::Float(*f),
        Data::Int(i) => Cell::Int(*i),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) if dt.is_duration() => Cell::Duration(dt.as_f64()),
        Data::DateTime(dt) => Cell::DateTime(dt.as_f64()),
        Data::DateTimeIso(s) => Cell::DateTimeIso(s.clone()),
        Data::DurationIso(s) => Cell::DurationIso(s.clone()),
        Data::Error(e) => Cell::Error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_row_becomes_header() {
        let raw = vec![
            vec![Data::String("id".into()), Data::String("ok".into())],
            vec![Data::Float(1.0), Data::Bool(true)],
            vec![Data::Int(2), Data::Empty],
        ];
        let table = table_from_rows(raw.iter().map(Vec::as_slice), usize::MAX);
        assert_eq!(table.column_names(), vec!["id", "ok"]);
        assert_eq!(
            table.rows,
            vec![
                vec![Cell::Float(1.0), Cell::Bool(true)],
                vec![Cell::Int(2), Cell::Empty],
            ]
        );
    }

    #[test]
    fn head_limits_data_rows_only() {
        let raw: Vec<Vec<Data>> = (0..20).map(|i| vec![Data::Int(i)]).collect();
        let table = table_from_rows(raw.iter().map(Vec::as_slice), 10);
        assert_eq!(table.header, vec![Cell::Int(0)]);
        assert_eq!(table.row_count(), 10);
        assert_eq!(table.rows[9], vec![Cell::Int(10)]);
    }

    #[test]
    fn blank_sheet_is_an_empty_table() {
        let raw: Vec<Vec<Data>> = Vec::new();
        let table = table_from_rows(raw.iter().map(Vec::as_slice), usize::MAX);
        assert_eq!(table, Table::default());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CalamineSource
            .load(&dir.path().join("nope.xlsx"))
            .unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
