use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

use super::sink::ChunkWriter;
use crate::domain::{Cell, Row};
use crate::error::BackendError;

const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";
const DURATION_FORMAT: &str = "[h]:mm:ss";

/// Writes each part as a single-sheet `.xlsx` workbook.
pub struct XlsxChunkWriter {
    datetime: Format,
    duration: Format,
}

impl XlsxChunkWriter {
    pub fn new() -> Self {
        Self {
            datetime: Format::new().set_num_format(DATETIME_FORMAT),
            duration: Format::new().set_num_format(DURATION_FORMAT),
        }
    }

    fn write_row(
        &self,
        sheet: &mut Worksheet,
        row: usize,
        cells: &[Cell],
    ) -> Result<(), BackendError> {
        let row = u32::try_from(row)
            .map_err(|_| BackendError::Format(format!("row {row} is beyond the worksheet limit")))?;
        for (col, cell) in cells.iter().enumerate() {
            let col = u16::try_from(col).map_err(|_| {
                BackendError::Format(format!("column {col} is beyond the worksheet limit"))
            })?;
            match cell {
                Cell::Empty => {}
                Cell::String(s) | Cell::DateTimeIso(s) | Cell::DurationIso(s) | Cell::Error(s) => {
                    sheet.write_string(row, col, s)?;
                }
                Cell::Float(v) => {
                    sheet.write_number(row, col, *v)?;
                }
                Cell::Int(v) => {
                    sheet.write_number(row, col, *v as f64)?;
                }
                Cell::Bool(b) => {
                    sheet.write_boolean(row, col, *b)?;
                }
                Cell::DateTime(v) => {
                    sheet.write_number_with_format(row, col, *v, &self.datetime)?;
                }
                Cell::Duration(v) => {
                    sheet.write_number_with_format(row, col, *v, &self.duration)?;
                }
            }
        }
        Ok(())
    }
}

impl Default for XlsxChunkWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkWriter for XlsxChunkWriter {
    fn extension(&self) -> &str {
        "xlsx"
    }

    fn write_chunk(&self, path: &Path, header: &[Cell], rows: &[Row]) -> Result<(), BackendError> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        self.write_row(sheet, 0, header)?;
        for (i, row) in rows.iter().enumerate() {
            self.write_row(sheet, i + 1, row)?;
        }
        workbook.save(path)?;
        Ok(())
    }
}
