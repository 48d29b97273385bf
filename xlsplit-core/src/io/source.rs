// xlsplit_core/src/io/source.rs
use crate::domain::Table;
use crate::error::BackendError;
use std::path::Path;

pub trait TableSource: Send + Sync {
    /// Load the header and every data row of the first worksheet.
    fn load(&self, path: &Path) -> Result<Table, BackendError>;

    /// Load the header and at most `max_rows` data rows.
    fn load_head(&self, path: &Path, max_rows: usize) -> Result<Table, BackendError> {
        let mut table = self.load(path)?;
        table.rows.truncate(max_rows);
        Ok(table)
    }
}
