// xlsplit_core/src/io/sink.rs
use crate::domain::{Cell, Row};
use crate::error::BackendError;
use std::path::Path;

pub trait ChunkWriter: Send + Sync {
    /// File extension (without the dot) of the files this writer produces.
    fn extension(&self) -> &str;

    /// Write `header` followed by `rows` as a fresh file at `path`,
    /// replacing anything already there.
    fn write_chunk(&self, path: &Path, header: &[Cell], rows: &[Row]) -> Result<(), BackendError>;
}
