use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{Result, SplitError};
use crate::io::backend::{Backend, open_source, open_writer};
use crate::io::sink::ChunkWriter;
use crate::io::source::TableSource;
use crate::plan::ChunkPlan;
use crate::preview::{TablePreview, preview_with};
use crate::progress::{ProgressSink, SplitPhase};
use crate::request::SplitRequest;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SplitResult {
    pub chunk_count: usize,
    pub total_rows: usize,
    pub output_dir: PathBuf,
    /// Written files in part order.
    pub files: Vec<PathBuf>,
}

/// Stateless between runs; each `run` loads the source, writes every part
/// and drops the table.
pub struct Splitter {
    source: Box<dyn TableSource>,
    writer: Box<dyn ChunkWriter>,
}

impl Default for Splitter {
    fn default() -> Self {
        Self::with_backend(Backend::default())
    }
}

impl Splitter {
    pub fn new(source: Box<dyn TableSource>, writer: Box<dyn ChunkWriter>) -> Self {
        Self { source, writer }
    }

    pub fn with_backend(backend: Backend) -> Self {
        Self::new(open_source(backend), open_writer(backend))
    }

    pub fn preview(&self, source: &str, max_rows: usize) -> Result<TablePreview> {
        preview_with(self.source.as_ref(), source, max_rows)
    }

    /// Validate raw inputs, then `run`. Validation failures are reported to
    /// `progress` as `Failed` like any other failure.
    pub fn split(
        &self,
        source: Option<&str>,
        output_dir: Option<&str>,
        rows_per_file: Option<&str>,
        progress: &mut dyn ProgressSink,
    ) -> Result<SplitResult> {
        match SplitRequest::parse(source, output_dir, rows_per_file) {
            Ok(request) => self.run(&request, progress),
            Err(e) => {
                progress.phase(SplitPhase::Validating);
                progress.phase(SplitPhase::Failed);
                Err(e)
            }
        }
    }

    pub fn run(
        &self,
        request: &SplitRequest,
        progress: &mut dyn ProgressSink,
    ) -> Result<SplitResult> {
        let outcome = self.execute(request, progress);
        progress.phase(if outcome.is_ok() {
            SplitPhase::Done
        } else {
            SplitPhase::Failed
        });
        outcome
    }

    fn execute(
        &self,
        request: &SplitRequest,
        progress: &mut dyn ProgressSink,
    ) -> Result<SplitResult> {
        progress.phase(SplitPhase::Validating);
        if request.source.as_os_str().is_empty() {
            return Err(SplitError::Validation("missing field: source".into()));
        }
        if request.output_dir.as_os_str().is_empty() {
            return Err(SplitError::Validation("missing field: output dir".into()));
        }
        let base = base_name(&request.source)?;

        progress.phase(SplitPhase::Loading);
        let table = self
            .source
            .load(&request.source)
            .map_err(|e| SplitError::Read {
                path: request.source.clone(),
                source: e,
            })?;
        let ext = self.writer.extension();
        let plan = ChunkPlan::new(table.row_count(), request.rows_per_file);
        let total = plan.chunk_count();
        info!(
            rows = plan.total_rows(),
            columns = table.header.len(),
            parts = total,
            "loaded {}",
            request.source.display()
        );
        progress.start(total);

        let mut files = Vec::with_capacity(total);
        for span in plan.spans() {
            progress.phase(SplitPhase::Writing(span.ordinal()));
            let path = request
                .output_dir
                .join(output_file_name(&base, span.ordinal(), ext));
            self.writer
                .write_chunk(&path, &table.header, table.rows_in(span))
                .map_err(|e| SplitError::Write {
                    path: path.clone(),
                    chunk: span.ordinal(),
                    written: files.len(),
                    source: e,
                })?;
            debug!(part = span.ordinal(), rows = span.len(), "wrote {}", path.display());
            progress.file_written(span.ordinal(), &path);
            files.push(path);
            progress.chunk_written(span.ordinal(), total);
            progress.yield_now();
        }

        info!(parts = total, "split {} done", request.source.display());
        Ok(SplitResult {
            chunk_count: total,
            total_rows: plan.total_rows(),
            output_dir: request.output_dir.clone(),
            files,
        })
    }
}

/// `{base}_parte_{ordinal}.{ext}`
pub fn output_file_name(base: &str, ordinal: usize, ext: &str) -> String {
    format!("{base}_parte_{ordinal}.{ext}")
}

/// Source file name without its extension.
pub fn base_name(source: &Path) -> Result<String> {
    source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| {
            SplitError::Validation(format!("{} has no file name", source.display()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parts_after_source_stem() {
        let base = base_name(Path::new("/data/exports/sales.2024.xls")).unwrap();
        assert_eq!(base, "sales.2024");
        assert_eq!(output_file_name(&base, 3, "xlsx"), "sales.2024_parte_3.xlsx");
    }

    #[test]
    fn path_without_file_name_has_no_base() {
        let err = base_name(Path::new("/")).unwrap_err();
        assert!(matches!(err, SplitError::Validation(_)), "{err:?}");
    }
}
