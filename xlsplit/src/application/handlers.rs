use std::io::Write;
use std::path::Path;

use tracing::{debug, warn};
use xlsplit_core::request::require;
use xlsplit_core::{ProgressSink, SplitPhase, SplitResult, Splitter};
use xlsplit_core::Result;

/// Reports each written part on stderr.
#[derive(Default)]
struct StderrProgress {
    total: usize,
}

fn progress_line(ordinal: usize, total: usize, path: &Path) -> String {
    format!("[{ordinal}/{total}] wrote {}", path.display())
}

impl ProgressSink for StderrProgress {
    fn start(&mut self, total: usize) {
        debug!(parts = total, "writing");
        self.total = total;
    }

    fn file_written(&mut self, ordinal: usize, path: &Path) {
        eprintln!("{}", progress_line(ordinal, self.total, path));
    }

    fn chunk_written(&mut self, _completed: usize, _total: usize) {}

    fn yield_now(&mut self) {
        let _ = std::io::stderr().flush();
    }

    fn phase(&mut self, phase: SplitPhase) {
        debug!(?phase, "split phase");
    }
}

pub fn handle_split(
    source: Option<String>,
    output_dir: Option<String>,
    rows_per_file: Option<String>,
    json: bool,
) -> Result<()> {
    let result = Splitter::default().split(
        source.as_deref(),
        output_dir.as_deref(),
        rows_per_file.as_deref(),
        &mut StderrProgress::default(),
    )?;
    report(&result, json);
    Ok(())
}

fn report(result: &SplitResult, json: bool) {
    if json {
        match serde_json::to_string_pretty(result) {
            Ok(text) => {
                println!("{text}");
                return;
            }
            Err(e) => warn!("cannot render result as JSON: {e}"),
        }
    }
    println!(
        "split into {} parts in {}",
        result.chunk_count,
        result.output_dir.display()
    );
}

pub fn handle_preview(source: Option<String>, rows: usize) -> Result<()> {
    let source = require("source", source.as_deref())?;
    let preview = Splitter::default().preview(source, rows)?;
    println!("{preview}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn fixture(dir: &std::path::Path, rows: u32) -> String {
        let path = dir.join("clientes.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "id").unwrap();
        for r in 1..=rows {
            sheet.write_number(r, 0, r).unwrap();
        }
        workbook.save(&path).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn split_writes_parts() {
        let dir = tempfile::tempdir().unwrap();
        let source = fixture(dir.path(), 7);
        let out = dir.path().to_string_lossy().into_owned();

        handle_split(Some(source), Some(out), Some("3".into()), true).unwrap();

        for i in 1..=3 {
            assert!(dir.path().join(format!("clientes_parte_{i}.xlsx")).is_file());
        }
        assert!(!dir.path().join("clientes_parte_4.xlsx").exists());
    }

    #[test]
    fn progress_names_the_written_file() {
        let mut progress = StderrProgress::default();
        progress.start(3);
        let line = progress_line(2, progress.total, Path::new("out/clientes_parte_2.xlsx"));
        assert_eq!(line, "[2/3] wrote out/clientes_parte_2.xlsx");
    }

    #[test]
    fn missing_rows_is_exit_code_one() {
        let dir = tempfile::tempdir().unwrap();
        let source = fixture(dir.path(), 2);
        let err = handle_split(Some(source), Some("out".into()), None, false).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn preview_of_missing_file_is_exit_code_two() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("x.xlsx").to_string_lossy().into_owned();
        let err = handle_preview(Some(missing), 10).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(handle_preview(None, 10).unwrap_err().exit_code(), 1);
    }
}
