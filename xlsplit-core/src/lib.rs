#![forbid(unsafe_code)]

pub mod error;

pub mod domain;
pub mod plan;
pub mod progress;
pub mod request;

pub mod io {
    pub mod backend;
    pub mod sink;
    pub mod sink_xlsx;
    pub mod source;
    pub mod source_calamine;
}

pub mod preview;
pub mod split;

// Re-exports: stable API surface
pub use domain::{Cell, Row, Table};
pub use error::{BackendError, Result, SplitError};
pub use io::backend::Backend;
pub use plan::{ChunkPlan, ChunkSpan};
pub use preview::{PREVIEW_ROWS, TablePreview, preview, preview_rows};
pub use progress::{NoProgress, ProgressSink, SplitPhase};
pub use request::SplitRequest;
pub use split::{SplitResult, Splitter};
