use super::sink::ChunkWriter;
use super::sink_xlsx::XlsxChunkWriter;
use super::source::TableSource;
use super::source_calamine::CalamineSource;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Backend {
    /// calamine for reading, rust_xlsxwriter for writing.
    #[default]
    Excel,
}

pub fn open_source(backend: Backend) -> Box<dyn TableSource> {
    match backend {
        Backend::Excel => Box::new(CalamineSource),
    }
}

pub fn open_writer(backend: Backend) -> Box<dyn ChunkWriter> {
    match backend {
        Backend::Excel => Box::new(XlsxChunkWriter::new()),
    }
}
