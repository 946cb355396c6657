// file: src/exporter/mod.rs
// description: export format and download sink exports
// reference: internal module structure

pub mod format;
pub mod saver;

pub use format::ExportFormat;
pub use saver::{DownloadSink, FileSaver};
