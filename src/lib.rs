// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod exporter;
pub mod models;
pub mod ui;
pub mod utils;

pub use api::{HttpSearchApi, SearchApi};
pub use config::{ApiConfig, Config, ExportConfig};
pub use controller::{DownloadOutcome, SearchClient, SearchState, SubmitOutcome};
pub use error::{ClientError, Result};
pub use exporter::{DownloadSink, ExportFormat, FileSaver};
pub use models::{Query, ResultItem, SearchRequest, SearchResponse};
pub use ui::{
    Controls, HtmlView, MemoryView, PromptCommand, RenderedItem, ResultArea, ResultView,
    TerminalView,
};
pub use utils::{RequestTimer, Validator};
