// file: src/ui/view.rs
// description: result area state and the view trait that displays it

use super::messages;
use crate::exporter::ExportFormat;
use crate::models::ResultItem;

/// Everything the result container can show. Each update replaces the
/// previous content as a whole.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultArea {
    #[default]
    Empty,
    Status(StatusKind, String),
    Items(Vec<RenderedItem>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

impl ResultArea {
    pub fn info(message: &str) -> Self {
        ResultArea::Status(StatusKind::Info, message.to_string())
    }

    pub fn error(message: &str) -> Self {
        ResultArea::Status(StatusKind::Error, message.to_string())
    }

    /// Number of rendered result blocks; zero for status text.
    pub fn block_count(&self) -> usize {
        match self {
            ResultArea::Items(items) => items.len(),
            _ => 0,
        }
    }

    pub fn status_text(&self) -> Option<&str> {
        match self {
            ResultArea::Status(_, text) => Some(text),
            _ => None,
        }
    }
}

/// One result block as displayed: rank badge, link and snippet line.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedItem {
    pub rank: i64,
    pub href: String,
    pub label: String,
    pub snippet: String,
}

impl RenderedItem {
    pub fn target(&self) -> &'static str {
        messages::LINK_TARGET
    }

    pub fn rel(&self) -> &'static str {
        messages::LINK_REL
    }
}

impl From<&ResultItem> for RenderedItem {
    fn from(item: &ResultItem) -> Self {
        Self {
            rank: item.rank,
            href: item.url.clone(),
            label: item.title_or(messages::UNTITLED).to_string(),
            snippet: item.snippet_or_empty().to_string(),
        }
    }
}

/// Enablement of the interactive affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub submit: bool,
    pub export_json: bool,
    pub export_csv: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            submit: true,
            export_json: false,
            export_csv: false,
        }
    }
}

impl Controls {
    pub fn set_exports(&mut self, enabled: bool) {
        self.export_json = enabled;
        self.export_csv = enabled;
    }

    pub fn export_enabled(&self, format: ExportFormat) -> bool {
        match format {
            ExportFormat::Json => self.export_json,
            ExportFormat::Csv => self.export_csv,
        }
    }
}

/// Display surface driven by `SearchClient`.
pub trait ResultView {
    /// Shows `area` in place of whatever was displayed before.
    fn present(&mut self, area: &ResultArea, controls: &Controls);

    /// Transient message that does not touch the result area.
    fn alert(&mut self, message: &str);
}

/// Drives two views at once, e.g. the terminal plus an HTML fragment.
impl<A: ResultView, B: ResultView> ResultView for (A, B) {
    fn present(&mut self, area: &ResultArea, controls: &Controls) {
        self.0.present(area, controls);
        self.1.present(area, controls);
    }

    fn alert(&mut self, message: &str) {
        self.0.alert(message);
        self.1.alert(message);
    }
}

/// Keeps the last presented state and every alert. Useful for embedding and
/// for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    pub area: ResultArea,
    pub controls: Controls,
    pub alerts: Vec<String>,
    pub presents: usize,
}

impl ResultView for MemoryView {
    fn present(&mut self, area: &ResultArea, controls: &Controls) {
        self.area = area.clone();
        self.controls = *controls;
        self.presents += 1;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
