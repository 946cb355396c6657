// file: src/ui/terminal.rs
// description: coloured terminal rendering of the result area

use super::view::{Controls, RenderedItem, ResultArea, ResultView, StatusKind};
use crate::utils::logging::{format_error, format_info, format_warning};
use colored::Colorize;
use std::io::{self, Write};
use tracing::warn;

pub struct TerminalView<W: Write = io::Stdout> {
    out: W,
    export_hint: bool,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            export_hint: false,
        }
    }

    /// Prints which export commands are available after each result list.
    pub fn with_export_hint(mut self, enabled: bool) -> Self {
        self.export_hint = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_area(&mut self, area: &ResultArea, controls: &Controls) -> io::Result<()> {
        match area {
            ResultArea::Empty => {}
            ResultArea::Status(StatusKind::Error, text) => {
                writeln!(self.out, "{}", format_error(text))?;
            }
            ResultArea::Status(StatusKind::Info, text) => {
                writeln!(self.out, "{}", format_info(text))?;
            }
            ResultArea::Items(items) => {
                writeln!(self.out)?;
                for item in items {
                    self.write_item(item)?;
                }
                if self.export_hint && (controls.export_json || controls.export_csv) {
                    writeln!(self.out, "{}", "export: :json | :csv".dimmed())?;
                }
            }
        }
        self.out.flush()
    }

    fn write_item(&mut self, item: &RenderedItem) -> io::Result<()> {
        writeln!(self.out, "{}", format!("#{}", item.rank).dimmed())?;
        writeln!(self.out, "  {}", item.label.bold())?;
        if !item.href.is_empty() {
            writeln!(self.out, "  {}", item.href.cyan().underline())?;
        }
        if !item.snippet.is_empty() {
            writeln!(self.out, "  {}", item.snippet)?;
        }
        writeln!(self.out)
    }
}

impl<W: Write> ResultView for TerminalView<W> {
    fn present(&mut self, area: &ResultArea, controls: &Controls) {
        if let Err(e) = self.write_area(area, controls) {
            warn!("Failed to write results to terminal: {}", e);
        }
    }

    fn alert(&mut self, message: &str) {
        let written = writeln!(self.out, "{}", format_warning(message)).and_then(|_| self.out.flush());
        if let Err(e) = written {
            warn!("Failed to write alert to terminal: {}", e);
        }
    }
}
