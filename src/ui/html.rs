// file: src/ui/html.rs
// description: renders the result area as an HTML fragment

use super::view::{Controls, RenderedItem, ResultArea, ResultView};

/// Holds the markup of the result container. Every `present` rebuilds the
/// fragment from scratch. Alerts are not part of the fragment.
#[derive(Debug, Clone, Default)]
pub struct HtmlView {
    markup: String,
}

impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }
}

impl ResultView for HtmlView {
    fn present(&mut self, area: &ResultArea, _controls: &Controls) {
        self.markup = render_area(area);
    }

    fn alert(&mut self, _message: &str) {}
}

fn render_area(area: &ResultArea) -> String {
    match area {
        ResultArea::Empty => String::new(),
        ResultArea::Status(_, text) => escape(text),
        ResultArea::Items(items) => items.iter().map(render_item).collect(),
    }
}

fn render_item(item: &RenderedItem) -> String {
    let heading = if item.href.is_empty() {
        escape(&item.label)
    } else {
        format!(
            "<a href=\"{}\" target=\"{}\" rel=\"{}\">{}</a>",
            escape(&item.href),
            item.target(),
            item.rel(),
            escape(&item.label),
        )
    };

    format!(
        "<div class=\"item\">\n  <small class=\"meta\">#{}</small>\n  <h3>{}</h3>\n  <p>{}</p>\n</div>\n",
        item.rank,
        heading,
        escape(&item.snippet),
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
