// file: src/ui/mod.rs
// description: result area model and its renderers
// reference: internal module structure

pub mod html;
pub mod messages;
pub mod prompt;
pub mod terminal;
pub mod view;

pub use html::HtmlView;
pub use prompt::PromptCommand;
pub use terminal::TerminalView;
pub use view::{Controls, MemoryView, RenderedItem, ResultArea, ResultView, StatusKind};
