// file: src/ui/prompt.rs
// description: line commands understood by the interactive session

use crate::exporter::ExportFormat;

pub const HELP: &str = "\
Type a query and press Enter to search.
  :json   export the current query as results.json
  :csv    export the current query as results.csv
  :help   show this help
  :quit   leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptCommand {
    /// Any line that is not a command; becomes the query field as typed.
    Query(String),
    Export(ExportFormat),
    Help,
    Quit,
    Unknown(String),
}

impl PromptCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix(':') else {
            return PromptCommand::Query(line.to_string());
        };

        match command.to_ascii_lowercase().as_str() {
            "json" => PromptCommand::Export(ExportFormat::Json),
            "csv" => PromptCommand::Export(ExportFormat::Csv),
            "help" | "h" | "?" => PromptCommand::Help,
            "quit" | "q" | "exit" => PromptCommand::Quit,
            _ => PromptCommand::Unknown(trimmed.to_string()),
        }
    }
}
