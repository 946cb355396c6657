// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use search_client::ui::{messages, prompt};
use search_client::utils::logging::{format_error, format_success};
use search_client::{
    Config, DownloadOutcome, ExportFormat, FileSaver, HtmlView, HttpSearchApi, PromptCommand,
    ResultView, SearchClient, SubmitOutcome, TerminalView, Validator,
};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "search_client")]
#[command(version)]
#[command(about = "Search a remote search API and export results as JSON or CSV", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Overrides api.base_url from the configuration
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one search and print the ranked results
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Also write the rendered results as an HTML fragment
        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,
    },

    /// Export the results of a query as results.json or results.csv
    Download {
        #[arg(value_enum)]
        format: ExportFormat,

        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Line based session: each line is a query, :json / :csv export it
    Interactive {
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if !cli.color {
        colored::control::set_override(false);
    }
    search_client::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let mut config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    config.validate().context("Invalid configuration")?;

    let succeeded = match cli.command {
        Commands::Search { query, html } => cmd_search(&config, &query.join(" "), html).await?,
        Commands::Download {
            format,
            query,
            output,
        } => cmd_download(&config, format, &query.join(" "), output).await?,
        Commands::Interactive { output } => {
            cmd_interactive(&config, output).await?;
            true
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn output_dir(config: &Config, output: Option<PathBuf>) -> Result<PathBuf> {
    let dir = output.unwrap_or_else(|| config.export.output_dir.clone());
    if dir.exists() {
        Validator::validate_directory(&dir).context("Invalid output directory")?;
    }
    Ok(dir)
}

async fn cmd_search(config: &Config, query: &str, html: Option<PathBuf>) -> Result<bool> {
    let api = HttpSearchApi::new(&config.api).context("Failed to create HTTP client")?;
    let saver = FileSaver::new(&config.export.output_dir);
    let view = (TerminalView::stdout(), HtmlView::new());
    let mut client = SearchClient::new(api, view, saver);

    client.set_input(query);
    let outcome = client.submit().await;

    if let Some(path) = html {
        std::fs::write(&path, client.view().1.markup())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote HTML fragment to {}", path.display());
    }

    Ok(matches!(outcome, SubmitOutcome::Rendered(_)))
}

async fn cmd_download(
    config: &Config,
    format: ExportFormat,
    query: &str,
    output: Option<PathBuf>,
) -> Result<bool> {
    let api = HttpSearchApi::new(&config.api).context("Failed to create HTTP client")?;
    let saver = FileSaver::new(output_dir(config, output)?);
    let mut client = SearchClient::new(api, TerminalView::stdout(), saver);

    client.set_input(query);
    match client.download(format).await {
        DownloadOutcome::Saved(path) => {
            println!("{}", format_success(&format!("Saved {}", path.display())));
            Ok(true)
        }
        DownloadOutcome::NeedsQuery | DownloadOutcome::Failed => Ok(false),
    }
}

async fn cmd_interactive(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let api = HttpSearchApi::new(&config.api).context("Failed to create HTTP client")?;
    let saver = FileSaver::new(output_dir(config, output)?);
    let view = TerminalView::stdout().with_export_hint(true);
    let mut client = SearchClient::new(api, view, saver);

    info!("Interactive session against {}", client.api().base_url());
    println!("{}", prompt::HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        match PromptCommand::parse(&line) {
            PromptCommand::Quit => break,
            PromptCommand::Help => println!("{}", prompt::HELP),
            PromptCommand::Unknown(command) => {
                println!("{}", format_error(&format!("Unknown command: {}", command)));
            }
            PromptCommand::Export(format) => {
                if !client.controls().export_enabled(format) {
                    client.view_mut().alert(messages::EXPORT_UNAVAILABLE);
                    continue;
                }
                if let DownloadOutcome::Saved(path) = client.download(format).await {
                    println!("{}", format_success(&format!("Saved {}", path.display())));
                }
            }
            PromptCommand::Query(text) => {
                client.set_input(text);
                client.submit().await;
            }
        }
    }

    Ok(())
}
