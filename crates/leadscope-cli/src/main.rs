mod export;
mod pipeline;
mod present;
mod session;
mod state;
mod table;
mod theme;
mod view;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use leadscope_client::LeadsClient;
use leadscope_core::{AppConfig, ThemeStore};
use tracing_subscriber::EnvFilter;

use crate::pipeline::{LeadSession, ScrapeOutcome};
use crate::theme::ThemeCommands;
use crate::view::TerminalView;

#[derive(Debug, Parser)]
#[command(name = "leadscope")]
#[command(about = "Extract, score and export sales leads from a web page")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one extract and score pass for a URL
    Scrape {
        /// Page to extract leads from
        url: String,
        /// Where to write the HTML results page (overrides `LEADSCOPE_PAGE_PATH`)
        #[arg(long)]
        page: Option<PathBuf>,
        /// Save the scored leads as leads.csv afterwards
        #[arg(long)]
        export: bool,
    },
    /// Interactive loop: enter URLs, export, inspect rows
    Session {
        /// Where to write the HTML results page (overrides `LEADSCOPE_PAGE_PATH`)
        #[arg(long)]
        page: Option<PathBuf>,
    },
    /// Show or change the results page theme
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommands>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = leadscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = ThemeStore::new(config.prefs_path.clone());
    let terminal_colors = config.terminal_colors.as_deref();

    match cli.command {
        Commands::Scrape { url, page, export } => {
            let mut session = build_session(&config, &store, page)?;
            let outcome = session.scrape(&url).await;
            if export && matches!(outcome, ScrapeOutcome::Rendered(_)) {
                session.export().await;
            }
        }
        Commands::Session { page } => {
            let mut lead_session = build_session(&config, &store, page)?;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            session::run_session(&mut lead_session, &store, stdin, &mut std::io::stdout())
                .await?;
        }
        Commands::Theme { command } => {
            theme::run_theme(&store, terminal_colors, command.as_ref())?;
        }
    }

    Ok(())
}

fn build_session(
    config: &AppConfig,
    store: &ThemeStore,
    page: Option<PathBuf>,
) -> anyhow::Result<LeadSession<TerminalView>> {
    let client = LeadsClient::new(
        &config.api_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    let theme = store.resolve(config.terminal_colors.as_deref());
    let page_path = page.unwrap_or_else(|| config.page_path.clone());
    tracing::debug!(
        api_base_url = %config.api_base_url,
        page = %page_path.display(),
        %theme,
        "session ready"
    );

    Ok(LeadSession::new(
        client,
        TerminalView::new(Some(page_path)),
        theme,
        config.download_dir.clone(),
    ))
}

#[cfg(test)]
mod tests;
