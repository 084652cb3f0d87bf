mod app;
mod cli;
mod config;
mod logging;
mod runtime;
mod toasts;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use timesheet_core::adapters::outbound::{memory::InMemoryStore, supabase::SupabaseClient};
use timesheet_core::domain::{
    ports::{
        inbound::TimesheetService,
        outbound::{ReferenceSource, TimesheetSink},
    },
    TimesheetServiceImpl,
};
use tokio::sync::mpsc;
use tracing::info;

use crate::cli::{Cli, Commands};
use crate::config::TimesheetConfig;
use crate::toasts::ToastSender;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::ConfigPath => {
            let path = TimesheetConfig::save_default_if_missing()?;
            println!("{}", path.display());
            Ok(())
        }
        Commands::Run => {
            let config = TimesheetConfig::load()?;
            let url = config.store_url.as_deref().context(
                "store_url is not set. Run `timesheet-tui config-path` to find the config file",
            )?;
            let key = config
                .store_api_key
                .as_deref()
                .context("store_api_key is not set")?;
            let client = SupabaseClient::new(url, key)
                .with_context(|| format!("Invalid store URL: {}", url))?;
            run(config, Arc::new(client)).await
        }
        Commands::Dev => {
            let config = TimesheetConfig::load()?;
            run(config, Arc::new(InMemoryStore::seeded())).await
        }
    }
}

async fn run<S>(config: TimesheetConfig, store: Arc<S>) -> Result<()>
where
    S: ReferenceSource + TimesheetSink,
{
    logging::init(&config.log_filter)?;
    let form_config = config.form_config()?;
    info!(
        week_ending = ?form_config.week_ending,
        multi_row = form_config.multi_row,
        cascade = form_config.cascade.is_some(),
        "starting timesheet form"
    );

    let (toast_tx, toast_rx) = mpsc::unbounded_channel();
    let service: Arc<dyn TimesheetService> = Arc::new(TimesheetServiceImpl::new(
        store.clone(),
        store,
        Arc::new(ToastSender::new(toast_tx)),
    ));
    let mut app = App::new(form_config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, service, toast_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
