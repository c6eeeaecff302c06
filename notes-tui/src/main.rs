//! notes-tui - Terminal UI for Noteboard
//!
//! Browse, search, add, edit and delete notes held by a Noteboard server.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use libnotes::api::{HttpNotesApi, MockNotesApi, NotesApi};
use libnotes::config::resolve_data_path;
use libnotes::logging::{LogFormat, LoggingConfig};
use libnotes::{AppProvider, Config, NotesError};
use notes_tui::{
    app::{event::EventHandler, event::TuiEvent, map_key, Action, Controller, UiConfig, UiState},
    services::NotesHandle,
    terminal::{self, install_panic_hook, restore_terminal, setup_terminal, Tui},
    TuiError,
};

#[derive(Parser, Debug)]
#[command(name = "notes-tui")]
#[command(version)]
#[command(about = "Terminal UI for browsing and editing Noteboard notes")]
struct Cli {
    /// Path to the config file (default: ~/.config/noteboard/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Server base URL, overrides the config file
    #[arg(long, value_name = "URL", env = "NOTEBOARD_API_URL")]
    base_url: Option<String>,

    /// Log format: text, json or pretty
    #[arg(long, value_name = "FORMAT")]
    log_format: Option<LogFormat>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Run against built-in sample notes instead of a server
    #[arg(long)]
    demo: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(exit_code(&e));
    }
}

fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<TuiError>() {
        Some(TuiError::Notes(e)) => e.exit_code(),
        Some(_) => 1,
        None => error
            .downcast_ref::<NotesError>()
            .map(NotesError::exit_code)
            .unwrap_or(1),
    }
}

fn load_config(cli: &Cli) -> Result<Config, NotesError> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?.with_env_overrides(),
        None => Config::load()?,
    };

    if let Some(url) = &cli.base_url {
        config.api.base_url = url.clone();
    }
    Ok(config)
}

fn init_logging(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let mut logging = LoggingConfig::from_section(&config.logging);
    if let Some(format) = cli.log_format {
        logging.format = format;
    }
    logging.verbose = cli.verbose;

    // The terminal is ours, so logs always go to a file
    if logging.file.is_none() {
        let path = resolve_data_path()?.join("notes-tui.log");
        logging = logging.with_file(path);
    }

    logging.init().context("Failed to open log file")
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    init_logging(&cli, &config)?;

    let api: Arc<dyn NotesApi> = if cli.demo {
        tracing::info!("Starting in demo mode");
        Arc::new(MockNotesApi::seeded())
    } else {
        tracing::info!(base_url = %config.api.base_url, "Starting");
        Arc::new(HttpNotesApi::new(&config.api).map_err(NotesError::from)?)
    };

    let provider = AppProvider::new(api);
    let handle = NotesHandle::new()?;
    let ui = UiState::with_config(UiConfig::from_section(&config.ui));
    let controller = Controller::new(provider, handle, ui);

    install_panic_hook();
    let mut tui = setup_terminal()?;

    let result = run_app(&mut tui, controller);

    restore_terminal(tui)?;
    result.map_err(Into::into)
}

fn run_app(tui: &mut Tui, mut controller: Controller) -> notes_tui::Result<()> {
    let events = EventHandler::new(controller.ui().config.tick_rate_ms);
    controller.start();

    loop {
        terminal::draw(tui, controller.ui(), Some(controller.provider()))?;

        let action = match events.next()? {
            TuiEvent::Key(key) => map_key(controller.ui(), &controller.context(), key),
            other => Some(Action::from(other)),
        };

        if let Some(action) = action {
            tracing::trace!(?action, "Dispatch");
            controller.dispatch(action);
        }

        controller.drain_completions();

        if controller.should_quit() {
            tracing::info!("Exiting");
            break;
        }
    }

    Ok(())
}
