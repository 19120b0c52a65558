//! stay-tui - Terminal UI for Staybook
//!
//! Shows a hotel and walks through the booking form: guest details, date and
//! list pickers, terms acceptance and the confirmation summary.

use std::path::PathBuf;

use clap::Parser;
use libstaybook::{catalog, config, logging, Config, DatePolicy};
use stay_tui::{
    app::{event::EventHandler, reduce, Action, AppState},
    error::Result,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};

#[derive(Parser, Debug)]
#[command(name = "stay-tui")]
#[command(version)]
#[command(about = "Browse a hotel and book it from the terminal")]
struct Cli {
    /// Hotel to show (catalog id)
    #[arg(long, env = "STAYBOOK_HOTEL")]
    hotel: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Date ordering rule: permissive, clamp or reject
    #[arg(long)]
    date_policy: Option<DatePolicy>,

    /// Require room type and guest count before continuing
    #[arg(long)]
    require_selections: bool,

    /// Write logs to this file instead of the data directory
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if let Some(policy) = cli.date_policy {
        config.booking.date_policy = policy;
    }
    if cli.require_selections {
        config.booking.require_selections = true;
    }

    // The terminal owns stdout/stderr, so logs always go to a file
    let log_file = match cli.log_file.or_else(|| config.logging.file_path()) {
        Some(path) => path,
        None => config::resolve_data_path()?.join("stay-tui.log"),
    };
    logging::from_env(config.logging.format, &config.logging.level)
        .with_file(log_file)
        .init()?;

    let hotel_id = cli
        .hotel
        .unwrap_or_else(|| config.booking.default_hotel.clone());
    let hotel = catalog::find(&hotel_id)?;

    tracing::info!(hotel = hotel.id, policy = %config.booking.date_policy, "Starting stay-tui");

    let state = AppState::from_config(&config, hotel);

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, state);
    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut Tui, mut state: AppState) -> Result<()> {
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let action: Action = event_handler.next()?.into();
        state = reduce(state, action);

        if state.should_quit {
            tracing::info!("Exiting stay-tui");
            break;
        }
    }

    Ok(())
}
