mod app;
mod domain;
mod input;
mod logging;
mod persistence;
mod store;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::SystemClock;
use persistence::{ensure_data_dir, FileStorage, STATE_KEY};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use store::Store;

#[derive(Parser)]
#[command(name = "focuspad")]
#[command(about = "A tiny daily focus popup: goal, tasks and a 7-day focus history", long_about = None)]
struct Cli {
    /// Directory holding the saved state. Defaults to ./.focuspad (searched upwards) or ~/.focuspad
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Log filter, e.g. "debug". Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = ensure_data_dir(cli.data_dir.as_deref())?;
    logging::enable_logging(&data_dir, cli.log_level.as_deref())
        .context("Failed to set up logging")?;
    let storage = FileStorage::new(data_dir);
    tracing::info!(state_file = %storage.slot_path(STATE_KEY).display(), "starting");

    let store = Store::open(Box::new(storage), Box::new(SystemClock));
    let mut app = App::new(store, Instant::now());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Teardown: cancel the focus timer before the final save
    app.shutdown(Instant::now());
    tracing::info!("stopped");

    if let Err(err) = result {
        tracing::error!(error = %err, "popup loop failed");
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
    }
}
