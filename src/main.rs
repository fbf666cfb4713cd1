// calctty: Scientific Calculator for the Terminal

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;
use tracing_subscriber::EnvFilter;

use calctty::calculator::Session;
use calctty::config::{AppConfig, Cli};
use calctty::error::AppError;
use calctty::headless;
use calctty::ui::App;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = AppConfig::from(cli);

    // The TUI owns stdout, so logs only go to stderr in headless mode
    init_logging(cli.log_file.as_deref(), cli.keys.is_some())?;

    if let Some(keys) = &cli.keys {
        let session = headless::run_keys(keys, Session::with_degree_mode(config.degree_mode))?;
        println!("{}", session.display);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(&config);
    let res = app.run(&mut terminal);

    // Restore terminal before reporting anything
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    info!(display = %app.session.display, "exited");
    Ok(())
}

/// Install the tracing subscriber.
///
/// With a log file, everything goes there. Without one, headless runs log to
/// stderr and the TUI does not log at all. `RUST_LOG` overrides the `info`
/// default.
fn init_logging(log_file: Option<&Path>, headless: bool) -> Result<(), AppError> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| AppError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if headless => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(io::stderr)
                .init();
        }
        None => {}
    }

    Ok(())
}
