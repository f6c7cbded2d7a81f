use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use shelf_core::config::Config;
use shelf_ui::{AppState, Flash};
use std::fs::OpenOptions;
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{error, info, warn};

mod crash_report;

const TICK: Duration = Duration::from_millis(250);

/// shelf - keep track of the books you own and the ones you've read.
#[derive(Parser)]
#[command(name = "shelf", version)]
struct Args {
    /// Library directory (holds library.json, config.yaml and shelf.log).
    /// Defaults to ~/.shelf
    #[arg(long, env = "SHELF_LIBRARY_PATH")]
    library_path: Option<PathBuf>,
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Log to a file in the library directory; the terminal belongs to the UI.
fn configure_logging(log_path: &Path) -> io::Result<()> {
    use tracing_subscriber::prelude::*;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    // Default to info level if RUST_LOG not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
    Ok(())
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show)?;
    Ok(())
}

/// Put the terminal back before any panic output is printed.
fn install_terminal_restore_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}

fn run(terminal: &mut Tui, state: &mut AppState) -> io::Result<()> {
    while !state.should_quit {
        terminal.draw(|frame| shelf_ui::render(frame, state))?;
        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            // Windows also reports releases
            if key.kind == KeyEventKind::Press {
                shelf_ui::handle_key(state, key);
            }
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let config = match Config::load(args.library_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = std::fs::create_dir_all(&*config.library_dir) {
        eprintln!(
            "Failed to create library directory {}: {e}",
            config.library_dir.display()
        );
        std::process::exit(1);
    }
    if let Err(e) = configure_logging(&config.library_dir.log_path()) {
        eprintln!("Failed to open log file: {e}");
        std::process::exit(1);
    }

    crash_report::install_panic_hook(config.library_dir.crash_log_path());
    install_terminal_restore_hook();
    let crashed = match crash_report::check_for_crash_report(&config.library_dir.crash_log_path()) {
        Some(report) => {
            warn!("Previous session crashed:\n{report}");
            true
        }
        None => false,
    };

    info!("Library directory: {}", config.library_dir.display());
    if !config.library_dir.config_path().exists() {
        match config.save_to_config_yaml() {
            Ok(()) => info!("Wrote default config to {}", config.library_dir.config_path().display()),
            Err(e) => warn!("Failed to write default config: {e}"),
        }
    }

    let mut state = AppState::new(config);
    if crashed && state.flash.is_none() {
        state.flash = Some(Flash::info(
            "shelf crashed during the last session. The report is in shelf.log.",
        ));
    }

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            error!("Failed to set up terminal: {e}");
            let _ = restore_terminal();
            std::process::exit(1);
        }
    };

    info!("Starting UI");
    let result = run(&mut terminal, &mut state);
    if let Err(e) = restore_terminal() {
        error!("Failed to restore terminal: {e}");
    }

    match result {
        Ok(()) => info!("UI quit with {} books", state.library.len()),
        Err(e) => {
            error!("Terminal error: {e}");
            eprintln!("shelf: terminal error: {e}");
            std::process::exit(1);
        }
    }
}
