//! Katha story dashboard TUI.
//!
//! A terminal dashboard that renders a fixed story catalog as selectable
//! cards. Opening a card routes to that story's screen.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line-oriented interface suitable for scripts:
//!
//! ```bash
//! cargo run -p katha -- --headless --open golconda
//! ```

mod app;
mod events;
mod headless;
mod router;
mod ui;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use katha_core::{sample_records, Catalog};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::fs::OpenOptions;
use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Check for --help
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    // Validate the catalog before any interface comes up; one bad record
    // rejects the whole catalog.
    let catalog = match Catalog::new(sample_records()) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Invalid story catalog: {e}");
            std::process::exit(1);
        }
    };

    // Check for --headless mode
    if args.iter().any(|a| a == "--headless") {
        init_headless_logging();
        let config = headless::parse_config_from_args(&args);
        return headless::run_headless(config, catalog);
    }

    init_tui_logging();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, App::new(catalog));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        // Render
        terminal.draw(|f| render(f, &app))?;

        // Keep the viewport in sync so mouse hit-testing works against the
        // geometry that was just drawn.
        let size = terminal.size()?;
        app.set_viewport(Rect::new(0, 0, size.width, size.height));

        // Poll for events with a timeout so resizes stay responsive
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            if handle_event(&mut app, ev) == EventResult::Quit {
                return Ok(());
            }
        }
    }
}

/// Logging for headless mode: env-filtered output on stderr, so protocol
/// output on stdout stays clean.
fn init_headless_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Logging for TUI mode. The alternate screen owns the terminal, so traces
/// go to the file named by `KATHA_LOG`, or nowhere.
fn init_tui_logging() {
    let Ok(path) = std::env::var("KATHA_LOG") else {
        return;
    };

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
                )
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        Err(e) => {
            eprintln!("Could not open log file {path}: {e}");
        }
    }
}

fn print_help() {
    println!("Katha - interactive story dashboard");
    println!();
    println!("USAGE:");
    println!("  katha [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help       Show this help message");
    println!("  --headless       Run in headless mode (line-oriented, no TUI)");
    println!();
    println!("HEADLESS OPTIONS (only with --headless):");
    println!("  --open <n|route>   Open the story at position n (1-based) or by");
    println!("                     route token, print the navigation, and exit.");
    println!("                     May be repeated.");
    println!();
    println!("KEYS (TUI):");
    println!("  Arrows/hjkl   Move the card selection");
    println!("  Enter         Open the selected card");
    println!("  Tab           Focus the card's Play button");
    println!("  Space         Press the Play button directly");
    println!("  1-9           Open a card by its number");
    println!("  r             Show routes shared by several stories");
    println!("  Esc           Return to the dashboard");
    println!("  ?             Help overlay");
    println!("  q             Quit");
    println!();
    println!("ENVIRONMENT:");
    println!("  KATHA_LOG=<path>   Append tracing output to <path> in TUI mode");
    println!("  RUST_LOG=<filter>  Log filter (headless mode logs to stderr)");
    println!();
    println!("EXAMPLES:");
    println!("  katha                                  # Interactive TUI mode");
    println!("  katha --headless                       # Line-oriented mode");
    println!("  katha --headless --open 2 --open golconda");
}
