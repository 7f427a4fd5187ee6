use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use serde::Serialize;

use ticker_typeahead::app::App;
use ticker_typeahead::config::{ConfigResult, load_config};
use ticker_typeahead::form::{Holding, Order};
use ticker_typeahead::symbols::{CandidateSet, load_symbols};

/// Printed to stdout on exit when any order was placed
#[derive(Serialize)]
struct SessionReport<'a> {
    orders: &'a [Order],
    holdings: &'a [Holding],
}

/// Trade form with a stock ticker typeahead
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file of ticker symbols (overrides the config file)
    #[arg(long, value_name = "FILE")]
    symbols: Option<PathBuf>,

    /// Read configuration from FILE instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logging();

    let ConfigResult { config, warning } = load_config(args.config.as_deref());

    // Load candidates before touching the terminal so errors print normally
    let candidates = match args.symbols.as_ref().or(config.symbols.file.as_ref()) {
        Some(path) => load_symbols(path)?,
        None => CandidateSet::builtin(),
    };

    let mut app = App::new(candidates, &config);
    if let Some(warning) = warning {
        app.notification.error(warning);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)
        .map_err(Into::into)
        .and_then(|_| run(terminal, &mut app));
    let cleanup = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);

    // Restore terminal (automatic cleanup)
    ratatui::restore();
    result?;
    cleanup?;

    if !app.orders().is_empty() {
        let report = SessionReport {
            orders: app.orders(),
            holdings: app.portfolio().holdings(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_event(event::read()?);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Debug builds log to a file in the cache dir when RUST_LOG is set; the
/// terminal belongs to the UI.
#[cfg(debug_assertions)]
fn init_logging() {
    use std::io::Write;

    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let Some(dir) = dirs::cache_dir().map(|dir| dir.join("ticker-typeahead")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("debug.log")) else {
        return;
    };

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
