//! BIST 100 analysis terminal.
//!
//! Screens:
//! 1. List: searchable BIST 100 tickers
//! 2. Detail: AI analysis of the selected ticker

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use bist_stock::{AnalysisClient, StockConfig, TickerCatalog};
use bist_tui::{AppContext, Flow, Labels, ViewController, ui};
use bist_utils::Config;

/// Terminal for AI-assisted BIST 100 stock analysis
#[derive(Parser, Debug)]
#[command(name = "bist-tui", version, about, long_about = None)]
struct Cli {
    /// Gemini model to use
    #[arg(short, long, env = "GEMINI_MODEL")]
    model: Option<String>,

    /// Output language of the analysis (tr, en, ...)
    #[arg(short, long, env = "BIST_LANGUAGE")]
    language: Option<String>,

    /// Log file (the terminal is owned by the UI)
    #[arg(long, default_value = "bist-tui.log")]
    log_file: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_filter: String,

    /// Open the analysis of this ticker directly
    #[arg(short, long, value_name = "CODE")]
    ticker: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    bist_utils::init_tracing(&Config::new(&cli.log_file).with_log_filter(&cli.log_filter))?;

    let mut builder = StockConfig::builder();
    if let Some(model) = &cli.model {
        builder = builder.model(model);
    }
    if let Some(language) = &cli.language {
        builder = builder.language(language.as_str());
    }
    let config = builder.with_env().build()?;

    if !config.has_api_key() {
        tracing::warn!("No API key configured; analyses will fail until GEMINI_API_KEY is set");
    }
    info!(model = %config.model, language = config.language.code(), "Starting bist-tui");

    let labels = Labels::for_language(&config.language);
    let catalog = TickerCatalog::bist100();
    let initial = match &cli.ticker {
        Some(code) => Some(
            catalog
                .get(code)
                .cloned()
                .with_context(|| format!("unknown ticker: {code}"))?,
        ),
        None => None,
    };

    let client = Arc::new(AnalysisClient::from_config(config)?);
    let mut controller = ViewController::new(AppContext::new(catalog, client, labels));
    if let Some(ticker) = initial {
        controller.select(ticker);
    }

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(panic_info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut controller);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Exiting bist-tui");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut ViewController,
) -> Result<()> {
    let mut dirty = true;
    loop {
        // 1. Render
        if dirty {
            terminal.draw(|f| ui::draw(f, controller))?;
        }

        // 2. Pick up a finished analysis (non-blocking)
        dirty = controller.tick();

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    if controller.handle_key(key) == Flow::Quit {
                        break;
                    }
                    dirty = true;
                }
                Event::Resize(..) => dirty = true,
                _ => {}
            }
        }
    }
    Ok(())
}
