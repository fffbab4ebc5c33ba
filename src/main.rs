use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf};
use tokio::sync::mpsc::UnboundedReceiver;

/// Browse, filter and rank the countries of the world
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/globetui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (jk, ^D/U, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// URL of the countries JSON (overrides config)
    #[arg(long)]
    source_url: Option<String>,

    /// Load countries from a local JSON file instead of the URL
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Print the selected countries as a table and exit
    #[arg(long)]
    print: bool,

    /// Initial continent filter (e.g. "Europe", "North America")
    #[arg(long)]
    continent: Option<String>,

    /// Initial subregion filter (exact match, e.g. "Caribbean")
    #[arg(long)]
    subregion: Option<String>,

    /// Initial top-10 ranking: population or area
    #[arg(long)]
    rank_by: Option<String>,

    /// Start with alphabetical ordering enabled
    #[arg(long)]
    alphabetical: bool,
}

mod app;
mod handlers;
mod logging;
mod print;
mod ui;
mod utils;

use globetui::{api, config, logic, model, services};

use config::Config;
use model::{SelectionError, SelectionState};
use services::{DatasetSource, LoadResponse};

pub struct App {
    pub model: model::Model,

    loader_rx: UnboundedReceiver<LoadResponse>,

    /// Rows moved by PageUp/PageDown, updated from the list height on render
    page_size: usize,
}

impl App {
    fn new(source: DatasetSource, selection: SelectionState, vim_mode: bool) -> Self {
        let mut model = model::Model::new(source.describe(), vim_mode);
        model.apply_selection(|s| *s = selection);

        let loader_rx = services::spawn_dataset_load(source);

        Self {
            model,
            loader_rx,
            page_size: 10,
        }
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key(self, key)
    }

    /// Handle the dataset load result
    /// Delegated to handlers::loader module
    fn handle_load_response(&mut self, response: LoadResponse) {
        handlers::handle_load_response(self, response);
    }
}

#[cfg(test)]
impl App {
    /// App around a prepared model, with no loader attached
    pub(crate) fn with_model(model: model::Model) -> Self {
        let (_response_tx, loader_rx) = tokio::sync::mpsc::unbounded_channel();
        Self {
            model,
            loader_rx,
            page_size: 10,
        }
    }
}

/// Build the starting selection from command-line flags
///
/// Flags go through the same transitions as the keyboard, in the order
/// continent, subregion, rank-by, alphabetical; later ones win where they
/// exclude each other.
fn initial_selection(args: &Args) -> Result<SelectionState, SelectionError> {
    let mut selection = SelectionState::new();
    if let Some(continent) = &args.continent {
        selection.set_continent_str(continent)?;
    }
    if let Some(subregion) = &args.subregion {
        selection.set_subregion(subregion.as_str());
    }
    if let Some(rank_by) = &args.rank_by {
        selection.set_rank_by_str(rank_by)?;
    }
    if args.alphabetical {
        selection.toggle_alphabetical();
    }
    Ok(selection)
}

/// Load config from disk (if any) and apply CLI overrides
fn load_config(args: &Args) -> Result<Config> {
    let mut config = match config::find_config_path(args.config.as_deref())? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Config::load(&path)?
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            Config::default()
        }
    };

    apply_overrides(&mut config, args);
    Ok(config)
}

/// Override config with CLI flags
fn apply_overrides(config: &mut Config, args: &Args) {
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(url) = &args.source_url {
        config.source_url = url.clone();
        config.data_file = None;
    }
    if let Some(path) = &args.data_file {
        config.data_file = Some(path.clone());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    if args.print {
        logging::init_stderr(args.debug);
    } else {
        logging::init_file(args.debug)?;
    }
    tracing::debug!(?args, "starting");

    let config = load_config(&args)?;
    let selection = initial_selection(&args)?;
    let source = DatasetSource::from_config(&config)?;

    if args.print {
        return print::run(&source, &selection).await;
    }

    // Initialize app (spawns the dataset load)
    let mut app = App::new(source, selection, config.vim_mode);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast
        if app.model.ui.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process loader response (non-blocking)
        while let Ok(response) = app.loader_rx.try_recv() {
            app.handle_load_response(response);
        }

        // 250ms poll keeps the toast timer and loader drain ticking while idle
        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key)?;
            }
        }
    }

    tracing::debug!("quitting");
    Ok(())
}
