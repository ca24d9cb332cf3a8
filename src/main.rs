//! Portfolio TUI - a single-page engineering portfolio rendered in the terminal.
//!
//! ```text
//! key press -> App::handle_key -> NavigationMenu transition / anchor jump
//!           -> build_document (pure) -> ui::draw
//! ```

mod app;
mod cli;
mod config;
mod content;
mod export;
mod logging;
mod models;
mod theme;
mod ui;
mod view;

use std::io::{self, stdout, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, size as terminal_size, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::prelude::*;
use tracing::{info, warn};

use app::App;
use cli::{parse_args, print_usage, CliConfig, Command, VERSION};
use config::{PortfolioConfig, UiSettings};
use content::ContentStore;
use models::MenuState;

/// Terminal state with guaranteed cleanup on drop: raw mode and the
/// alternate screen are restored even after an early return.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                Err(err.into())
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn load_settings(cli: &CliConfig) -> UiSettings {
    let config = match PortfolioConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let path = err.path().to_path_buf();
            warn!(path = %path.display(), "Ignoring config: {:#}", anyhow::Error::new(err));
            None
        }
    };
    if config.is_some() {
        if let Some(path) = PortfolioConfig::path() {
            info!(path = %path.display(), "Loaded config");
        }
    }
    UiSettings::resolve(config.as_ref(), cli.breakpoint, cli.ascii_only)
}

fn main() -> Result<()> {
    let cli = match parse_args(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(err) => {
            print_usage();
            eprintln!();
            eprintln!("Error: {err}");
            std::process::exit(2);
        }
    };

    match &cli.command {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Version => {
            println!("portfolio-tui {}", VERSION);
            return Ok(());
        }
        _ => {}
    }

    logging::init_tracing();
    let store = ContentStore::portfolio();

    match &cli.command {
        Command::ExportHtml(path) => {
            let menu = if cli.menu_open {
                MenuState::Open
            } else {
                MenuState::Closed
            };
            export::export_html(store, menu, path)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
        Command::DumpContent => {
            println!("{}", export::dump_content(store)?);
            Ok(())
        }
        _ => {
            let settings = load_settings(&cli);
            let (columns, _) = terminal_size().context("Failed to query terminal size")?;
            let mut app = App::new(store, &settings, columns);
            info!(columns, breakpoint = settings.breakpoint, layout = ?app.layout(), "Starting");

            let mut session = TerminalSession::new().context("Failed to set up terminal")?;
            let result = run(&mut session.terminal, &mut app, &settings);
            drop(session);

            info!(menu = app.menu_state().label(), "Exiting");
            result.context("Terminal UI failed")
        }
    }
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    settings: &UiSettings,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle input
        if event::poll(settings.poll_interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Resize(columns, _) => app.resize(columns),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
