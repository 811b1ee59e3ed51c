mod app;
mod config;
mod logging;
mod theme;
mod todo;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::config::AppConfig;
use crate::theme::appearance::detect_mode;
use crate::theme::{select_theme, Mode};
use crate::todo::{seed, TodoSnapshot};
use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    logging::init(&cfg.logging)?;

    let snapshot = load_snapshot(&cfg)?;
    let mode = initial_mode(&cfg.ui.theme);
    tracing::info!(items = snapshot.len(), %mode, "session started");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, AppState::new(cfg, snapshot, mode)).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "exited with error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn load_snapshot(cfg: &AppConfig) -> Result<TodoSnapshot> {
    let items = match &cfg.seed.file {
        Some(path) => seed::load_seed_file(path)
            .with_context(|| format!("Failed to load seed list from {}", path.display()))?,
        None => seed::default_seed(),
    };
    Ok(seed::snapshot_from_seed(items)?)
}

fn initial_mode(preference: &str) -> Mode {
    if preference.eq_ignore_ascii_case("auto") {
        return detect_mode(std::env::var("COLORFGBG").ok().as_deref());
    }
    select_theme(Some(preference)).mode
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut state: AppState,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;
    state.dirty = false;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::RequestAppearance(mode) => {
                    // The terminal has no appearance notifications, so the
                    // request is answered directly.
                    if event_tx.send(AppEvent::AppearanceChanged(mode)).is_err() {
                        state.set_mode(mode);
                    }
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            tracing::info!(items = state.todos.current().len(), "session ended");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
