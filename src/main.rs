//! Incorporation intake - terminal form for company incorporation applications
//!
//! A Ratatui-based TUI that collects applicant, company and share details,
//! validates them field by field and hands the finished application off as JSON.

mod app;
mod config;
mod platform;
mod state;
mod submit;
mod ui;

use anyhow::{Context, Result};
use app::App;
use config::IntakeConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use submit::{JsonSubmitter, SubmitHandler};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "incorporation_intake=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = IntakeConfig::load().context("failed to load intake config")?;
    let mut app = App::new(&config, JsonSubmitter::new());
    let span = tracing::info_span!("intake", session = %app.state.session_id);
    let _guard = span.enter();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    // The alternate screen is gone, so the payload lands on the real stdout
    if let Some(payload) = app.submitter().payload() {
        println!("{payload}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: SubmitHandler>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    tracing::info!("intake abandoned");
                    return Ok(());
                }

                app.handle_key(key)?;
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
