//! RiskView terminal dashboard.
//!
//! Fetches portfolio risk metrics once at startup and renders them as a
//! metric list plus bar chart. On fetch failure the hardcoded sample
//! dataset is shown instead, with a notice line. Quit with `q` or `Esc`.

use std::io;

use anyhow::Result;
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::task::JoinHandle;
use tracing::error;
use tracing_subscriber::EnvFilter;

use rv_data::{RiskApiClient, RiskViewConfig};
use rv_types::RiskDataSet;
use rv_view::{widgets, App};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they do not corrupt the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = RiskViewConfig::from_env();
    let client = RiskApiClient::new(config);

    // The single fetch for this view's lifetime. If the UI exits first,
    // the result is simply discarded.
    let fetch: JoinHandle<RiskDataSet> =
        tokio::spawn(async move { client.load_dataset().await });

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, fetch).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    fetch: JoinHandle<RiskDataSet>,
) -> Result<()> {
    let mut app = App::new();
    let mut events = EventStream::new();
    let mut pending: Option<JoinHandle<RiskDataSet>> = Some(fetch);

    loop {
        terminal.draw(|frame| widgets::draw(frame, &app))?;

        tokio::select! {
            result = async {
                match pending.as_mut() {
                    Some(handle) => handle.await,
                    // Already delivered; park this branch forever.
                    None => std::future::pending().await,
                }
            } => {
                pending = None;
                match result {
                    Ok(dataset) => app.on_data(dataset),
                    Err(e) => {
                        error!("Fetch task failed: {}", e);
                        app.on_data(RiskDataSet::fallback());
                    }
                }
            }
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => app.on_key(key),
                    Some(Ok(_)) => {} // resize etc. are handled by the redraw
                    Some(Err(e)) => {
                        error!("Terminal event error: {}", e);
                        break;
                    }
                    None => break,
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
