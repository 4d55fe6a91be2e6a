//! View state.
//!
//! The application holds exactly one data slot. It starts empty (the UI
//! shows a loading message), is filled once when the single fetch
//! completes, and the chart scene is rebuilt exactly once per replacement.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use rv_types::RiskDataSet;

use crate::chart::{self, ChartScene};

/// Top-level view state for the dashboard.
#[derive(Debug, Default)]
pub struct App {
    /// The current dataset; `None` until the fetch completes.
    pub data: Option<RiskDataSet>,
    /// Chart scene built from the current dataset's chart projection.
    pub chart: ChartScene,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the data slot and rebuild the chart scene.
    ///
    /// This is the only place the scene is computed: one rebuild per data
    /// change, from scratch.
    pub fn on_data(&mut self, dataset: RiskDataSet) {
        self.chart = chart::build(&dataset.chart_projection());
        self.data = Some(dataset);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => {}
        }
    }
}
