//! Analysis screen for one ticker
//!
//! Mounting a [`DetailView`] spawns exactly one analysis task. The UI loop
//! calls [`DetailView::poll`] every tick; the task result moves the view from
//! `Loading` to `Ready` or `Failed`. Dropping the view aborts the task, so a
//! result arriving after navigation is discarded.

use crate::i18n::Labels;
use bist_stock::{AnalysisClient, AnalysisOutcome, StockError, Ticker};
use crossterm::event::{KeyCode, KeyEvent};
use futures::FutureExt;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

type AnalysisTask = JoinHandle<Result<AnalysisOutcome, StockError>>;

/// Lifecycle of a detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    /// Analysis in flight
    Loading,
    /// Analysis received; live and degraded outcomes render the same
    Ready(AnalysisOutcome),
    /// Analysis could not be produced; carries the localized message
    Failed(String),
}

/// What the detail view asks its owner to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    /// Return to the list
    Back,
    /// Restart the whole application state
    Reload,
}

pub struct DetailView {
    ticker: Ticker,
    labels: &'static Labels,
    state: DetailState,
    task: Option<AnalysisTask>,
    scroll: u16,
    frame: usize,
}

impl DetailView {
    /// Mount the view and start the analysis
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(ticker: Ticker, client: Arc<AnalysisClient>, labels: &'static Labels) -> Self {
        info!(symbol = %ticker.code, "Requesting analysis");

        let symbol = ticker.code.clone();
        let name = ticker.display_name.clone();
        let task = tokio::spawn(async move { client.analyze(&symbol, &name).await });

        Self {
            ticker,
            labels,
            state: DetailState::Loading,
            task: Some(task),
            scroll: 0,
            frame: 0,
        }
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn labels(&self) -> &'static Labels {
        self.labels
    }

    /// Vertical scroll offset of the Ready body
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Animation frame counter, advanced while loading
    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn is_loading(&self) -> bool {
        self.state == DetailState::Loading
    }

    /// Check the analysis task without blocking
    ///
    /// Returns `true` when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(task) = self.task.as_mut() else {
            return false;
        };

        match task.now_or_never() {
            Some(joined) => {
                self.task = None;
                self.resolve(joined);
                true
            }
            None => {
                self.frame = self.frame.wrapping_add(1);
                false
            }
        }
    }

    /// Wait for the analysis task to finish
    #[cfg(test)]
    pub(crate) async fn settle(&mut self) {
        if let Some(task) = self.task.take() {
            let joined = task.await;
            self.resolve(joined);
        }
    }

    fn resolve(&mut self, joined: Result<Result<AnalysisOutcome, StockError>, JoinError>) {
        self.state = match joined {
            Ok(Ok(outcome)) => {
                info!(
                    symbol = %self.ticker.code,
                    degraded = outcome.is_degraded(),
                    "Analysis ready"
                );
                DetailState::Ready(outcome)
            }
            Ok(Err(e)) => {
                error!(symbol = %self.ticker.code, error = %e, "Analysis failed");
                DetailState::Failed(self.labels.analysis_failed.to_string())
            }
            Err(e) => {
                error!(symbol = %self.ticker.code, error = %e, "Analysis task failed");
                DetailState::Failed(self.labels.analysis_failed.to_string())
            }
        };
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DetailEvent> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b') => {
                return Some(DetailEvent::Back);
            }
            KeyCode::Enter if matches!(self.state, DetailState::Failed(_)) => {
                return Some(DetailEvent::Back);
            }
            KeyCode::Char('r') => return Some(DetailEvent::Reload),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(10),
            KeyCode::PageUp => self.scroll_by(-10),
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }

        None
    }

    fn scroll_by(&mut self, delta: i16) {
        if matches!(self.state, DetailState::Ready(_)) {
            self.scroll = self.scroll.saturating_add_signed(delta);
        }
    }
}

impl Drop for DetailView {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl std::fmt::Debug for DetailView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailView")
            .field("ticker", &self.ticker.code)
            .field("state", &self.state)
            .field("scroll", &self.scroll)
            .finish_non_exhaustive()
    }
}
