//! Root view controller
//!
//! Navigation is a two-state machine owned by [`ViewController`]:
//!
//! ```text
//! List --select(ticker)--> Detail(ticker) --back()--> List
//! ```
//!
//! `reload()` discards everything and starts over in `List`.

use crate::detail_view::{DetailEvent, DetailView};
use crate::i18n::Labels;
use crate::list_view::{ListEvent, ListView};
use bist_stock::{AnalysisClient, Ticker, TickerCatalog};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use tracing::info;

/// Long-lived collaborators shared by all views
#[derive(Debug, Clone)]
pub struct AppContext {
    pub catalog: TickerCatalog,
    pub client: Arc<AnalysisClient>,
    pub labels: &'static Labels,
}

impl AppContext {
    pub fn new(catalog: TickerCatalog, client: Arc<AnalysisClient>, labels: &'static Labels) -> Self {
        Self {
            catalog,
            client,
            labels,
        }
    }
}

/// Which screen is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    List,
    Detail(Ticker),
}

/// Whether the event loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct ViewController {
    ctx: AppContext,
    state: ViewState,
    list: ListView,
    detail: Option<DetailView>,
}

impl ViewController {
    /// Cold start: list screen with an empty query
    pub fn new(ctx: AppContext) -> Self {
        Self {
            list: ListView::new(ctx.catalog.clone()),
            ctx,
            state: ViewState::List,
            detail: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Ticker of the detail screen, `None` on the list
    pub fn selected(&self) -> Option<&Ticker> {
        match &self.state {
            ViewState::List => None,
            ViewState::Detail(ticker) => Some(ticker),
        }
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    pub fn labels(&self) -> &'static Labels {
        self.ctx.labels
    }

    /// Open the detail screen for `ticker`, starting a fresh analysis
    pub fn select(&mut self, ticker: Ticker) {
        info!(symbol = %ticker.code, "Opening detail view");
        self.detail = Some(DetailView::mount(
            ticker.clone(),
            Arc::clone(&self.ctx.client),
            self.ctx.labels,
        ));
        self.state = ViewState::Detail(ticker);
    }

    /// Return to the list; the detail view and its pending analysis are dropped
    pub fn back(&mut self) {
        info!("Returning to list");
        self.detail = None;
        self.list = ListView::new(self.ctx.catalog.clone());
        self.state = ViewState::List;
    }

    /// Discard all state, as on a fresh start
    pub fn reload(&mut self) {
        info!("Reloading application");
        *self = Self::new(self.ctx.clone());
    }

    /// Advance background work; returns `true` when a redraw is useful
    pub fn tick(&mut self) -> bool {
        match self.detail.as_mut() {
            Some(detail) => detail.poll() || detail.is_loading(),
            None => false,
        }
    }

    /// Route a key event to the active screen
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Quit;
        }

        if self.state == ViewState::List {
            match self.list.handle_key(key) {
                Some(ListEvent::Selected(ticker)) => self.select(ticker),
                Some(ListEvent::Quit) => return Flow::Quit,
                None => {}
            }
        } else {
            let event = self.detail.as_mut().and_then(|detail| detail.handle_key(key));
            match event {
                Some(DetailEvent::Back) => self.back(),
                Some(DetailEvent::Reload) => self.reload(),
                None => {}
            }
        }

        Flow::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail_view::DetailState;
    use crate::test_helpers::{ctrl, key, live_context, unconfigured_context};

    fn type_query(controller: &mut ViewController, text: &str) {
        for c in text.chars() {
            controller.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_cold_start() {
        let controller = ViewController::new(unconfigured_context());
        assert_eq!(controller.state(), &ViewState::List);
        assert!(controller.selected().is_none());
        assert!(controller.detail().is_none());
        assert_eq!(controller.list().query(), "");
    }

    #[tokio::test]
    async fn test_select_enters_detail_with_exact_ticker() {
        let mut controller = ViewController::new(live_context());
        type_query(&mut controller, "thy");
        assert_eq!(controller.handle_key(key(KeyCode::Enter)), Flow::Continue);

        let expected = TickerCatalog::bist100().get("THYAO").cloned().unwrap();
        assert_eq!(controller.state(), &ViewState::Detail(expected.clone()));
        assert_eq!(controller.selected(), Some(&expected));
        assert_eq!(controller.detail().map(DetailView::ticker), Some(&expected));
    }

    #[tokio::test]
    async fn test_back_returns_to_empty_list() {
        let mut controller = ViewController::new(live_context());
        type_query(&mut controller, "aselsan");
        controller.handle_key(key(KeyCode::Enter));

        controller.handle_key(key(KeyCode::Esc));

        assert_eq!(controller.state(), &ViewState::List);
        assert!(controller.selected().is_none());
        assert!(controller.detail().is_none());
        assert_eq!(controller.list().query(), "");
        assert_eq!(controller.list().rows().len(), 30);
    }

    #[tokio::test]
    async fn test_reselect_starts_new_analysis() {
        let mut controller = ViewController::new(live_context());
        let catalog = TickerCatalog::bist100();

        controller.select(catalog.list()[0].clone());
        controller.back();
        controller.select(catalog.list()[1].clone());

        let detail = controller.detail().unwrap();
        assert_eq!(detail.ticker().code, "GARAN");
        assert_eq!(detail.state(), &DetailState::Loading);
    }

    #[tokio::test]
    async fn test_tick_drives_detail_to_ready() {
        let mut controller = ViewController::new(live_context());
        assert!(!controller.tick());
        controller.select(TickerCatalog::bist100().list()[0].clone());

        for _ in 0..100 {
            assert!(controller.tick());
            if !controller.detail().is_some_and(DetailView::is_loading) {
                break;
            }
            tokio::task::yield_now().await;
        }

        assert!(matches!(
            controller.detail().map(DetailView::state),
            Some(DetailState::Ready(_))
        ));
        assert!(!controller.tick());
    }

    #[tokio::test]
    async fn test_reload_is_cold_start() {
        let mut controller = ViewController::new(live_context());
        controller.select(TickerCatalog::bist100().list()[3].clone());

        controller.handle_key(key(KeyCode::Char('r')));

        assert_eq!(controller.state(), &ViewState::List);
        assert!(controller.detail().is_none());
        assert_eq!(controller.list().query(), "");
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut controller = ViewController::new(live_context());
        assert_eq!(controller.handle_key(ctrl('c')), Flow::Quit);

        controller.select(TickerCatalog::bist100().list()[0].clone());
        assert_eq!(controller.handle_key(ctrl('c')), Flow::Quit);

        let mut controller = ViewController::new(live_context());
        assert_eq!(controller.handle_key(key(KeyCode::Esc)), Flow::Quit);
    }
}
