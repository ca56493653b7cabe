//! Searchable ticker list

use bist_stock::{Ticker, TickerCatalog};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the list asks its owner to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// A ticker was chosen; carries the full record
    Selected(Ticker),
    /// Leave the application
    Quit,
}

/// List screen state: catalog, live query and cursor over the filtered rows
#[derive(Debug, Clone)]
pub struct ListView {
    catalog: TickerCatalog,
    query: String,
    rows: Vec<Ticker>,
    cursor: usize,
}

impl ListView {
    pub fn new(catalog: TickerCatalog) -> Self {
        let rows = catalog.list().to_vec();
        Self {
            catalog,
            query: String::new(),
            rows,
            cursor: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Rows matching the current query, in catalog order
    pub fn rows(&self) -> &[Ticker] {
        &self.rows
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Ticker under the cursor, if any row is visible
    pub fn selected(&self) -> Option<&Ticker> {
        self.rows.get(self.cursor)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
    }

    fn refilter(&mut self) {
        self.rows = self.catalog.filter(&self.query);
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ListEvent> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Enter => return self.selected().cloned().map(ListEvent::Selected),
            KeyCode::Esc if self.query.is_empty() => return Some(ListEvent::Quit),
            KeyCode::Esc => self.clear_query(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Char('p') if ctrl => self.move_up(),
            KeyCode::Char('n') if ctrl => self.move_down(),
            KeyCode::Backspace => self.pop_char(),
            KeyCode::Char(c) if !ctrl => self.push_char(c),
            _ => {}
        }

        None
    }
}
