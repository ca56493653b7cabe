//! BIST 100 analysis terminal
//!
//! A two-screen ratatui application:
//!
//! - [`list_view`]: searchable list of BIST 100 tickers
//! - [`detail_view`]: AI analysis of the selected ticker (fundamentals,
//!   technical signals, day/week/month predictions, summary)
//! - [`controller`]: owns the navigation state and routes keys between the
//!   two screens
//!
//! Rendering lives in [`ui`], colours in [`theme`] and all user-facing copy
//! in [`i18n`].

pub mod controller;
pub mod detail_view;
pub mod i18n;
pub mod list_view;
pub mod theme;
pub mod ui;

pub use controller::{AppContext, Flow, ViewController, ViewState};
pub use detail_view::{DetailEvent, DetailState, DetailView};
pub use i18n::Labels;
pub use list_view::{ListEvent, ListView};

#[cfg(test)]
mod test_helpers;
