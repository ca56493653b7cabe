//! BIST 100 stock analysis
//!
//! Domain layer of the analysis terminal:
//!
//! - [`catalog`]: the static list of BIST 100 constituents and filtering
//! - [`analysis`]: the structured analysis model, its response schema and the
//!   fallback payload
//! - [`client`]: [`AnalysisClient`], which asks a search-grounded LLM for an
//!   analysis and never surfaces service failures to the caller
//! - [`prompts`]: the analysis prompt templates
//!
//! # Example
//!
//! ```no_run
//! use bist_stock::{AnalysisClient, StockConfig, TickerCatalog};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AnalysisClient::from_config(StockConfig::builder().with_env().build()?)?;
//!     let catalog = TickerCatalog::bist100();
//!     let ticker = catalog.get("thyao").ok_or("unknown ticker")?;
//!
//!     let outcome = client.analyze(&ticker.code, &ticker.display_name).await?;
//!     println!("{}", outcome.result().summary);
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod parser;
pub mod prompts;

pub use analysis::{
    AnalysisOutcome, AnalysisResult, Direction, FundamentalSnapshot, Horizon, Prediction, Signal,
    TechnicalSignal,
};
pub use catalog::{Ticker, TickerCatalog};
pub use client::AnalysisClient;
pub use config::{StockConfig, StockConfigBuilder};
pub use error::{Result, StockError};
