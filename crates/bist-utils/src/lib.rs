//! Shared utilities for the BIST analysis terminal
//!
//! This crate provides common functionality used across the workspace,
//! including logging setup and application-level configuration.

pub mod config;
pub mod logging;

pub use config::Config;
pub use logging::init_tracing;
