//! Command implementations for the CLI
//!
//! - start: Start the log console server
//! - test: Validate configuration and probe the log store
//! - config: Configuration display and validation

pub mod config;
pub mod start;
