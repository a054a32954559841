//! cargofleet CLI library.
//!
//! Command handlers, logging setup, terminal styling and output formatting
//! for the `cargofleet-cli` binary.

pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;
