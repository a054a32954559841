// Module exports for CLI subcommands.
//
// Each module handles a specific CLI subcommand. main.rs parses arguments and
// dispatches to these handlers, then hands the results to `output` for rendering.

pub mod demo;
pub mod products;
