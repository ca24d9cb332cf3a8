//! CLI argument parsing for the portfolio TUI.

mod args;

pub use args::{parse_args, print_usage, CliConfig, Command, VERSION};
