//! CLI layer: argument parsing, command dispatch and the interactive menu

pub mod args;
pub mod commands;
pub mod error;
pub mod exitcode;
pub mod menu;

pub use args::{Cli, Commands};
pub use commands::execute_command;
pub use error::{CliError, CliResult};
