//! Interactive shell that presents the store, the edit form, and the monthly
//! chart in a terminal.

pub mod chart;
pub mod commands;
pub mod core;
pub mod help;
pub mod output;
pub mod registry;
mod shell;

pub use self::core::{CliError, CliMode, CommandError, LoopControl, ShellContext};
pub use shell::run_cli;
