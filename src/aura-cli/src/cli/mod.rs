//! CLI argument parsing and command dispatch.
//!
//! - `args` - command-line argument structures
//! - `handlers` - command execution handlers

pub mod args;
pub mod handlers;

pub use args::{AdminCommands, ChatArgs, Cli, Commands, LogLevel};
pub use handlers::dispatch_command;
