//! External command execution.

pub mod command;

pub use command::{execute, execute_combined, CommandResult, CommandSpec};
