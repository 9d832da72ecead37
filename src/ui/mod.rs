//! Terminal output for check results.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for styled terminal output
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use hostcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("web servers");
//! ui.warning("Checklist web servers has no checks");
//! assert!(ui.has_warning("no checks"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, HostcheckTheme};

use crate::check::CheckReport;
use crate::runner::RunSummary;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show the outcome of one check.
    fn show_report(&mut self, report: &CheckReport);

    /// Show the totals at the end of a run.
    fn show_summary(&mut self, summary: &RunSummary);
}

/// Render a check invocation as `Name(param, param)`.
pub fn invocation(check: &str, parameters: &[String]) -> String {
    format!("{}({})", check, parameters.join(", "))
}
