//! Styled terminal UI.

use console::Term;
use std::io::Write;

use crate::check::CheckReport;
use crate::runner::RunSummary;

use super::{invocation, should_use_colors, HostcheckTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Status goes to stdout, errors to stderr.
pub struct TerminalUI {
    term: Term,
    err_term: Term,
    theme: HostcheckTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            HostcheckTheme::new()
        } else {
            HostcheckTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err_term: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err_term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_report(&mut self, report: &CheckReport) {
        let label = invocation(&report.check, &report.parameters);
        if report.exit_code == 0 {
            if self.mode.shows_passes() {
                writeln!(self.term, "{}", self.theme.format_success(&label)).ok();
            }
        } else if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_error(&label)).ok();
            writeln!(self.term, "{}", self.theme.format_detail(&report.message)).ok();
        }
    }

    fn show_summary(&mut self, summary: &RunSummary) {
        if !self.mode.shows_status() {
            return;
        }
        let line = format!(
            "{} passed, {} failed ({} total)",
            summary.passed(),
            summary.failed(),
            summary.total()
        );
        writeln!(self.term).ok();
        if summary.all_passed() {
            writeln!(self.term, "{}", self.theme.format_success(&line)).ok();
        } else {
            writeln!(self.term, "{}", self.theme.format_error(&line)).ok();
        }
    }
}

/// Create the terminal UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_keeps_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn create_ui_returns_requested_mode() {
        let ui = create_ui(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn silent_ui_accepts_reports() {
        let mut ui = TerminalUI::new(OutputMode::Silent);
        let report = CheckReport {
            check: "Port".into(),
            parameters: vec!["22".into()],
            exit_code: 1,
            message: "Port not open".into(),
        };
        ui.show_report(&report);
        ui.show_summary(&RunSummary {
            reports: vec![report],
        });
    }
}
