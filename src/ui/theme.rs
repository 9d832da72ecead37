//! Visual theme and styling.

use console::Style;

/// Hostcheck's visual theme.
#[derive(Debug, Clone)]
pub struct HostcheckTheme {
    /// Style for passing checks (green).
    pub success: Style,
    /// Style for warnings (orange).
    pub warning: Style,
    /// Style for failing checks and errors (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
}

impl Default for HostcheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl HostcheckTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format indented detail lines under a failure.
    pub fn format_detail(&self, detail: &str) -> String {
        detail
            .lines()
            .map(|line| format!("    {}", self.dim.apply_to(line)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = HostcheckTheme::plain().format_success("Port(22)");
        assert_eq!(msg, "✓ Port(22)");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = HostcheckTheme::plain().format_warning("Caution");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Caution"));
    }

    #[test]
    fn theme_formats_error() {
        let msg = HostcheckTheme::plain().format_error("Port(9999)");
        assert_eq!(msg, "✗ Port(9999)");
    }

    #[test]
    fn theme_indents_detail_lines() {
        let msg = HostcheckTheme::plain().format_detail("Port not open\n\tWanted: 1");
        assert_eq!(msg, "    Port not open\n    \tWanted: 1");
    }

    #[test]
    fn theme_formats_header() {
        let msg = HostcheckTheme::plain().format_header("web");
        assert!(msg.contains("web"));
    }
}
