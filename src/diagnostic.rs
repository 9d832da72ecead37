//! Uniform "wanted vs. found" failure messages.
//!
//! Every failing check reports the same three things: what it was
//! asserting, the value it looked for, and the values that were actually
//! present.
//!
//! ```
//! use hostcheck::diagnostic::Diagnostic;
//!
//! let diag = Diagnostic::new("Port not open", "8080", ["22", "443"]);
//! assert_eq!(diag.to_string(), "Port not open\n\tWanted: 8080\n\tFound: 22, 443");
//! ```

use crate::check::CheckResult;
use std::fmt;

/// Rendered in place of the found list when nothing was found.
pub const NOTHING_FOUND: &str = "(none)";

/// A failed assertion: label, wanted value and found values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// What was being asserted, e.g. "Docker image was not found".
    pub label: String,
    /// The value that was searched for.
    pub wanted: String,
    /// The values that were present, in source order.
    pub found: Vec<String>,
}

impl Diagnostic {
    /// Create a diagnostic.
    pub fn new<I, S>(label: impl Into<String>, wanted: impl Into<String>, found: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            wanted: wanted.into(),
            found: found.into_iter().map(Into::into).collect(),
        }
    }

    /// Render the diagnostic as a check failure.
    pub fn into_result(self) -> CheckResult {
        CheckResult::Failed(self.to_string())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\tWanted: {}\n\tFound: ", self.label, self.wanted)?;
        if self.found.is_empty() {
            write!(f, "{}", NOTHING_FOUND)
        } else {
            write!(f, "{}", self.found.join(", "))
        }
    }
}

impl From<Diagnostic> for CheckResult {
    fn from(diag: Diagnostic) -> Self {
        diag.into_result()
    }
}

/// Build a failed [`CheckResult`] from a label, the wanted value and the
/// values found.
pub fn format<I, S>(label: &str, wanted: &str, found: I) -> CheckResult
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Diagnostic::new(label, wanted, found).into_result()
}
