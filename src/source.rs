//! Data sources that checks read host state from.
//!
//! A [`Source`] names either a file or a command. [`read`] turns it into raw
//! text; anything that prevents a clean read is an error, never an empty
//! string, so a check only answers when its data source is healthy.

use crate::error::{HostcheckError, Result};
use crate::shell::{execute_combined, CommandSpec};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Where raw output comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    /// Contents of a file, e.g. `/etc/group`.
    File(PathBuf),

    /// Combined stdout and stderr of a command, e.g. `docker ps -a`.
    Command(CommandSpec),
}

impl Source {
    /// A file source.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Source::File(path.into())
    }

    /// A command source.
    pub fn command<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Source::Command(CommandSpec::new(program, args))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Command(spec) => write!(f, "`{}`", spec),
        }
    }
}

/// Read raw text from a source.
///
/// # Errors
///
/// Returns `SourceUnreadable` if a file cannot be read, `PermissionDenied`
/// if a command's output reports a permission problem, and `CommandFailed`
/// if a command cannot be started or exits non-zero.
pub fn read(source: &Source) -> Result<String> {
    tracing::debug!(%source, "reading source");
    match source {
        Source::File(path) => {
            fs::read_to_string(path).map_err(|e| HostcheckError::SourceUnreadable {
                path: path.clone(),
                source: e,
            })
        }
        Source::Command(spec) => execute_combined(spec),
    }
}
