//! External command execution.

use crate::error::{HostcheckError, Result};
use std::fmt;
use std::process::Command;
use std::time::{Duration, Instant};

/// A program and its arguments. No shell is involved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandSpec {
    /// Program name, resolved through `PATH`.
    pub program: String,

    /// Arguments, passed verbatim.
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a command spec.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Stdout followed by stderr.
    pub fn combined_output(&self) -> String {
        let mut out = self.stdout.clone();
        out.push_str(&self.stderr);
        out
    }
}

/// Execute a command and capture both output streams.
///
/// Only a failure to start the program is an error here; a non-zero exit
/// is reported through [`CommandResult::success`].
pub fn execute(spec: &CommandSpec) -> Result<CommandResult> {
    let start = Instant::now();

    let output = Command::new(&spec.program)
        .args(&spec.args)
        .output()
        .map_err(|e| HostcheckError::CommandFailed {
            command: spec.to_string(),
            code: None,
            output: e.to_string(),
        })?;

    let duration = start.elapsed();
    tracing::debug!(command = %spec, ?duration, status = ?output.status, "command finished");

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration,
        success: output.status.success(),
    })
}

/// Execute a command and return its combined output, failing on any
/// unsuccessful run.
///
/// Output mentioning "permission denied" maps to
/// [`HostcheckError::PermissionDenied`]; every other failure to
/// [`HostcheckError::CommandFailed`].
pub fn execute_combined(spec: &CommandSpec) -> Result<String> {
    let result = execute(spec)?;
    let combined = result.combined_output();

    if result.success {
        return Ok(combined);
    }

    if combined.to_lowercase().contains("permission denied") {
        return Err(HostcheckError::PermissionDenied {
            command: spec.to_string(),
        });
    }

    Err(HostcheckError::CommandFailed {
        command: spec.to_string(),
        code: result.exit_code,
        output: combined.trim().to_string(),
    })
}
