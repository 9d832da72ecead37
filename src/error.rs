//! Error types for hostcheck operations.
//!
//! This module defines [`HostcheckError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! A check that answers "no" is not an error: it returns
//! [`CheckResult::Failed`](crate::check::CheckResult::Failed). Errors are
//! reserved for environment and input failures, where a check cannot trust
//! its own inputs (unreadable source, permission denied, malformed
//! parameter). The caller decides whether to abort the whole run.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for hostcheck operations.
#[derive(Debug, Error)]
pub enum HostcheckError {
    /// A file data source could not be opened or read.
    #[error("Could not read {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external command reported a permission problem.
    #[error("Permission denied when running: {command}")]
    PermissionDenied { command: String },

    /// An external command could not be started or exited non-zero.
    #[error("Error while running `{command}` (exit code {code:?})\n\t{output}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },

    /// No check is registered under this name.
    #[error("Unknown check: {name}")]
    UnknownCheck { name: String },

    /// A check was invoked with the wrong number of parameters.
    #[error("Check '{check}' expects {expected} parameter(s), got {got}")]
    WrongArity {
        check: String,
        expected: usize,
        got: usize,
    },

    /// A parameter could not be parsed into the type the check needs.
    #[error("Check '{check}' parameter {position} ({value:?}): {message}")]
    InvalidParameter {
        check: String,
        position: usize,
        value: String,
        message: String,
    },

    /// A network address could not be parsed or resolved.
    #[error("Could not resolve address: {address}")]
    AddressUnresolvable { address: String },

    /// Network interfaces could not be enumerated.
    #[error("Could not read network interfaces: {message}")]
    InterfaceQuery { message: String },

    /// The user database could not be queried.
    #[error("Could not query user database: {message}")]
    UserQuery { message: String },

    /// A data source was read but its content is malformed.
    #[error("Malformed data in {source_name}: {message}")]
    MalformedSource {
        source_name: String,
        message: String,
    },

    /// Checklist file not found at expected location.
    #[error("Checklist not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse checklist file.
    #[error("Failed to parse checklist at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Checklist references unknown checks or passes the wrong parameters.
    #[error("Invalid checklist:\n{message}")]
    ChecklistInvalid { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for hostcheck operations.
pub type Result<T> = std::result::Result<T, HostcheckError>;
