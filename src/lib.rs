//! Hostcheck - assert facts about the running host.
//!
//! Hostcheck runs named checks ("is this Docker image pulled?", "is this
//! user in that group?", "is port 8080 open?") against the machine it runs
//! on. Each check reads a command's output or a system file, tokenizes it
//! into a table and compares one column against the wanted value. A check
//! that does not hold returns a diagnostic naming what was wanted and what
//! was found.
//!
//! # Modules
//!
//! - [`check`] - Check contract: results, parameters, definitions
//! - [`checks`] - The check catalogue and registry
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Checklist loading, parsing, and validation
//! - [`diagnostic`] - Wanted/found failure messages
//! - [`error`] - Error types and result aliases
//! - [`host`] - Access to the machine: files, commands, users, sockets
//! - [`runner`] - Checklist execution
//! - [`shell`] - Shell command execution
//! - [`source`] - File and command data sources
//! - [`table`] - Row/column tokenizing and column extraction
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use hostcheck::checks::CheckRegistry;
//! use hostcheck::host::StubHost;
//!
//! let host = StubHost::new().with_command(
//!     "docker",
//!     ["images"],
//!     "REPOSITORY   TAG      IMAGE ID\nubuntu       latest   abc123\n",
//! );
//! let registry = CheckRegistry::new();
//!
//! let result = registry.run("DockerImage", &["ubuntu".into()], &host).unwrap();
//! assert!(result.is_success());
//!
//! let result = registry.run("DockerImage", &["alpine".into()], &host).unwrap();
//! assert_eq!(result.exit_code(), 1);
//! assert!(result.message().starts_with("Docker image was not found"));
//! ```

pub mod check;
pub mod checks;
pub mod cli;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod host;
pub mod runner;
pub mod shell;
pub mod source;
pub mod table;
pub mod ui;

pub use error::{HostcheckError, Result};
