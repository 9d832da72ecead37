//! The check catalogue.
//!
//! Checks are grouped by domain:
//!
//! - [`docker`] - Pulled images and running containers
//! - [`users`] - Users, groups and group membership
//! - [`network`] - Ports, interfaces, routes, DNS and reachability
//!
//! Each domain exposes a `CHECKS` table; [`CheckRegistry`] merges them and
//! resolves names case-insensitively.
//!
//! # Example
//!
//! ```
//! use hostcheck::checks::CheckRegistry;
//! use hostcheck::host::StubHost;
//!
//! let host = StubHost::new()
//!     .with_command("docker", ["images"], "REPOSITORY   TAG\nubuntu       latest\n");
//! let registry = CheckRegistry::new();
//!
//! let result = registry.run("DockerImage", &["ubuntu".to_string()], &host).unwrap();
//! assert_eq!(result.exit_code(), 0);
//! ```

pub mod docker;
pub mod network;
pub mod users;

use crate::check::{CheckDef, CheckResult};
use crate::error::{HostcheckError, Result};
use crate::host::Host;
use crate::source::Source;
use crate::table::{tokenize, Separator, Table};

/// Registry of all known checks.
pub struct CheckRegistry {
    checks: Vec<CheckDef>,
}

impl CheckRegistry {
    /// Create a registry with the built-in checks.
    pub fn new() -> Self {
        let mut checks = Vec::new();
        checks.extend_from_slice(docker::CHECKS);
        checks.extend_from_slice(users::CHECKS);
        checks.extend_from_slice(network::CHECKS);
        Self { checks }
    }

    /// Look up a check by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&CheckDef> {
        self.checks
            .iter()
            .find(|def| def.name.eq_ignore_ascii_case(name))
    }

    /// Whether a check with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All checks, in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = &CheckDef> {
        self.checks.iter()
    }

    /// Number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Resolve `name` and invoke it with `parameters`.
    pub fn run(&self, name: &str, parameters: &[String], host: &dyn Host) -> Result<CheckResult> {
        let def = self.get(name).ok_or_else(|| HostcheckError::UnknownCheck {
            name: name.to_string(),
        })?;
        def.invoke(parameters, host)
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Read `source` through `host` and tokenize it into lines of `columns`.
pub(crate) fn read_table(host: &dyn Host, source: &Source, columns: &Separator) -> Result<Table> {
    let text = host.read(source)?;
    Ok(tokenize(&text, &Separator::newline(), columns))
}

/// Whether `wanted` is one of `values`.
pub(crate) fn contains(values: &[String], wanted: &str) -> bool {
    values.iter().any(|v| v == wanted)
}
