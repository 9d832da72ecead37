//! Fixture-backed host for testing.
//!
//! `StubHost` implements the [`Host`] trait from pre-configured data:
//! source text keyed by [`Source`], a user table, interfaces, resolvable
//! names and reachable addresses. Anything not configured behaves like a
//! missing file, an unknown user or an unreachable peer.
//!
//! # Example
//!
//! ```
//! use hostcheck::host::{Host, Protocol, StubHost};
//!
//! let host = StubHost::new()
//!     .with_command("docker", ["images"], "REPOSITORY   TAG\nubuntu       latest\n")
//!     .with_reachable(Protocol::Tcp, "db:5432");
//!
//! assert!(host.connect(Protocol::Tcp, "db:5432", None).unwrap());
//! assert!(!host.connect(Protocol::Tcp, "db:5433", None).unwrap());
//! ```

use super::{Host, InterfaceInfo, Protocol, UserInfo};
use crate::error::{HostcheckError, Result};
use crate::source::Source;
use std::collections::{HashMap, HashSet};
use std::net::IpAddr;
use std::time::Duration;

/// Host implementation for testing.
#[derive(Debug, Clone, Default)]
pub struct StubHost {
    sources: HashMap<Source, String>,
    users: Vec<UserInfo>,
    interfaces: Vec<InterfaceInfo>,
    resolvable: HashSet<String>,
    reachable: HashSet<(Protocol, String)>,
    reads: std::cell::RefCell<Vec<Source>>,
}

impl StubHost {
    /// Create an empty stub host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `text` for `source`.
    pub fn with_source(mut self, source: Source, text: impl Into<String>) -> Self {
        self.sources.insert(source, text.into());
        self
    }

    /// Serve `text` as the contents of the file at `path`.
    pub fn with_file(self, path: &str, text: impl Into<String>) -> Self {
        self.with_source(Source::file(path), text)
    }

    /// Serve `text` as the combined output of `program args...`.
    pub fn with_command<I, S>(self, program: &str, args: I, text: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_source(Source::command(program, args), text)
    }

    /// Add a user account.
    pub fn with_user(mut self, user: UserInfo) -> Self {
        self.users.push(user);
        self
    }

    /// Add a network interface.
    pub fn with_interface(mut self, name: &str, up: bool, addresses: &[IpAddr]) -> Self {
        self.interfaces.push(InterfaceInfo {
            name: name.to_string(),
            up,
            addresses: addresses.to_vec(),
        });
        self
    }

    /// Make a host name resolvable.
    pub fn with_resolvable(mut self, name: &str) -> Self {
        self.resolvable.insert(name.to_string());
        self
    }

    /// Make `address` reachable over `protocol`.
    pub fn with_reachable(mut self, protocol: Protocol, address: &str) -> Self {
        self.reachable.insert((protocol, address.to_string()));
        self
    }

    /// Every source read so far, in order.
    pub fn reads(&self) -> Vec<Source> {
        self.reads.borrow().clone()
    }
}

impl Host for StubHost {
    fn read(&self, source: &Source) -> Result<String> {
        self.reads.borrow_mut().push(source.clone());
        match self.sources.get(source) {
            Some(text) => Ok(text.clone()),
            None => Err(match source {
                Source::File(path) => HostcheckError::SourceUnreadable {
                    path: path.clone(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "not stubbed"),
                },
                Source::Command(spec) => HostcheckError::CommandFailed {
                    command: spec.to_string(),
                    code: None,
                    output: "not stubbed".into(),
                },
            }),
        }
    }

    fn lookup_user(&self, name_or_uid: &str) -> Result<Option<UserInfo>> {
        if let Ok(uid) = name_or_uid.parse::<u32>() {
            if let Some(user) = self.users.iter().find(|u| u.uid == uid) {
                return Ok(Some(user.clone()));
            }
        }
        Ok(self
            .users
            .iter()
            .find(|u| u.username == name_or_uid)
            .cloned())
    }

    fn interfaces(&self) -> Result<Vec<InterfaceInfo>> {
        Ok(self.interfaces.clone())
    }

    fn resolves(&self, name: &str) -> bool {
        self.resolvable.contains(name)
    }

    fn connect(
        &self,
        protocol: Protocol,
        address: &str,
        _timeout: Option<Duration>,
    ) -> Result<bool> {
        if !address.contains(':') {
            return Err(HostcheckError::AddressUnresolvable {
                address: address.to_string(),
            });
        }
        Ok(self.reachable.contains(&(protocol, address.to_string())))
    }
}
