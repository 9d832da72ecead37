//! Access to host state.
//!
//! Checks never touch the machine directly. They go through the [`Host`]
//! trait, which has one real implementation ([`SystemHost`]) and one
//! fixture-backed implementation ([`StubHost`]) for tests.
//!
//! # Example
//!
//! ```
//! use hostcheck::host::{Host, StubHost};
//! use hostcheck::source::Source;
//!
//! let host = StubHost::new().with_file("/etc/group", "sudo:x:27:alice\n");
//! let text = host.read(&Source::file("/etc/group")).unwrap();
//! assert!(text.contains("alice"));
//! ```

pub mod stub;
pub mod system;

pub use stub::StubHost;
pub use system::SystemHost;

use crate::error::Result;
use crate::source::Source;
use std::fmt;
use std::net::IpAddr;
use std::time::Duration;

/// A user account as reported by the user database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    /// Login name.
    pub username: String,
    /// Numeric user id.
    pub uid: u32,
    /// Primary group id.
    pub gid: u32,
    /// Display name (first GECOS entry).
    pub name: String,
    /// Home directory.
    pub home_dir: String,
}

/// A network interface and the addresses bound to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceInfo {
    /// Interface name, e.g. `eth0`.
    pub name: String,
    /// Whether the interface is administratively up.
    pub up: bool,
    /// Addresses of every family bound to the interface.
    pub addresses: Vec<IpAddr>,
}

/// Transport protocol for reachability checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Tcp,
    Udp,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Tcp => write!(f, "TCP"),
            Protocol::Udp => write!(f, "UDP"),
        }
    }
}

/// Read-only view of the host a check runs against.
///
/// Every method either answers or returns an environment error. No method
/// changes host state.
pub trait Host {
    /// Raw text of a file or command output.
    fn read(&self, source: &Source) -> Result<String>;

    /// Look up a user by numeric uid or, failing that, by login name.
    ///
    /// `Ok(None)` means the user does not exist.
    fn lookup_user(&self, name_or_uid: &str) -> Result<Option<UserInfo>>;

    /// All network interfaces, in enumeration order.
    fn interfaces(&self) -> Result<Vec<InterfaceInfo>>;

    /// Whether a host name resolves to at least one address.
    fn resolves(&self, name: &str) -> bool;

    /// Whether a connection to `address` (`host:port`) can be made.
    ///
    /// `None` uses the operating system's default connect behaviour.
    ///
    /// # Errors
    ///
    /// Returns `AddressUnresolvable` if `address` cannot be parsed or
    /// resolved.
    fn connect(&self, protocol: Protocol, address: &str, timeout: Option<Duration>)
        -> Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_displays_uppercase() {
        assert_eq!(Protocol::Tcp.to_string(), "TCP");
        assert_eq!(Protocol::Udp.to_string(), "UDP");
    }
}
