//! The real host.

use super::{Host, InterfaceInfo, Protocol, UserInfo};
use crate::error::{HostcheckError, Result};
use crate::source::{self, Source};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs, UdpSocket};
use std::time::Duration;

/// [`Host`] backed by the running machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl SystemHost {
    /// Create a system host.
    pub fn new() -> Self {
        Self
    }
}

impl Host for SystemHost {
    fn read(&self, source: &Source) -> Result<String> {
        source::read(source)
    }

    fn lookup_user(&self, name_or_uid: &str) -> Result<Option<UserInfo>> {
        users::lookup(name_or_uid)
    }

    fn interfaces(&self) -> Result<Vec<InterfaceInfo>> {
        interfaces::enumerate()
    }

    fn resolves(&self, name: &str) -> bool {
        let resolved = (name, 0)
            .to_socket_addrs()
            .map(|mut addrs| addrs.next().is_some())
            .unwrap_or(false);
        tracing::debug!(name, resolved, "dns lookup");
        resolved
    }

    fn connect(
        &self,
        protocol: Protocol,
        address: &str,
        timeout: Option<Duration>,
    ) -> Result<bool> {
        let targets = resolve_address(address)?;
        let connected = connect_any(protocol, &targets, timeout);
        tracing::debug!(%protocol, address, ?timeout, connected, "connection attempt");
        Ok(connected)
    }
}

/// Every address `address` resolves to, IPv4 first.
fn resolve_address(address: &str) -> Result<Vec<SocketAddr>> {
    let mut targets: Vec<SocketAddr> = address
        .to_socket_addrs()
        .map(|addrs| addrs.collect())
        .unwrap_or_default();
    if targets.is_empty() {
        return Err(HostcheckError::AddressUnresolvable {
            address: address.to_string(),
        });
    }
    targets.sort_by_key(|t| t.is_ipv6());
    Ok(targets)
}

/// Try each target in order; true on the first that connects.
fn connect_any(protocol: Protocol, targets: &[SocketAddr], timeout: Option<Duration>) -> bool {
    let timeout = timeout.filter(|t| !t.is_zero());
    targets.iter().any(|target| match protocol {
        Protocol::Tcp => match timeout {
            Some(t) => TcpStream::connect_timeout(target, t).is_ok(),
            None => TcpStream::connect(target).is_ok(),
        },
        Protocol::Udp => connect_udp(*target, timeout),
    })
}

fn connect_udp(target: SocketAddr, timeout: Option<Duration>) -> bool {
    let local = if target.is_ipv4() {
        "0.0.0.0:0"
    } else {
        "[::]:0"
    };
    let Ok(socket) = UdpSocket::bind(local) else {
        return false;
    };
    if let Some(t) = timeout {
        if socket.set_write_timeout(Some(t)).is_err() {
            return false;
        }
    }
    socket.connect(target).is_ok()
}

#[cfg(unix)]
mod users {
    use crate::error::{HostcheckError, Result};
    use crate::host::UserInfo;
    use nix::unistd::{Uid, User};

    pub fn lookup(name_or_uid: &str) -> Result<Option<UserInfo>> {
        if let Ok(raw) = name_or_uid.parse::<u32>() {
            if let Some(user) = User::from_uid(Uid::from_raw(raw)).map_err(query_error)? {
                return Ok(Some(convert(user)));
            }
        }
        Ok(User::from_name(name_or_uid)
            .map_err(query_error)?
            .map(convert))
    }

    fn query_error(e: nix::Error) -> HostcheckError {
        HostcheckError::UserQuery {
            message: e.to_string(),
        }
    }

    fn convert(user: User) -> UserInfo {
        let gecos = user.gecos.to_string_lossy();
        UserInfo {
            username: user.name,
            uid: user.uid.as_raw(),
            gid: user.gid.as_raw(),
            name: gecos.split(',').next().unwrap_or_default().to_string(),
            home_dir: user.dir.to_string_lossy().to_string(),
        }
    }
}

#[cfg(not(unix))]
mod users {
    use crate::error::{HostcheckError, Result};
    use crate::host::UserInfo;

    pub fn lookup(_name_or_uid: &str) -> Result<Option<UserInfo>> {
        Err(HostcheckError::UserQuery {
            message: "user lookup is not supported on this platform".into(),
        })
    }
}

#[cfg(unix)]
mod interfaces {
    use crate::error::{HostcheckError, Result};
    use crate::host::InterfaceInfo;
    use nix::net::if_::InterfaceFlags;
    use std::net::{IpAddr, SocketAddrV4, SocketAddrV6};

    /// Group `getifaddrs` entries (one per address) into interfaces.
    pub fn enumerate() -> Result<Vec<InterfaceInfo>> {
        let addrs = nix::ifaddrs::getifaddrs().map_err(|e| HostcheckError::InterfaceQuery {
            message: e.to_string(),
        })?;

        let mut interfaces: Vec<InterfaceInfo> = Vec::new();
        for ifaddr in addrs {
            let index = match interfaces
                .iter()
                .position(|i| i.name == ifaddr.interface_name)
            {
                Some(index) => index,
                None => {
                    interfaces.push(InterfaceInfo {
                        name: ifaddr.interface_name.clone(),
                        up: false,
                        addresses: Vec::new(),
                    });
                    interfaces.len() - 1
                }
            };

            let entry = &mut interfaces[index];
            entry.up |= ifaddr.flags.contains(InterfaceFlags::IFF_UP);

            if let Some(address) = ifaddr.address.as_ref() {
                if let Some(v4) = address.as_sockaddr_in() {
                    entry.addresses.push(IpAddr::V4(*SocketAddrV4::from(*v4).ip()));
                } else if let Some(v6) = address.as_sockaddr_in6() {
                    entry.addresses.push(IpAddr::V6(*SocketAddrV6::from(*v6).ip()));
                }
            }
        }
        Ok(interfaces)
    }
}

#[cfg(not(unix))]
mod interfaces {
    use crate::error::{HostcheckError, Result};
    use crate::host::InterfaceInfo;

    pub fn enumerate() -> Result<Vec<InterfaceInfo>> {
        Err(HostcheckError::InterfaceQuery {
            message: "interface enumeration is not supported on this platform".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localhost_resolves() {
        assert!(SystemHost::new().resolves("localhost"));
    }

    #[test]
    fn garbage_address_is_unresolvable() {
        let err = SystemHost::new()
            .connect(Protocol::Tcp, "not an address", None)
            .unwrap_err();
        assert!(matches!(err, HostcheckError::AddressUnresolvable { .. }));
    }

    #[test]
    fn tcp_connects_to_local_listener() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let host = SystemHost::new();
        assert!(host.connect(Protocol::Tcp, &addr, None).unwrap());
        assert!(host
            .connect(Protocol::Tcp, &addr, Some(Duration::from_secs(2)))
            .unwrap());
    }

    #[test]
    fn tcp_falls_back_to_later_addresses() {
        let closed = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let open = listener.local_addr().unwrap();
        let unroutable_v6: SocketAddr = format!("[::1]:{}", closed.port()).parse().unwrap();

        let targets = [unroutable_v6, closed, open];
        assert!(connect_any(Protocol::Tcp, &targets, Some(Duration::from_secs(2))));
        assert!(connect_any(Protocol::Tcp, &targets, None));
        assert!(!connect_any(Protocol::Tcp, &targets[..2], Some(Duration::from_secs(2))));
    }

    #[test]
    fn resolved_addresses_put_ipv4_first() {
        let targets = resolve_address("localhost:80").unwrap();
        assert!(!targets.is_empty());
        let first_v6 = targets.iter().position(SocketAddr::is_ipv6);
        let last_v4 = targets.iter().rposition(SocketAddr::is_ipv4);
        if let (Some(v6), Some(v4)) = (first_v6, last_v4) {
            assert!(v4 < v6);
        }
    }

    #[test]
    fn udp_tries_every_address() {
        let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
        let target = socket.local_addr().unwrap();
        assert!(connect_any(Protocol::Udp, &[target], None));
        assert!(!connect_any(Protocol::Udp, &[], None));
    }

    #[test]
    fn tcp_to_closed_port_fails() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().to_string()
        };
        let host = SystemHost::new();
        assert!(!host
            .connect(Protocol::Tcp, &addr, Some(Duration::from_secs(2)))
            .unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn loopback_interface_is_listed() {
        let interfaces = SystemHost::new().interfaces().unwrap();
        assert!(interfaces
            .iter()
            .any(|i| i.addresses.iter().any(|a| a.is_loopback())));
    }

    #[cfg(unix)]
    #[test]
    fn root_user_is_found_by_name_and_uid() {
        let host = SystemHost::new();
        let by_name = host.lookup_user("root").unwrap().unwrap();
        assert_eq!(by_name.uid, 0);
        let by_uid = host.lookup_user("0").unwrap().unwrap();
        assert_eq!(by_uid.username, "root");
    }

    #[cfg(unix)]
    #[test]
    fn unknown_user_is_none() {
        let host = SystemHost::new();
        assert!(host
            .lookup_user("hostcheck-no-such-user")
            .unwrap()
            .is_none());
    }
}
