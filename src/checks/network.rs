//! Network checks: ports, interfaces, routing table, DNS and reachability.

use super::{contains, read_table};
use crate::check::{CheckDef, CheckResult, Parameters};
use crate::diagnostic;
use crate::error::{HostcheckError, Result};
use crate::host::{Host, InterfaceInfo, Protocol};
use crate::source::Source;
use crate::table::{Separator, Table};
use regex::Regex;
use std::net::IpAddr;
use std::sync::LazyLock;
use std::time::Duration;

/// Hex port suffix of a `/proc/net/*` address such as `0100007F:1F90`.
static HEX_PORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([0-9A-Fa-f]+)$").expect("HEX_PORT must compile"));

/// local_address column of `/proc/net/tcp` and `/proc/net/udp`.
const PROC_LOCAL_ADDRESS: usize = 1;

/// Columns of `route -n`.
const ROUTE_DESTINATION: usize = 0;
const ROUTE_GATEWAY: usize = 1;
const ROUTE_IFACE: usize = 7;
const ROUTE_FIELDS: usize = 8;

const UNSPECIFIED: &str = "0.0.0.0";

pub const CHECKS: &[CheckDef] = &[
    CheckDef {
        name: "Port",
        summary: "A TCP port is open locally (/proc/net/tcp)",
        params: &["port"],
        run: port_tcp,
    },
    CheckDef {
        name: "PortUDP",
        summary: "A UDP port is open locally (/proc/net/udp)",
        params: &["port"],
        run: port_udp,
    },
    CheckDef {
        name: "Interface",
        summary: "A network interface exists",
        params: &["interface"],
        run: interface,
    },
    CheckDef {
        name: "Up",
        summary: "A network interface is up",
        params: &["interface"],
        run: up,
    },
    CheckDef {
        name: "Ip4",
        summary: "An interface has the given IPv4 address",
        params: &["interface", "address"],
        run: ip4,
    },
    CheckDef {
        name: "Ip6",
        summary: "An interface has the given IPv6 address",
        params: &["interface", "address"],
        run: ip6,
    },
    CheckDef {
        name: "Gateway",
        summary: "The default gateway has the given address",
        params: &["address"],
        run: gateway,
    },
    CheckDef {
        name: "GatewayInterface",
        summary: "The default gateway uses the given interface",
        params: &["interface"],
        run: gateway_interface,
    },
    CheckDef {
        name: "RoutingTableDestination",
        summary: "An address is a destination in the routing table",
        params: &["address"],
        run: routing_table_destination,
    },
    CheckDef {
        name: "RoutingTableInterface",
        summary: "An interface appears in the routing table",
        params: &["interface"],
        run: routing_table_interface,
    },
    CheckDef {
        name: "RoutingTableGateway",
        summary: "An address is a gateway in the routing table",
        params: &["address"],
        run: routing_table_gateway,
    },
    CheckDef {
        name: "Host",
        summary: "A host name can be resolved",
        params: &["host"],
        run: host_resolves,
    },
    CheckDef {
        name: "TCP",
        summary: "A TCP connection to host:port succeeds",
        params: &["address"],
        run: tcp,
    },
    CheckDef {
        name: "UDP",
        summary: "A UDP connection to host:port succeeds",
        params: &["address"],
        run: udp,
    },
    CheckDef {
        name: "TCPTimeout",
        summary: "A TCP connection to host:port succeeds within a timeout",
        params: &["address", "timeout"],
        run: tcp_timeout,
    },
    CheckDef {
        name: "UDPTimeout",
        summary: "A UDP connection to host:port succeeds within a timeout",
        params: &["address", "timeout"],
        run: udp_timeout,
    },
];

// --- Ports ---

/// Local ports listed in a `/proc/net/{tcp,udp}` file, in file order.
pub fn open_ports(host: &dyn Host, path: &str) -> Result<Vec<u16>> {
    let table = read_table(host, &Source::file(path), &Separator::Whitespace)?;
    table
        .column(PROC_LOCAL_ADDRESS, true)
        .iter()
        .filter_map(|address| HEX_PORT.captures(address))
        .map(|caps| {
            u16::from_str_radix(&caps[1], 16).map_err(|e| HostcheckError::MalformedSource {
                source_name: path.to_string(),
                message: format!("could not parse hex port {}: {}", &caps[1], e),
            })
        })
        .collect()
}

fn port_worker(params: &Parameters<'_>, host: &dyn Host, path: &str) -> Result<CheckResult> {
    let port = params.integer(0)?;
    let open = open_ports(host, path)?;
    Ok(CheckResult::check(
        open.iter().any(|p| i64::from(*p) == port),
        || {
            diagnostic::format(
                "Port not open",
                &port.to_string(),
                open.iter().map(u16::to_string),
            )
        },
    ))
}

fn port_tcp(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    port_worker(params, host, "/proc/net/tcp")
}

fn port_udp(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    port_worker(params, host, "/proc/net/udp")
}

// --- Interfaces ---

fn interface_names<'a>(interfaces: impl Iterator<Item = &'a InterfaceInfo>) -> Vec<String> {
    interfaces.map(|i| i.name.clone()).collect()
}

fn interface(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    let name = params.get(0)?;
    let names = interface_names(host.interfaces()?.iter());
    Ok(CheckResult::check(contains(&names, name), || {
        diagnostic::format("Interface does not exist", name, names.iter().cloned())
    }))
}

fn up(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    let name = params.get(0)?;
    let interfaces = host.interfaces()?;
    let names = interface_names(interfaces.iter().filter(|i| i.up));
    Ok(CheckResult::check(contains(&names, name), || {
        diagnostic::format("Interface is not up", name, names.iter().cloned())
    }))
}

/// Addresses of the named interface that belong to one IP family.
fn interface_addresses(
    host: &dyn Host,
    name: &str,
    family: fn(&IpAddr) -> bool,
) -> Result<Vec<String>> {
    Ok(host
        .interfaces()?
        .into_iter()
        .find(|i| i.name == name)
        .map(|i| {
            i.addresses
                .iter()
                .filter(|a| family(a))
                .map(IpAddr::to_string)
                .collect()
        })
        .unwrap_or_default())
}

fn ip_worker(
    params: &Parameters<'_>,
    host: &dyn Host,
    family: fn(&IpAddr) -> bool,
) -> Result<CheckResult> {
    let name = params.get(0)?;
    let wanted = params.get(1)?;
    let canonical = wanted
        .parse::<IpAddr>()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| wanted.to_string());
    let addresses = interface_addresses(host, name, family)?;
    Ok(CheckResult::check(contains(&addresses, &canonical), || {
        diagnostic::format(
            &format!("Interface {} does not have IP", name),
            wanted,
            addresses.iter().cloned(),
        )
    }))
}

fn ip4(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    ip_worker(params, host, IpAddr::is_ipv4)
}

fn ip6(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    ip_worker(params, host, IpAddr::is_ipv6)
}

// --- Routing table ---

/// The kernel routing table as printed by `route -n`, header row first.
///
/// The "Kernel IP routing table" title has fewer than eight fields and is
/// dropped by the field-count guard.
pub fn routing_table(host: &dyn Host) -> Result<Table> {
    Ok(read_table(host, &Source::command("route", ["-n"]), &Separator::Whitespace)?
        .retain_min_fields(ROUTE_FIELDS))
}

/// The first route with a non-zero gateway.
fn default_route(table: &Table) -> Option<&[String]> {
    table
        .data_rows()
        .iter()
        .find(|row| row[ROUTE_GATEWAY] != UNSPECIFIED)
        .map(Vec::as_slice)
}

fn gateway(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    let address = params.get(0)?;
    let table = routing_table(host)?;
    let actual = default_route(&table)
        .map(|row| row[ROUTE_GATEWAY].clone())
        .unwrap_or_else(|| UNSPECIFIED.to_string());
    Ok(CheckResult::check(actual == address, || {
        diagnostic::format("Gateway does not have address", address, [actual.clone()])
    }))
}

fn gateway_interface(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    let name = params.get(0)?;
    let table = routing_table(host)?;
    let actual = default_route(&table).map(|row| row[ROUTE_IFACE].clone());
    Ok(CheckResult::check(actual.as_deref() == Some(name), || {
        diagnostic::format(
            "Default gateway does not operate on interface",
            name,
            actual.clone(),
        )
    }))
}

fn routing_table_match(
    params: &Parameters<'_>,
    host: &dyn Host,
    column: usize,
) -> Result<CheckResult> {
    let wanted = params.get(0)?;
    let values = routing_table(host)?.column(column, true);
    Ok(CheckResult::check(contains(&values, wanted), || {
        diagnostic::format("Not found in routing table", wanted, values.iter().cloned())
    }))
}

fn routing_table_destination(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    routing_table_match(params, host, ROUTE_DESTINATION)
}

fn routing_table_interface(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    routing_table_match(params, host, ROUTE_IFACE)
}

fn routing_table_gateway(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    routing_table_match(params, host, ROUTE_GATEWAY)
}

// --- DNS and reachability ---

fn host_resolves(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    let name = params.get(0)?;
    Ok(CheckResult::check(host.resolves(name), || {
        diagnostic::format("Host cannot be resolved", name, Vec::<String>::new())
    }))
}

fn connection_worker(
    host: &dyn Host,
    protocol: Protocol,
    address: &str,
    timeout: Option<Duration>,
) -> Result<CheckResult> {
    let connected = host.connect(protocol, address, timeout.filter(|t| !t.is_zero()))?;
    Ok(CheckResult::check(connected, || {
        diagnostic::format(
            &format!("Could not connect over {} to host", protocol),
            address,
            Vec::<String>::new(),
        )
    }))
}

fn tcp(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    connection_worker(host, Protocol::Tcp, params.get(0)?, None)
}

fn udp(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    connection_worker(host, Protocol::Udp, params.get(0)?, None)
}

fn tcp_timeout(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    connection_worker(host, Protocol::Tcp, params.get(0)?, Some(params.duration(1)?))
}

fn udp_timeout(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    connection_worker(host, Protocol::Udp, params.get(0)?, Some(params.duration(1)?))
}
