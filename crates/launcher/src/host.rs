// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local host name and address resolution.
//!
//! The announced URL uses the host name; the server binds the resolved
//! primary address. IPv4 is preferred when the name resolves to both
//! families, matching what the notebook server's `--ip` flag expects on the
//! cluster.

use std::net::{IpAddr, ToSocketAddrs};

use crate::error::LaunchError;

/// The resolved identity of the machine a session runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub name: String,
    pub address: IpAddr,
}

/// Resolve the local host's name and primary address.
///
/// `override_ip` short-circuits address resolution (config `session.ip`);
/// the host name is still used for the announced URL.
pub fn resolve_host(override_ip: Option<&str>) -> Result<HostInfo, LaunchError> {
    let name = local_host_name()?;
    let address = match override_ip {
        Some(value) => parse_address(value)?,
        None => lookup_address(&name)?,
    };
    tracing::debug!(host = %name, address = %address, "resolved local host");
    Ok(HostInfo { name, address })
}

/// The local host name from the kernel.
pub fn local_host_name() -> Result<String, LaunchError> {
    hostname::get()
        .map_err(|e| LaunchError::HostName(e.to_string()))?
        .into_string()
        .map_err(|os| LaunchError::HostName(format!("not valid UTF-8: {:?}", os)))
}

/// Parse an explicit bind-address override.
pub fn parse_address(value: &str) -> Result<IpAddr, LaunchError> {
    value.parse().map_err(|_| LaunchError::InvalidAddress {
        value: value.to_string(),
    })
}

/// Resolve a host name to its primary address, preferring IPv4.
pub fn lookup_address(host: &str) -> Result<IpAddr, LaunchError> {
    let addrs: Vec<IpAddr> = (host, 0u16)
        .to_socket_addrs()
        .map_err(|_| LaunchError::HostResolve {
            host: host.to_string(),
        })?
        .map(|sa| sa.ip())
        .collect();

    addrs
        .iter()
        .find(|a| a.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| LaunchError::HostResolve {
            host: host.to_string(),
        })
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
