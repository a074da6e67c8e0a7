// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Launch orchestration.
//!
//! `prepare` does everything fallible up front (user, environment, port,
//! host) and yields a `PreparedLaunch`. `run` then spawns the server
//! in the foreground and hands back its exit status. The split keeps the
//! announce line ("executing jupyter on http://host:port") printable by the
//! caller strictly after preparation succeeds and strictly before the server
//! starts.

use std::process::ExitStatus;

use nbg_core::{Config, PortSource, SessionDescriptor, SessionState};
use tokio::process::Command;

use crate::command::build_server_command;
use crate::error::LaunchError;
use crate::host::{self, HostInfo};
use crate::venv;

/// A fully-resolved session, ready to spawn.
#[derive(Debug, Clone)]
pub struct PreparedLaunch {
    pub descriptor: SessionDescriptor,
    /// Shell command that activates the environment and execs the server.
    pub command: String,
}

impl PreparedLaunch {
    /// The one informational line to print before spawning.
    pub fn announce_line(&self) -> String {
        self.descriptor.announce_line()
    }
}

/// Resolve user and host from the live system, then prepare the launch.
pub fn prepare(config: &Config, ports: &dyn PortSource) -> Result<PreparedLaunch, LaunchError> {
    let user = venv::resolve_user()?;
    let host = host::resolve_host(config.session.ip.as_deref())?;
    prepare_with_host(config, ports, &user, host)
}

/// Prepare a launch for a known user and host.
///
/// Ordering is part of the contract: the environment check runs before the
/// port is drawn, so a missing environment can never leave a port bound.
pub fn prepare_with_host(
    config: &Config,
    ports: &dyn PortSource,
    user: &str,
    host: HostInfo,
) -> Result<PreparedLaunch, LaunchError> {
    let env_path = venv::resolve_env_path(&config.session.env, user);
    let activate = venv::check_env(&env_path)?;

    let port = ports.pick(config.port_range());
    let descriptor = SessionDescriptor {
        host: host.name,
        address: host.address,
        port,
        env_path,
    };

    tracing::info!(
        host = %descriptor.host,
        address = %descriptor.address,
        port = descriptor.port,
        env = %descriptor.env_path.display(),
        "session prepared"
    );

    let command = build_server_command(&config.session.server, &activate, &descriptor);
    Ok(PreparedLaunch {
        descriptor,
        command,
    })
}

/// Run the prepared server command in the foreground.
///
/// The launcher does not supervise the server: no restarts, no health checks.
/// The returned status is whatever the server exited with; a port collision
/// shows up here as the server's own bind failure.
pub async fn run(prepared: &PreparedLaunch) -> Result<ExitStatus, LaunchError> {
    let mut state = SessionState::Pending;
    tracing::info!(url = %prepared.descriptor.url(), state = %state, "starting server");

    let mut child = Command::new("bash")
        .arg("-c")
        .arg(&prepared.command)
        .spawn()
        .map_err(LaunchError::Spawn)?;

    state = SessionState::Running;
    tracing::debug!(state = %state, "server spawned");

    let status = child.wait().await.map_err(LaunchError::Spawn)?;

    state = SessionState::Terminated;
    tracing::info!(state = %state, code = ?status.code(), "server exited");
    Ok(status)
}

#[cfg(test)]
#[path = "launch_tests.rs"]
mod tests;
