// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session descriptor and lifecycle state.
//!
//! A session is one interactive notebook server running on a compute node.
//! The descriptor is the transient (host, address, port, environment) tuple
//! built at launch time and used once to construct the server command line.
//! It is never persisted.

use std::net::IpAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Parameters for one notebook session launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDescriptor {
    /// Name of the host the server runs on, as shown in the announced URL.
    pub host: String,
    /// Address the server binds to (passed to `--ip`).
    pub address: IpAddr,
    /// Chosen ephemeral port.
    pub port: u16,
    /// Root of the Python virtual environment activated before launch.
    pub env_path: PathBuf,
}

impl SessionDescriptor {
    /// The URL announced to the user, built from host name and port.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// The single informational line written to stdout before the server
    /// starts. The scheduler redirects it into the job's output log.
    pub fn announce_line(&self) -> String {
        format!("executing jupyter on {}", self.url())
    }
}

/// Lifecycle of a session.
///
/// Deliberately trivial: no intermediate states, no retries. Termination is
/// triggered externally (job kill or server exit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Pending,
    Running,
    Terminated,
}

impl SessionState {
    /// Whether `next` is a legal successor of `self`.
    pub fn can_transition_to(&self, next: SessionState) -> bool {
        matches!(
            (*self, next),
            (SessionState::Pending, SessionState::Running)
                | (SessionState::Running, SessionState::Terminated)
                // A launch that fails before spawn goes straight to terminated.
                | (SessionState::Pending, SessionState::Terminated)
        )
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SessionState::Pending => "pending",
            SessionState::Running => "running",
            SessionState::Terminated => "terminated",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
