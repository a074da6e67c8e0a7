// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ephemeral port selection
//!
//! Ports are drawn uniformly from a fixed inclusive range. No check is made
//! against already-bound ports; a collision surfaces as a bind failure from
//! the server process. Cluster jobs normally get an exclusive host or slot,
//! so collisions are rare in practice.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default lower bound for session ports.
pub const DEFAULT_PORT_MIN: u16 = 10000;

/// Default upper bound for session ports (inclusive).
pub const DEFAULT_PORT_MAX: u16 = 11999;

/// Errors constructing a port range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PortRangeError {
    #[error("port range is inverted: {min} > {max}")]
    Inverted { min: u16, max: u16 },
    #[error("port range includes privileged ports: {min} < 1024")]
    Privileged { min: u16 },
}

/// An inclusive range of candidate TCP ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRange {
    min: u16,
    max: u16,
}

impl PortRange {
    /// Build a range, rejecting inverted or privileged bounds.
    pub fn new(min: u16, max: u16) -> Result<Self, PortRangeError> {
        if min > max {
            return Err(PortRangeError::Inverted { min, max });
        }
        if min < 1024 {
            return Err(PortRangeError::Privileged { min });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u16 {
        self.min
    }

    pub fn max(&self) -> u16 {
        self.max
    }

    /// Whether `port` lies within the range (inclusive on both ends).
    pub fn contains(&self, port: u16) -> bool {
        port >= self.min && port <= self.max
    }
}

impl Default for PortRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_PORT_MIN,
            max: DEFAULT_PORT_MAX,
        }
    }
}

/// Picks a port from a range
pub trait PortSource: Send + Sync {
    fn pick(&self, range: PortRange) -> u16;
}

/// Uniform random port source for production use
#[derive(Clone, Default)]
pub struct RandomPortSource;

impl PortSource for RandomPortSource {
    fn pick(&self, range: PortRange) -> u16 {
        rand::rng().random_range(range.min()..=range.max())
    }
}

/// Deterministic port source for testing
#[cfg(any(test, feature = "test-support"))]
#[derive(Clone)]
pub struct FixedPortSource(pub u16);

#[cfg(any(test, feature = "test-support"))]
impl PortSource for FixedPortSource {
    fn pick(&self, range: PortRange) -> u16 {
        // Fixture ports never escape the configured range.
        self.0.clamp(range.min(), range.max())
    }
}

#[cfg(test)]
#[path = "port_tests.rs"]
mod tests;
