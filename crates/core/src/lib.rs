// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nbg-core: Core library for the notebook grid (nbg) CLI tool

pub mod config;
pub mod job;
pub mod port;
pub mod session;

pub use config::{Config, ConfigError, JobSection, SessionSection};
pub use job::{job_log_path, JobSpec};
pub use port::{PortRange, PortSource, RandomPortSource};
pub use session::{SessionDescriptor, SessionState};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use port::FixedPortSource;
