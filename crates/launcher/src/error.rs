// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for launch and submission

use std::path::PathBuf;

use nbg_core::ConfigError;
use thiserror::Error;

/// Errors that can occur while preparing or running a session
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("USER is not set; cannot resolve the environment path")]
    MissingUser,
    #[error("environment activation script not found: {path}")]
    EnvMissing { path: PathBuf },
    #[error("failed to determine local host name: {0}")]
    HostName(String),
    #[error("host does not resolve to a routable address: {host}")]
    HostResolve { host: String },
    #[error("invalid bind address override: {value}")]
    InvalidAddress { value: String },
    #[error("failed to start server process: {0}")]
    Spawn(std::io::Error),
}

/// Errors that can occur while submitting a batch job
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to write batch script: {0}")]
    Script(std::io::Error),
    #[error("qsub failed: {message}")]
    Qsub { message: String },
}
