// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing (`nbg.toml`).
//!
//! The config file is optional; every field has a default equal to the
//! original cluster script's constants, so a bare `nbg launch` works without
//! any file present. Layout:
//!
//! ```toml
//! [session]
//! port_min = 10000
//! port_max = 11999
//! env = "/well/${user}/python/jupyter-env"
//! server = "jupyter notebook"
//!
//! [job]
//! name = "jupyter"
//! queue = "short.qc"
//! slots = 2
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::job::JobSpec;
use crate::port::{PortRange, DEFAULT_PORT_MAX, DEFAULT_PORT_MIN};

/// Default file name searched in the working directory.
pub const CONFIG_FILE_NAME: &str = "nbg.toml";

/// Default activation-path template, interpolated with the submitting user.
pub const DEFAULT_ENV_TEMPLATE: &str = "/well/${user}/python/jupyter-env";

/// Default server invocation prefix.
pub const DEFAULT_SERVER: &str = "jupyter notebook";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config for {location}: {message}")]
    InvalidFormat { location: String, message: String },
}

fn invalid(location: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidFormat {
        location: location.to_string(),
        message: message.into(),
    }
}

/// `[session]` table: port range, environment template, server invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionSection {
    #[serde(default = "default_port_min")]
    pub port_min: u16,
    #[serde(default = "default_port_max")]
    pub port_max: u16,
    /// Path template of the virtual environment root. `${user}` is replaced
    /// with the submitting user's name at launch time.
    #[serde(default = "default_env_template")]
    pub env: String,
    /// Optional bind-address override. When unset the host's primary address
    /// is resolved and used.
    #[serde(default)]
    pub ip: Option<String>,
    /// Server invocation prefix; flags for port, address, and browser
    /// suppression are appended by the launcher.
    #[serde(default = "default_server")]
    pub server: String,
}

fn default_port_min() -> u16 {
    DEFAULT_PORT_MIN
}

fn default_port_max() -> u16 {
    DEFAULT_PORT_MAX
}

fn default_env_template() -> String {
    DEFAULT_ENV_TEMPLATE.to_string()
}

fn default_server() -> String {
    DEFAULT_SERVER.to_string()
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            port_min: DEFAULT_PORT_MIN,
            port_max: DEFAULT_PORT_MAX,
            env: default_env_template(),
            ip: None,
            server: default_server(),
        }
    }
}

/// `[job]` table: scheduler directives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct JobSection {
    pub name: Option<String>,
    pub queue: Option<String>,
    pub slots: Option<u32>,
    pub inherit_cwd: Option<bool>,
    pub export_env: Option<bool>,
}

/// A parsed config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    pub session: SessionSection,
    pub job: JobSection,
}

impl Config {
    /// Parse and validate config from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from an explicit path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Load `nbg.toml` from `dir` if present, defaults otherwise.
    pub fn load_or_default(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        PortRange::new(self.session.port_min, self.session.port_max)
            .map_err(|e| invalid("session.port_min/port_max", e.to_string()))?;
        if self.session.env.trim().is_empty() {
            return Err(invalid("session.env", "must not be empty"));
        }
        if self.session.server.trim().is_empty() {
            return Err(invalid("session.server", "must not be empty"));
        }
        if let Some(name) = &self.job.name {
            if name.trim().is_empty() {
                return Err(invalid("job.name", "must not be empty"));
            }
            if name.contains(char::is_whitespace) {
                return Err(invalid("job.name", "must not contain whitespace"));
            }
        }
        if let Some(queue) = &self.job.queue {
            if queue.trim().is_empty() {
                return Err(invalid("job.queue", "must not be empty"));
            }
        }
        if self.job.slots == Some(0) {
            return Err(invalid("job.slots", "must be at least 1"));
        }
        Ok(())
    }

    /// The validated port range.
    pub fn port_range(&self) -> PortRange {
        // Validated in parse(); fall back to defaults if constructed directly.
        PortRange::new(self.session.port_min, self.session.port_max)
            .unwrap_or_default()
    }

    /// Job spec with config overrides applied over the defaults.
    pub fn job_spec(&self) -> JobSpec {
        let base = JobSpec::default();
        JobSpec {
            name: self.job.name.clone().unwrap_or(base.name),
            queue: self.job.queue.clone().unwrap_or(base.queue),
            slots: self.job.slots.unwrap_or(base.slots),
            inherit_cwd: self.job.inherit_cwd.unwrap_or(base.inherit_cwd),
            export_env: self.job.export_env.unwrap_or(base.export_env),
        }
    }
}

/// Replace `${user}` in a path template with the given user name.
pub fn interpolate_user(template: &str, user: &str) -> String {
    template.replace("${user}", user)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
