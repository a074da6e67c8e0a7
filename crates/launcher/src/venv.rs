// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Virtual environment resolution.
//!
//! The environment path template comes from config and is interpolated with
//! the submitting user's name (the original cluster script builds it from
//! `$USER`). The activation script is checked for existence before anything
//! else runs, so a missing or mistyped environment fails the launch up front
//! instead of surfacing as a shell error inside the job.

use std::path::{Path, PathBuf};

use nbg_core::config::interpolate_user;

use crate::error::LaunchError;

/// The submitting user's name, from the process environment.
pub fn resolve_user() -> Result<String, LaunchError> {
    match std::env::var("USER") {
        Ok(user) if !user.trim().is_empty() => Ok(user),
        _ => Err(LaunchError::MissingUser),
    }
}

/// The environment root for `user`, from the config template.
pub fn resolve_env_path(template: &str, user: &str) -> PathBuf {
    PathBuf::from(interpolate_user(template, user))
}

/// Path of the activation script inside an environment root.
pub fn activate_script(env_path: &Path) -> PathBuf {
    env_path.join("bin").join("activate")
}

/// Verify the activation script exists, returning its path.
pub fn check_env(env_path: &Path) -> Result<PathBuf, LaunchError> {
    let activate = activate_script(env_path);
    if activate.is_file() {
        Ok(activate)
    } else {
        tracing::warn!(path = %activate.display(), "activation script missing");
        Err(LaunchError::EnvMissing { path: activate })
    }
}

#[cfg(test)]
#[path = "venv_tests.rs"]
mod tests;
