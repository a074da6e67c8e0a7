// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI subcommand implementations

pub mod launch;
pub mod script;
pub mod submit;

use std::path::{Path, PathBuf};

use anyhow::Result;
use nbg_core::Config;

/// Load config from an explicit path, or `nbg.toml` in the working directory.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(p) => Config::load(p)?,
        None => {
            let cwd = std::env::current_dir()?;
            Config::load_or_default(&cwd)?
        }
    };
    Ok(config)
}

/// The `nbg launch` invocation a batch script body should run, built from
/// the currently-running binary so the compute node uses the same build.
pub fn self_launch_command(config_path: Option<&Path>) -> Result<String> {
    let exe: PathBuf = std::env::current_exe()?;
    let mut cmd = format!("{} launch", exe.display());
    if let Some(p) = config_path {
        cmd.push_str(&format!(" --config {}", p.display()));
    }
    Ok(cmd)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
