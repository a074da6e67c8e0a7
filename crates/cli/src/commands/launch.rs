// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nbg launch` - run the notebook server on this host
//!
//! This is the command the batch script body executes on the compute node.
//! It announces the session URL on stdout (which the scheduler redirects to
//! the job's output log), then runs the server in the foreground and exits
//! with the server's own status.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use nbg_core::{PortRange, PortSource, RandomPortSource};
use nbg_launcher as launcher;

use crate::exit_error::ExitError;

#[derive(Args)]
pub struct LaunchArgs {
    /// Config file (default: ./nbg.toml if present)
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Use this exact port instead of drawing one at random
    #[arg(long = "port")]
    pub port: Option<u16>,
}

/// A source that always yields one explicitly requested port.
struct ExplicitPort(u16);

impl PortSource for ExplicitPort {
    fn pick(&self, _range: PortRange) -> u16 {
        self.0
    }
}

pub async fn handle(args: LaunchArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;

    let prepared = match args.port {
        Some(port) => {
            anyhow::ensure!(
                config.port_range().contains(port),
                "port {} is outside the configured range {}-{}",
                port,
                config.port_range().min(),
                config.port_range().max()
            );
            launcher::prepare(&config, &ExplicitPort(port))?
        }
        None => launcher::prepare(&config, &RandomPortSource)?,
    };

    println!("{}", prepared.announce_line());

    let status = launcher::run(&prepared).await?;
    if !status.success() {
        return Err(ExitError::new(status.code().unwrap_or(1)).into());
    }
    Ok(())
}

#[cfg(test)]
#[path = "launch_tests.rs"]
mod tests;
