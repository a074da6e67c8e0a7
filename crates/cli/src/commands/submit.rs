// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nbg submit` - send a notebook session job to the scheduler

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use nbg_launcher as launcher;

#[derive(Args)]
pub struct SubmitArgs {
    /// Config file (default: ./nbg.toml if present)
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Directory for the job's output log (default: current directory)
    #[arg(long = "log-dir", default_value = ".")]
    pub log_dir: PathBuf,
}

pub async fn handle(args: SubmitArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let job = config.job_spec();

    let launch_cmd = super::self_launch_command(args.config.as_deref())?;
    let script = launcher::render_script(&job, &args.log_dir, &launch_cmd);

    let reply = launcher::submit_script(&script).await?;
    println!("{}", reply);
    println!("session URL will appear in {}", job.log_path(&args.log_dir).display());
    Ok(())
}
