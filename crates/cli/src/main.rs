// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! nbg - Notebook Grid CLI

mod commands;
mod exit_error;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{launch, script, submit};

#[derive(Parser)]
#[command(
    name = "nbg",
    version,
    about = "Notebook Grid - launch Jupyter sessions on a batch cluster"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the notebook server on this host (runs inside the batch job)
    Launch(launch::LaunchArgs),
    /// Submit a notebook session job to the scheduler
    Submit(submit::SubmitArgs),
    /// Print the batch script that submit would send to qsub
    Script(script::ScriptArgs),
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(e) = run().await {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Stderr logging, filtered by `NBG_LOG` (off by default).
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("NBG_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output (common when
/// thiserror variants use `#[error("... {0}")]` with `#[from]`).
/// Otherwise we render the full chain so context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Launch(args) => launch::handle(args).await,
        Commands::Submit(args) => submit::handle(args).await,
        Commands::Script(args) => script::handle(args),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
