// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch submission via `qsub`.
//!
//! The rendered script is written to a temp file and handed to `qsub`; the
//! scheduler's acknowledgement line (normally `Your job <id> ...`) is
//! returned to the caller. Submission runs under a timeout so a wedged
//! scheduler frontend cannot hang the CLI; the child is killed when the
//! timeout elapses (tokio `Child` drop).

use std::io::Write;
use std::process::Output;
use std::time::Duration;

use tempfile::NamedTempFile;
use tokio::process::Command;

use crate::error::SubmitError;

/// Timeout for the `qsub` invocation.
pub const QSUB_TIMEOUT: Duration = Duration::from_secs(30);

/// Submit a rendered batch script, returning the scheduler's reply line.
pub async fn submit_script(script: &str) -> Result<String, SubmitError> {
    let file = write_script(script)?;

    let mut cmd = Command::new("qsub");
    cmd.arg(file.path());
    tracing::info!(script = %file.path().display(), "submitting batch job");

    let output = qsub_with_timeout(cmd, QSUB_TIMEOUT).await?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SubmitError::Qsub {
            message: format!(
                "exit {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            ),
        });
    }

    let reply = String::from_utf8_lossy(&output.stdout).trim().to_string();
    tracing::info!(reply = %reply, "job submitted");
    Ok(reply)
}

fn write_script(script: &str) -> Result<NamedTempFile, SubmitError> {
    let mut file = NamedTempFile::with_prefix("nbg-").map_err(SubmitError::Script)?;
    file.write_all(script.as_bytes()).map_err(SubmitError::Script)?;
    file.flush().map_err(SubmitError::Script)?;
    Ok(file)
}

/// Run `qsub` with a timeout, mapping both spawn failures and expiry into
/// `SubmitError::Qsub`.
async fn qsub_with_timeout(mut cmd: Command, timeout: Duration) -> Result<Output, SubmitError> {
    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(io_err)) => Err(SubmitError::Qsub {
            message: io_err.to_string(),
        }),
        Err(_elapsed) => Err(SubmitError::Qsub {
            message: format!("timed out after {}s", timeout.as_secs()),
        }),
    }
}

#[cfg(test)]
#[path = "submit_tests.rs"]
mod tests;
