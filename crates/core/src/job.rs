// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch job parameters.
//!
//! `JobSpec` holds the declarative annotations the grid engine reads before
//! the script body runs: queue, parallel-environment slot count, job name,
//! and the working-directory / environment-export flags. The launcher only
//! renders these into the script header; their semantics belong to the
//! scheduler.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Declarative submission parameters for one notebook job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    /// Job name (`-N`). Also names the output log.
    pub name: String,
    /// Scheduler queue (`-q`).
    pub queue: String,
    /// Slot count for the shared-memory parallel environment (`-pe shmem N`).
    pub slots: u32,
    /// Run in the submission directory (`-cwd`).
    pub inherit_cwd: bool,
    /// Export the submitter's environment (`-V`).
    pub export_env: bool,
}

impl JobSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Path of the output log the scheduler writes for this job (`-o`).
    pub fn log_path(&self, log_dir: &Path) -> PathBuf {
        job_log_path(log_dir, &self.name)
    }
}

impl Default for JobSpec {
    fn default() -> Self {
        Self {
            name: "jupyter".to_string(),
            queue: "short.qc".to_string(),
            slots: 2,
            inherit_cwd: true,
            export_env: true,
        }
    }
}

/// Build the path to a job's output log file.
///
/// Structure: `{log_dir}/{job_name}.log`
pub fn job_log_path(log_dir: &Path, job_name: &str) -> PathBuf {
    log_dir.join(format!("{}.log", job_name))
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
