// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch script rendering.
//!
//! The script header is the set of `#$` directive lines the grid engine
//! reads before the body executes: working directory, environment export,
//! queue, parallel-environment slots, job name, and output log. The body
//! re-invokes the launcher binary, which does the port/host/environment work
//! on the compute node.

use std::path::Path;

use nbg_core::JobSpec;

/// Render a complete batch script for `qsub`.
///
/// `launch_cmd` is the command the compute node runs (normally
/// `<path-to-nbg> launch`, built by the caller from `current_exe`).
pub fn render_script(job: &JobSpec, log_dir: &Path, launch_cmd: &str) -> String {
    let mut lines = vec!["#!/bin/bash".to_string()];

    if job.inherit_cwd {
        lines.push("#$ -cwd".to_string());
    }
    if job.export_env {
        lines.push("#$ -V".to_string());
    }
    lines.push(format!("#$ -q {}", job.queue));
    lines.push(format!("#$ -pe shmem {}", job.slots));
    lines.push(format!("#$ -N {}", job.name));
    lines.push(format!("#$ -o {}", job.log_path(log_dir).display()));
    lines.push(String::new());
    lines.push(format!("exec {}", launch_cmd));

    let mut script = lines.join("\n");
    script.push('\n');
    script
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
