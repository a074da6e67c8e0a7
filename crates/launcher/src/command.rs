// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Server command construction.
//!
//! The whole launch is one shell command: source the activation script, then
//! exec the server with browser auto-open suppressed and the chosen port and
//! bind address. The `&&` keeps the ordering invariant: the server never
//! starts if activation fails.

use std::path::Path;

use nbg_core::SessionDescriptor;

/// Escape characters that have special meaning in shell double-quoted strings.
///
/// Paths are embedded in a command run via `bash -c`, so backticks, dollar
/// signs, backslashes, and double quotes must be treated literally.
fn escape_for_shell_double_quotes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '`' => result.push_str("\\`"),
            '$' => result.push_str("\\$"),
            '"' => result.push_str("\\\""),
            _ => result.push(c),
        }
    }
    result
}

/// Build the shell command that activates the environment and runs the server.
///
/// `server` is the invocation prefix from config (default `jupyter notebook`);
/// the port, bind address, and `--no-browser` are appended from the
/// descriptor.
pub fn build_server_command(
    server: &str,
    activate: &Path,
    descriptor: &SessionDescriptor,
) -> String {
    format!(
        "source \"{}\" && exec {} --no-browser --port {} --ip {}",
        escape_for_shell_double_quotes(&activate.display().to_string()),
        server,
        descriptor.port,
        descriptor.address,
    )
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
