// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type carrying an explicit process exit code.
//!
//! Used to pass the launched server's exit status through to the shell
//! without printing any extra diagnostics.

/// An error whose only payload is the exit code to return.
#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
}

impl ExitError {
    pub fn new(code: i32) -> Self {
        Self { code }
    }
}

impl std::fmt::Display for ExitError {
    fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Empty on purpose: the server already wrote its own diagnostics.
        Ok(())
    }
}

impl std::error::Error for ExitError {}
