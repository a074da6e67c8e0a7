// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nbg-launcher: session launch and batch submission
//!
//! The launch half runs on the compute node: pick a port, resolve the host,
//! verify the virtual environment, and run the notebook server in the
//! foreground. The submit half runs on the submit host: render a batch script
//! whose header carries the grid-engine directives and hand it to `qsub`.

mod command;
mod error;
pub mod host;
pub mod launch;
pub mod script;
pub mod submit;
pub mod venv;

pub use command::build_server_command;
pub use error::{LaunchError, SubmitError};
pub use host::HostInfo;
pub use launch::{prepare, prepare_with_host, run, PreparedLaunch};
pub use script::render_script;
pub use submit::submit_script;
