//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for invoking the nbg binary and asserting on its
//! stdout, stderr, and exit code.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

/// A pending `nbg` invocation with a deterministic environment.
pub fn nbg() -> Nbg {
    let mut cmd = assert_cmd::Command::cargo_bin("nbg").unwrap();
    cmd.env("USER", "specuser");
    cmd.env_remove("NBG_LOG");
    Nbg { cmd }
}

pub struct Nbg {
    cmd: assert_cmd::Command,
}

impl Nbg {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn env_remove(mut self, key: &str) -> Self {
        self.cmd.env_remove(key);
        self
    }

    pub fn cwd(mut self, dir: &Path) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    pub fn run(mut self) -> Spec {
        Spec {
            output: self.cmd.output().unwrap(),
        }
    }

    pub fn passes(self) -> Spec {
        self.run().passes()
    }

    pub fn fails(self) -> Spec {
        self.run().fails()
    }
}

/// Completed invocation with chainable assertions.
pub struct Spec {
    output: Output,
}

impl Spec {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }

    pub fn code(&self) -> i32 {
        self.output.status.code().unwrap_or(-1)
    }

    pub fn passes(self) -> Self {
        assert!(
            self.output.status.success(),
            "expected success, got {}\nstdout: {}\nstderr: {}",
            self.code(),
            self.stdout(),
            self.stderr()
        );
        self
    }

    pub fn fails(self) -> Self {
        assert!(
            !self.output.status.success(),
            "expected failure, got success\nstdout: {}",
            self.stdout()
        );
        self
    }

    pub fn exits_with(self, code: i32) -> Self {
        assert_eq!(
            self.code(),
            code,
            "stdout: {}\nstderr: {}",
            self.stdout(),
            self.stderr()
        );
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout().contains(needle),
            "stdout missing {needle:?}\nstdout: {}",
            self.stdout()
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout().contains(needle),
            "stdout unexpectedly contains {needle:?}\nstdout: {}",
            self.stdout()
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr().contains(needle),
            "stderr missing {needle:?}\nstderr: {}",
            self.stderr()
        );
        self
    }
}

/// A scratch project: temp dir holding an `nbg.toml` and a provisioned
/// fake virtual environment.
pub struct Project {
    pub dir: tempfile::TempDir,
    pub env_path: PathBuf,
}

impl Project {
    /// Create the project with a venv and write a config. The config gets
    /// `env` and a loopback `ip` override prepended so specs never depend
    /// on DNS or a real cluster environment.
    pub fn new(extra_config: &str) -> Self {
        let dir = tempfile::TempDir::new().unwrap();
        let env_path = dir.path().join("jupyter-env");
        std::fs::create_dir_all(env_path.join("bin")).unwrap();
        std::fs::write(env_path.join("bin").join("activate"), "# activate\n").unwrap();

        let mut config = String::from("[session]\n");
        config.push_str(&format!("env = \"{}\"\n", env_path.display()));
        config.push_str("ip = \"127.0.0.1\"\n");
        config.push_str(extra_config);
        std::fs::write(dir.path().join("nbg.toml"), config).unwrap();

        Self { dir, env_path }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("nbg.toml")
    }

    /// Remove the venv so activation resolution fails.
    pub fn break_env(&self) {
        std::fs::remove_dir_all(&self.env_path).unwrap();
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
