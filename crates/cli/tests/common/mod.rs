//! Shared test utilities for dotbind CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory pointed at a temporary dotenv file.
//!
//! Invariants / Assumptions:
//! - `DOTBIND_FILE` and `RUST_LOG` from the host never leak into tests.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// A temporary directory holding one dotenv file.
pub struct EnvFixture {
    pub dir: TempDir,
}

impl EnvFixture {
    pub fn new(contents: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env"), contents).unwrap();
        Self { dir }
    }

    /// Returns a hermetic `dotbind` command running inside the fixture directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dotbind");
        cmd.current_dir(self.dir.path())
            .env_remove("DOTBIND_FILE")
            .env_remove("RUST_LOG");
        cmd
    }
}
