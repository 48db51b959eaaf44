//! Test support utilities for paramsync integration tests.
//!
//! Provides an isolated temp directory, fixture writers and CLI helpers.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use assert_cmd::Command;
use std::path::PathBuf;
use std::process::Output;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Child processes run with `.current_dir()` so tests can run in parallel.
pub struct Test {
    pub dir: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Path inside the test directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a file into the test directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("failed to write fixture");
        path
    }

    /// A paramsync command rooted in the test directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_paramsync"));
        cmd.current_dir(self.dir.path())
            .env("NO_COLOR", "1")
            .env_remove("PARAMSYNC_LOG")
            .env_remove("PARAMSYNC_CONFIG");
        cmd
    }

    /// Run `paramsync resolve <manifest> --params <params>`.
    pub fn resolve(&self, manifest: &str, params: &str) -> Output {
        self.cmd()
            .args(["resolve", manifest, "--params", params])
            .output()
            .expect("failed to run paramsync")
    }
}
