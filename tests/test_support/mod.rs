//! Shared helpers for palcheck integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory marked as a repository root so config discovery never
/// escapes into the developer's real filesystem.
pub fn isolated_dir() -> TempDir {
    let temp = TempDir::new().expect("create temp dir");
    fs::create_dir(temp.path().join(".git")).expect("create .git marker");
    temp
}

/// `palcheck` command running in `dir` with a clean environment.
pub fn palcheck_in(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("palcheck"));
    cmd.current_dir(dir)
        .env_remove("PALCHECK_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Write `.palcheck/config.toml` under `dir`.
pub fn write_config(dir: &Path, body: &str) -> PathBuf {
    let config_dir = dir.join(".palcheck");
    fs::create_dir_all(&config_dir).expect("create .palcheck");
    let path = config_dir.join("config.toml");
    fs::write(&path, body).expect("write config");
    path
}
