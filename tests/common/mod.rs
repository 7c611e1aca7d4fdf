//! Shared testing utilities for asset-launch CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

pub const LAUNCHABLE_SELECTION: &str = r#"repository: my_repo@my_location
assets:
  - op_name: a
    job_name: J
  - op_name: b
    job_name: J
"#;

pub const MIXED_JOB_SELECTION: &str = r#"repository: my_repo@my_location
assets:
  - op_name: a
    job_name: J
  - op_name: b
    job_name: K
"#;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Write a file relative to the working directory and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let child = self.root.child(name);
        child.write_str(content).expect("Failed to write test file");
        child.path().to_path_buf()
    }

    /// Write a selection manifest named `selection.yml`.
    pub fn selection(&self, content: &str) -> PathBuf {
        self.write("selection.yml", content)
    }

    /// Write `asset-launch.toml` pointing at `url`.
    pub fn config_for(&self, url: &str) -> PathBuf {
        let content = format!("[graphql]\nurl = \"{}\"\ntimeout_secs = 2\n", url);
        self.write("asset-launch.toml", &content)
    }

    /// Build a command for invoking the compiled binary within the working directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("asset-launch").expect("Failed to locate asset-launch binary");
        cmd.current_dir(self.work_dir())
            .env_remove("ASSET_LAUNCH_GRAPHQL_URL")
            .env_remove("RUST_LOG");
        cmd
    }
}
