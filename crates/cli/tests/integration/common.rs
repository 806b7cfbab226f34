//! Shared test helpers for CLI integration tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

pub const TWO_LIBS: &str = r#"{
  "libraries": [
    { "name": "a", "url": "u1", "branch": "main" },
    { "name": "b", "url": "u2", "branch": "dev" }
  ]
}"#;

/// Content the fake `make` writes as the firmware image.
pub const FAKE_IMAGE: &str = ":020000040000FA\n:00000001FF\n";

/// Every fake tool logs its invocation and fails when `FAIL_TOOL` names it.
const PREAMBLE: &str = r#"#!/bin/sh
tool=$(basename "$0")
if [ $# -eq 0 ]; then
  echo "$tool" >> "$TOOL_LOG"
else
  echo "$tool $*" >> "$TOOL_LOG"
fi
if [ "$FAIL_TOOL" = "$tool" ]; then
  echo "$tool: simulated failure" >&2
  exit 2
fi
"#;

const FAKE_GIT: &str = r#"if [ "$1" = "clone" ]; then mkdir -p "$3"; fi
"#;

const FAKE_CMAKE: &str = r#"if [ -n "$(ls -A)" ]; then
  echo "cmake: build directory not empty" >&2
  exit 1
fi
touch Makefile
"#;

const FAKE_MAKE: &str = r#"printf ':020000040000FA\n:00000001FF\n' > MICROBIT.hex
"#;

/// Isolated firmware project with fake `git`, `cmake` and `make` on PATH.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn with_manifest(manifest: &str) -> Self {
    let env = Self {
      temp: TempDir::new().unwrap(),
    };
    fs::create_dir_all(env.root()).unwrap();
    env.write_file("target-locked.json", manifest);

    let bin = env.bin_dir();
    fs::create_dir_all(&bin).unwrap();
    write_script(&bin.join("git"), FAKE_GIT);
    write_script(&bin.join("cmake"), FAKE_CMAKE);
    write_script(&bin.join("make"), FAKE_MAKE);
    env
  }

  /// Project root.
  pub fn root(&self) -> PathBuf {
    self.temp.path().join("project")
  }

  /// Directory holding the fake tools.
  pub fn bin_dir(&self) -> PathBuf {
    self.temp.path().join("bin")
  }

  fn log_path(&self) -> PathBuf {
    self.temp.path().join("tools.log")
  }

  /// Write a file relative to the project root.
  pub fn write_file(&self, relative_path: &str, content: &str) {
    let path = self.root().join(relative_path);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
  }

  pub fn read_file(&self, relative_path: &str) -> String {
    fs::read_to_string(self.root().join(relative_path)).unwrap()
  }

  /// Tool invocations in order, as `<tool> <args...>`.
  pub fn tool_log(&self) -> Vec<String> {
    fs::read_to_string(self.log_path())
      .unwrap_or_default()
      .lines()
      .map(str::to_string)
      .collect()
  }

  /// Get a Command for the fwbuild binary, run from the project root with the
  /// fake tools first on PATH.
  pub fn fwbuild_cmd(&self) -> Command {
    let mut paths = vec![self.bin_dir()];
    if let Some(path) = std::env::var_os("PATH") {
      paths.extend(std::env::split_paths(&path));
    }

    let mut cmd: Command = cargo_bin_cmd!("fwbuild");
    cmd.current_dir(self.root());
    cmd.env("PATH", std::env::join_paths(paths).unwrap());
    cmd.env("TOOL_LOG", self.log_path());
    cmd.env_remove("FAIL_TOOL");
    cmd
  }
}

fn write_script(path: &Path, body: &str) {
  fs::write(path, format!("{}{}", PREAMBLE, body)).unwrap();
  fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}
