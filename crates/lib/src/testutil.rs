//! Test utilities for fwbuild-lib.
//!
//! Provides a fake [`CommandRunner`] that records invocations and imitates
//! just enough of git, cmake and make for the pipeline to complete.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{ARTIFACT_NAME, GIT, MAKE};
use crate::execute::{CommandOutput, CommandRunner, RunError, ToolCommand};

/// Returns a command running `script` through `/bin/sh`.
#[cfg(unix)]
pub fn sh(script: &str) -> ToolCommand {
  ToolCommand::new("/bin/sh").arg("-c").arg(script)
}

/// A recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
  pub command: String,
  pub cwd: PathBuf,
  /// Names of the entries in `cwd` at the time of the call, sorted.
  pub cwd_entries: Vec<String>,
}

/// Fake runner.
///
/// - `git clone <url> <dir>` creates `<dir>` relative to the working directory
/// - `make` writes the artifact into the working directory
/// - any command whose display form starts with the `fail_on` prefix exits 1
#[derive(Debug, Default)]
pub struct FakeRunner {
  calls: RefCell<Vec<Call>>,
  fail_on: Option<String>,
  artifact: Vec<u8>,
  skip_artifact: bool,
}

impl FakeRunner {
  pub fn new() -> Self {
    Self {
      artifact: b":020000040000FA\n:00000001FF\n".to_vec(),
      ..Default::default()
    }
  }

  pub fn failing_on(prefix: &str) -> Self {
    Self {
      fail_on: Some(prefix.to_string()),
      ..Self::new()
    }
  }

  /// `make` succeeds without producing an artifact.
  pub fn without_artifact() -> Self {
    Self {
      skip_artifact: true,
      ..Self::new()
    }
  }

  pub fn artifact(&self) -> &[u8] {
    &self.artifact
  }

  pub fn calls(&self) -> Vec<Call> {
    self.calls.borrow().clone()
  }

  pub fn commands(&self) -> Vec<String> {
    self.calls.borrow().iter().map(|c| c.command.clone()).collect()
  }
}

impl CommandRunner for FakeRunner {
  fn run(&self, command: &ToolCommand, cwd: &Path) -> Result<CommandOutput, RunError> {
    let display = command.to_string();
    self.calls.borrow_mut().push(Call {
      command: display.clone(),
      cwd: cwd.to_path_buf(),
      cwd_entries: list_dir(cwd),
    });

    if self.fail_on.as_deref().is_some_and(|prefix| display.starts_with(prefix)) {
      return Err(RunError::Failed {
        command: display.clone(),
        code: Some(1),
        stderr: format!("fatal: {} failed\n", display),
      });
    }

    let args: Vec<&str> = command.args.iter().map(String::as_str).collect();
    match (command.program.as_str(), args.as_slice()) {
      (GIT, ["clone", _url, dir]) => {
        fs::create_dir_all(cwd.join(dir)).expect("fake clone");
      }
      (MAKE, []) if !self.skip_artifact => {
        fs::write(cwd.join(ARTIFACT_NAME), &self.artifact).expect("fake make");
      }
      _ => {}
    }

    Ok(CommandOutput::default())
  }
}

fn list_dir(path: &Path) -> Vec<String> {
  let mut entries: Vec<String> = fs::read_dir(path)
    .map(|rd| {
      rd.filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect()
    })
    .unwrap_or_default();
  entries.sort();
  entries
}
