use std::fmt;
use std::path::Path;

use thiserror::Error;

/// An external tool invocation: a program and its arguments.
///
/// Arguments are passed to the program directly, never through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
  pub program: String,
  pub args: Vec<String>,
}

impl ToolCommand {
  pub fn new(program: &str) -> Self {
    Self {
      program: program.to_string(),
      args: Vec::new(),
    }
  }

  pub fn arg(mut self, arg: impl Into<String>) -> Self {
    self.args.push(arg.into());
    self
  }
}

impl fmt::Display for ToolCommand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.program)?;
    for arg in &self.args {
      write!(f, " {}", arg)?;
    }
    Ok(())
  }
}

/// Captured output of a successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
  pub stdout: String,
  pub stderr: String,
}

/// Errors from running an external command.
#[derive(Debug, Error)]
pub enum RunError {
  /// The process could not be started (e.g. the program is not on PATH).
  #[error("failed to run '{command}'")]
  Spawn {
    command: String,
    #[source]
    source: std::io::Error,
  },

  /// The process ran and exited unsuccessfully.
  #[error("command {}: {command}", describe_exit(*code))]
  Failed {
    command: String,
    code: Option<i32>,
    stderr: String,
  },
}

impl RunError {
  /// Captured standard error of a failed command, if any.
  pub fn stderr(&self) -> Option<&str> {
    match self {
      RunError::Failed { stderr, .. } if !stderr.is_empty() => Some(stderr),
      _ => None,
    }
  }
}

fn describe_exit(code: Option<i32>) -> String {
  match code {
    Some(code) => format!("failed with exit code {}", code),
    None => "was terminated by a signal".to_string(),
  }
}

/// Runs external commands on behalf of the build.
///
/// Each call blocks until the child exits. `cwd` is the working directory of
/// the child only.
pub trait CommandRunner {
  fn run(&self, command: &ToolCommand, cwd: &Path) -> Result<CommandOutput, RunError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
  fn run(&self, command: &ToolCommand, cwd: &Path) -> Result<CommandOutput, RunError> {
    (**self).run(command, cwd)
  }
}
