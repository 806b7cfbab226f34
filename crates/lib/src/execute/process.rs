//! Child-process command runner.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use super::types::{CommandOutput, CommandRunner, RunError, ToolCommand};

/// Runs commands as child processes with captured output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
  fn run(&self, command: &ToolCommand, cwd: &Path) -> Result<CommandOutput, RunError> {
    info!(cmd = %command, "executing command");
    debug!(program = %command.program, working_dir = ?cwd, "spawning process");

    let output = Command::new(&command.program)
      .args(&command.args)
      .current_dir(cwd)
      .stdin(Stdio::null())
      .output()
      .map_err(|source| RunError::Spawn {
        command: command.to_string(),
        source,
      })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
      if !stdout.is_empty() {
        debug!(stdout = %stdout, "command stdout");
      }
      return Err(RunError::Failed {
        command: command.to_string(),
        code: output.status.code(),
        stderr,
      });
    }

    if !stdout.is_empty() {
      debug!(stdout = %stdout.trim_end(), "command output");
    }

    Ok(CommandOutput { stdout, stderr })
  }
}
