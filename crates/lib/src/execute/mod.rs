//! External command execution.
//!
//! The build never shells out directly; every tool invocation goes through a
//! [`CommandRunner`], so the pipeline can run against a fake in tests.

mod process;
mod types;

pub use process::ProcessRunner;
pub use types::{CommandOutput, CommandRunner, RunError, ToolCommand};
