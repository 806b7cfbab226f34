//! Implementation of the `fwbuild build` command.
//!
//! Fetches missing libraries, regenerates the inclusion file, reconfigures
//! from a clean build directory, builds, and publishes the firmware image.

use anyhow::{Context, Result};
use tracing::info;

use fwbuild_lib::build::Orchestrator;
use fwbuild_lib::execute::ProcessRunner;
use fwbuild_lib::layout::ProjectLayout;

use crate::output::{format_bytes, format_duration, print_stat, print_success};

/// Execute the build command.
///
/// Any failure aborts the build; the caller reports it and exits non-zero.
pub fn cmd_build(layout: ProjectLayout) -> Result<()> {
  info!(root = %layout.root().display(), "starting build");

  let orchestrator = Orchestrator::new(layout, ProcessRunner);
  let report = orchestrator.run().context("Build failed")?;

  let artifact_name = report
    .artifact
    .path
    .file_name()
    .map(|n| n.to_string_lossy().into_owned())
    .unwrap_or_default();

  print_success(&format!("Build successful! {} is in the root directory.", artifact_name));
  print_stat("Libraries cloned", &report.fetch.cloned.len().to_string());
  print_stat("Libraries present", &report.fetch.present.len().to_string());
  print_stat(
    "Artifact",
    &format!("{} ({})", report.artifact.path.display(), format_bytes(report.artifact.bytes)),
  );
  print_stat("Duration", &format_duration(report.elapsed));

  Ok(())
}
