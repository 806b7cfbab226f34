//! Status command implementation.
//!
//! Shows which libraries are checked out and which build outputs exist.

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};

use fwbuild_lib::layout::ProjectLayout;
use fwbuild_lib::status::project_status;

use crate::output::{OutputFormat, print_info, print_json, print_stat, print_warning, symbols};

pub fn cmd_status(layout: &ProjectLayout, format: OutputFormat) -> Result<()> {
  let status = project_status(layout).context("Failed to load manifest")?;

  if format.is_json() {
    return print_json(&status);
  }

  print_info(&format!("Project: {}", status.root));
  println!();
  println!("Libraries:");
  for lib in &status.libraries {
    let symbol = if lib.present {
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()).to_string()
    } else {
      symbols::ERROR.if_supports_color(Stream::Stdout, |s| s.red()).to_string()
    };
    println!(
      "  {} {} {} {} {}",
      symbol,
      lib.name,
      format!("({})", lib.branch).if_supports_color(Stream::Stdout, |s| s.dimmed()),
      symbols::ARROW,
      lib.url
    );
  }
  if status.libraries.is_empty() {
    println!("  (none)");
  }

  println!();
  print_stat("Inclusion file", yes_no(status.include_file));
  print_stat("Build directory", yes_no(status.build_dir));
  print_stat("Artifact", yes_no(status.artifact));

  let missing = status.missing().count();
  if missing > 0 {
    println!();
    print_warning(&format!("{} library(s) not fetched yet. Run 'fwbuild build' to fetch them.", missing));
  }

  Ok(())
}

fn yes_no(present: bool) -> &'static str {
  if present { "present" } else { "missing" }
}
