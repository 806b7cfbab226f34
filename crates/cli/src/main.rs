mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fwbuild_lib::build::BuildError;
use fwbuild_lib::layout::ProjectLayout;

use cmd::{cmd_build, cmd_status};
use output::{OutputFormat, print_error};

/// fwbuild - fetch pinned libraries and build the firmware image
#[derive(Parser)]
#[command(name = "fwbuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Project root containing target-locked.json
  #[arg(short = 'C', long, global = true, default_value = ".")]
  project_dir: PathBuf,

  /// Enable debug logging (overridden by RUST_LOG)
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Fetch libraries, configure and build, then publish the image (default)
  Build,

  /// Show which libraries are fetched and which build outputs exist
  Status {
    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      report_error(&err);
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> Result<()> {
  let layout = ProjectLayout::discover(&cli.project_dir)
    .with_context(|| format!("Project directory not found: {}", cli.project_dir.display()))?;

  match cli.command.unwrap_or(Commands::Build) {
    Commands::Build => cmd_build(layout),
    Commands::Status { output } => cmd_status(&layout, output),
  }
}

/// Print the error chain, followed by the captured stderr of a failed tool.
fn report_error(err: &anyhow::Error) {
  print_error(&format!("{:#}", err));

  let stderr = match err.downcast_ref::<BuildError>() {
    Some(BuildError::Command(run)) => run.stderr(),
    _ => None,
  };
  if let Some(stderr) = stderr {
    eprintln!("{}", stderr.trim_end());
  }
}
