//! The firmware build pipeline.
//!
//! A build runs five stages in order and stops at the first error:
//!
//! 1. Load the manifest
//! 2. Clone and check out every library whose directory is missing
//! 3. Regenerate `libraries/CMakeLists.txt`
//! 4. Recreate `build/` and run `cmake ..` in it
//! 5. Run `make` and copy `build/MICROBIT.hex` to the project root
//!
//! Nothing is rolled back on failure. A half-cloned library directory or an
//! emptied build directory stays as the failing step left it.

mod include;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info};

use crate::consts::{CMAKE, GIT, MAKE};
use crate::execute::{CommandRunner, RunError, ToolCommand};
use crate::layout::ProjectLayout;
use crate::manifest::{Manifest, ManifestError};

pub use include::render_include;

/// Errors that abort a build.
#[derive(Debug, Error)]
pub enum BuildError {
  #[error(transparent)]
  Manifest(#[from] ManifestError),

  #[error(transparent)]
  Command(#[from] RunError),

  #[error("failed to {action} {}", path.display())]
  Io {
    action: &'static str,
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to copy artifact {} to {}", from.display(), to.display())]
  CopyArtifact {
    from: PathBuf,
    to: PathBuf,
    #[source]
    source: io::Error,
  },
}

impl BuildError {
  fn io(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
    let path = path.into();
    move |source| BuildError::Io { action, path, source }
  }
}

/// Outcome of the fetch stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchSummary {
  /// Libraries cloned during this run.
  pub cloned: Vec<String>,
  /// Libraries whose directory already existed.
  pub present: Vec<String>,
}

/// The artifact copied to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedArtifact {
  pub path: PathBuf,
  pub bytes: u64,
}

/// Summary of a successful build.
#[derive(Debug, Clone)]
pub struct BuildReport {
  pub fetch: FetchSummary,
  pub include_file: PathBuf,
  pub artifact: PublishedArtifact,
  pub elapsed: Duration,
}

/// Drives the build pipeline for one project.
pub struct Orchestrator<R> {
  layout: ProjectLayout,
  runner: R,
}

impl<R: CommandRunner> Orchestrator<R> {
  pub fn new(layout: ProjectLayout, runner: R) -> Self {
    Self { layout, runner }
  }

  /// Run all five stages.
  pub fn run(&self) -> Result<BuildReport, BuildError> {
    let start = Instant::now();

    let manifest = self.load_manifest()?;
    let fetch = self.materialize(&manifest)?;
    let include_file = self.write_include_file(&manifest)?;
    self.configure()?;
    let artifact = self.build_and_publish()?;

    Ok(BuildReport {
      fetch,
      include_file,
      artifact,
      elapsed: start.elapsed(),
    })
  }

  pub fn load_manifest(&self) -> Result<Manifest, BuildError> {
    Ok(Manifest::load(&self.layout.manifest_path())?)
  }

  /// Clone and check out each library whose directory does not exist yet.
  ///
  /// An existing directory is trusted as-is, whatever it contains.
  pub fn materialize(&self, manifest: &Manifest) -> Result<FetchSummary, BuildError> {
    let libraries_dir = self.layout.libraries_dir();
    fs::create_dir_all(&libraries_dir).map_err(BuildError::io("create directory", &libraries_dir))?;

    let mut summary = FetchSummary::default();
    for lib in manifest {
      let lib_dir = self.layout.library_dir(&lib.name);
      if lib_dir.exists() {
        debug!(name = %lib.name, path = %lib_dir.display(), "library present, skipping fetch");
        summary.present.push(lib.name.clone());
        continue;
      }

      info!(name = %lib.name, url = %lib.url, branch = %lib.branch, "fetching library");
      let clone = ToolCommand::new(GIT)
        .arg("clone")
        .arg(&lib.url)
        .arg(self.layout.library_rel(&lib.name));
      self.runner.run(&clone, self.layout.root())?;

      let checkout = ToolCommand::new(GIT).arg("checkout").arg(&lib.branch);
      self.runner.run(&checkout, &lib_dir)?;

      summary.cloned.push(lib.name.clone());
    }

    Ok(summary)
  }

  /// Overwrite the inclusion file from the manifest.
  pub fn write_include_file(&self, manifest: &Manifest) -> Result<PathBuf, BuildError> {
    let path = self.layout.include_file();
    fs::write(&path, render_include(manifest)).map_err(BuildError::io("write", &path))?;
    debug!(path = %path.display(), entries = manifest.len(), "wrote inclusion file");
    Ok(path)
  }

  /// Recreate an empty build directory and run the generator in it.
  pub fn configure(&self) -> Result<(), BuildError> {
    let build_dir = self.layout.build_dir();
    if build_dir.exists() {
      debug!(path = %build_dir.display(), "removing build directory");
      fs::remove_dir_all(&build_dir).map_err(BuildError::io("remove directory", &build_dir))?;
    }
    fs::create_dir_all(&build_dir).map_err(BuildError::io("create directory", &build_dir))?;

    info!("configuring");
    self.runner.run(&ToolCommand::new(CMAKE).arg(".."), &build_dir)?;
    Ok(())
  }

  /// Run the build backend and copy the artifact to the project root.
  pub fn build_and_publish(&self) -> Result<PublishedArtifact, BuildError> {
    info!("building");
    self.runner.run(&ToolCommand::new(MAKE), &self.layout.build_dir())?;

    let built = self.layout.built_artifact();
    let published = self.layout.published_artifact();
    let bytes = fs::copy(&built, &published).map_err(|source| BuildError::CopyArtifact {
      from: built.clone(),
      to: published.clone(),
      source,
    })?;
    info!(path = %published.display(), bytes, "published artifact");

    Ok(PublishedArtifact { path: published, bytes })
  }
}
