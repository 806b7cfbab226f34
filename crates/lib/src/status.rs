//! Read-only project status.
//!
//! Reports which manifest libraries have a local checkout and which build
//! outputs are on disk. Never runs external tools.

use serde::Serialize;

use crate::layout::ProjectLayout;
use crate::manifest::{Manifest, ManifestError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryStatus {
  pub name: String,
  pub url: String,
  pub branch: String,
  /// Whether `libraries/<name>` exists, by the same test the build uses to
  /// skip fetching. Its contents are not inspected.
  pub present: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectStatus {
  pub root: String,
  pub libraries: Vec<LibraryStatus>,
  pub include_file: bool,
  pub build_dir: bool,
  pub artifact: bool,
}

impl ProjectStatus {
  pub fn missing(&self) -> impl Iterator<Item = &LibraryStatus> {
    self.libraries.iter().filter(|lib| !lib.present)
  }
}

/// Inspect the project on disk against its manifest.
pub fn project_status(layout: &ProjectLayout) -> Result<ProjectStatus, ManifestError> {
  let manifest = Manifest::load(&layout.manifest_path())?;

  let libraries = manifest
    .iter()
    .map(|lib| LibraryStatus {
      name: lib.name.clone(),
      url: lib.url.clone(),
      branch: lib.branch.clone(),
      present: layout.library_dir(&lib.name).exists(),
    })
    .collect();

  Ok(ProjectStatus {
    root: layout.root().display().to_string(),
    libraries,
    include_file: layout.include_file().is_file(),
    build_dir: layout.build_dir().is_dir(),
    artifact: layout.published_artifact().is_file(),
  })
}
