//! Project directory layout.
//!
//! All paths the build reads or writes hang off a single project root. Stages
//! receive their working directory from here instead of changing the process
//! current directory.

use std::io;
use std::path::{Path, PathBuf};

use crate::consts::{ARTIFACT_NAME, BUILD_DIR, INCLUDE_FILENAME, LIBRARIES_DIR, MANIFEST_FILENAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
  root: PathBuf,
}

impl ProjectLayout {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  /// Resolve `root` to an absolute path without Windows UNC prefixes.
  pub fn discover(root: &Path) -> io::Result<Self> {
    Ok(Self::new(dunce::canonicalize(root)?))
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn manifest_path(&self) -> PathBuf {
    self.root.join(MANIFEST_FILENAME)
  }

  pub fn libraries_dir(&self) -> PathBuf {
    self.root.join(LIBRARIES_DIR)
  }

  /// Checkout directory of a library, as an absolute path.
  pub fn library_dir(&self, name: &str) -> PathBuf {
    self.libraries_dir().join(name)
  }

  /// Checkout directory of a library relative to the root, as passed to
  /// `git clone`.
  pub fn library_rel(&self, name: &str) -> String {
    format!("{}/{}", LIBRARIES_DIR, name)
  }

  pub fn include_file(&self) -> PathBuf {
    self.libraries_dir().join(INCLUDE_FILENAME)
  }

  pub fn build_dir(&self) -> PathBuf {
    self.root.join(BUILD_DIR)
  }

  /// Artifact as produced by the toolchain.
  pub fn built_artifact(&self) -> PathBuf {
    self.build_dir().join(ARTIFACT_NAME)
  }

  /// Artifact after publishing to the root.
  pub fn published_artifact(&self) -> PathBuf {
    self.root.join(ARTIFACT_NAME)
  }
}
