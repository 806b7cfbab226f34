//! Dependency manifest loading.
//!
//! The manifest (`target-locked.json`) pins every library the firmware links
//! against:
//!
//! ```json
//! {
//!   "libraries": [
//!     { "name": "codal-core", "url": "https://github.com/lancaster-university/codal-core", "branch": "v0.2.63" }
//!   ]
//! }
//! ```
//!
//! Fields other than `libraries`, `name`, `url` and `branch` are ignored.

mod types;

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub use types::*;

/// Errors that can occur while loading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
  /// Failed to read the manifest file.
  #[error("failed to read manifest {}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Failed to parse the manifest JSON.
  #[error("failed to parse manifest {}", path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  /// Two libraries share a name and would share a directory.
  #[error("duplicate library name '{0}'")]
  DuplicateName(String),

  /// The name cannot be used as a single directory name.
  #[error("invalid library name '{0}': must be a single path component")]
  InvalidName(String),
}

impl Manifest {
  /// Load and validate a manifest from the given path.
  pub fn load(path: &Path) -> Result<Self, ManifestError> {
    let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
      path: path.to_path_buf(),
      source,
    })?;

    let manifest = Self::parse_at(&content, path)?;
    debug!(path = %path.display(), libraries = manifest.len(), "loaded manifest");
    Ok(manifest)
  }

  /// Parse and validate manifest JSON that did not come from a file.
  pub fn parse(content: &str) -> Result<Self, ManifestError> {
    Self::parse_at(content, Path::new("<inline>"))
  }

  fn parse_at(content: &str, path: &Path) -> Result<Self, ManifestError> {
    let manifest: Manifest = serde_json::from_str(content).map_err(|source| ManifestError::Parse {
      path: path.to_path_buf(),
      source,
    })?;
    manifest.validate()?;
    Ok(manifest)
  }

  fn validate(&self) -> Result<(), ManifestError> {
    let mut seen = HashSet::new();
    for lib in &self.libraries {
      if !is_single_component(&lib.name) {
        return Err(ManifestError::InvalidName(lib.name.clone()));
      }
      if !seen.insert(lib.name.as_str()) {
        return Err(ManifestError::DuplicateName(lib.name.clone()));
      }
    }
    Ok(())
  }
}

fn is_single_component(name: &str) -> bool {
  !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
