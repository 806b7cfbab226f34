use serde::Deserialize;

/// The dependency manifest.
///
/// Libraries keep the order in which they appear in the file. That order
/// drives both the fetch sequence and the generated inclusion file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Manifest {
  pub libraries: Vec<Library>,
}

/// A pinned library repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Library {
  /// Unique name, also the directory name under `libraries/`.
  pub name: String,
  /// Clone source.
  pub url: String,
  /// Branch or revision checked out after cloning.
  pub branch: String,
}

impl Library {
  pub fn new(name: &str, url: &str, branch: &str) -> Self {
    Self {
      name: name.to_string(),
      url: url.to_string(),
      branch: branch.to_string(),
    }
  }
}

impl Manifest {
  pub fn new(libraries: Vec<Library>) -> Self {
    Self { libraries }
  }

  pub fn len(&self) -> usize {
    self.libraries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.libraries.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Library> {
    self.libraries.iter()
  }
}

impl<'a> IntoIterator for &'a Manifest {
  type Item = &'a Library;
  type IntoIter = std::slice::Iter<'a, Library>;

  fn into_iter(self) -> Self::IntoIter {
    self.libraries.iter()
  }
}
