use crate::manifest::Manifest;

/// Render the inclusion file: one `add_subdirectory` line per library, in
/// manifest order.
pub fn render_include(manifest: &Manifest) -> String {
  manifest
    .iter()
    .map(|lib| format!("add_subdirectory({})\n", lib.name))
    .collect()
}
