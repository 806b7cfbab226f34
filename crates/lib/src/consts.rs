//! Fixed names of the files and directories that make up a firmware project.

/// Dependency manifest read from the project root.
pub const MANIFEST_FILENAME: &str = "target-locked.json";

/// Directory holding one checkout per manifest library.
pub const LIBRARIES_DIR: &str = "libraries";

/// Generated inclusion file inside [`LIBRARIES_DIR`].
pub const INCLUDE_FILENAME: &str = "CMakeLists.txt";

/// Scratch directory for the external toolchain, recreated on every build.
pub const BUILD_DIR: &str = "build";

/// Firmware image produced inside [`BUILD_DIR`] and published to the root.
pub const ARTIFACT_NAME: &str = "MICROBIT.hex";

/// Version-control tool used to fetch libraries.
pub const GIT: &str = "git";

/// Build-system generator.
pub const CMAKE: &str = "cmake";

/// Build backend.
pub const MAKE: &str = "make";
