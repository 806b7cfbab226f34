mod build;
mod status;

pub use build::cmd_build;
pub use status::cmd_status;
