//! fwbuild-lib: core logic for the fwbuild firmware build orchestrator
//!
//! This crate provides:
//! - `Manifest`: the pinned library list read from `target-locked.json`
//! - `ProjectLayout`: every path the build touches, derived from one root
//! - `CommandRunner`: the seam through which external tools are invoked
//! - `Orchestrator`: the five-stage build pipeline
//! - `ProjectStatus`: a read-only view of what is present on disk

pub mod build;
pub mod consts;
pub mod execute;
pub mod layout;
pub mod manifest;
pub mod status;

#[cfg(test)]
pub(crate) mod testutil;
