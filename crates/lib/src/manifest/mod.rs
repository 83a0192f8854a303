//! Build manifest handling.
//!
//! A manifest (`RecetteÀMarcel`) is a Dockerfile written with French
//! directive keywords. This module translates its text and, for `build`
//! invocations, materializes the translated file and points the command at it.

mod inject;
mod translate;

use std::path::PathBuf;

use thiserror::Error;

pub use inject::{DerivedManifest, Injection, SkipReason, derived_path, inject_manifest, manifest_path};
pub use translate::translate_manifest;

/// Errors that can occur while producing the derived manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
  #[error("failed to read manifest {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("failed to write derived manifest {}: {source}", path.display())]
  Write { path: PathBuf, source: std::io::Error },
}
