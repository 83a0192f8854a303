//! Shared helpers for library tests.

use std::path::Path;

use marcel_lib::{CommandArgs, Config, Dispatch, build_command};
use tempfile::TempDir;

/// A working directory holding an optional `RecetteÀMarcel`.
pub fn workdir(manifest: Option<&str>) -> TempDir {
  let temp = TempDir::new().unwrap();
  if let Some(content) = manifest {
    std::fs::write(marcel_lib::manifest::manifest_path(temp.path()), content).unwrap();
  }
  temp
}

/// Run the full pipeline with the default configuration.
pub fn dispatch(raw: &[&str], dir: &Path) -> Dispatch {
  let raw: CommandArgs = raw.iter().copied().collect();
  build_command(raw, &Config::default(), dir).unwrap()
}
