use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{ManifestError, translate_manifest};
use crate::command::CommandArgs;
use crate::consts::{DERIVED_FILE_NAME, FILE_FLAG, MANIFEST_FILE_NAME};

/// Why injection left the arguments alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
  /// No manifest in the working directory.
  NoManifest,
  /// The command already names a file with `-f`/`--file`.
  ExplicitFile,
}

/// The translated manifest written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedManifest {
  /// Manifest that was read.
  pub source: PathBuf,
  /// File the translation was written to.
  pub path: PathBuf,
  /// Size of the translated content.
  pub bytes: usize,
}

/// Outcome of [`inject_manifest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Injection {
  Skipped { args: CommandArgs, reason: SkipReason },
  Injected { args: CommandArgs, derived: DerivedManifest },
}

impl Injection {
  pub fn into_parts(self) -> (CommandArgs, Option<DerivedManifest>) {
    match self {
      Injection::Skipped { args, .. } => (args, None),
      Injection::Injected { args, derived } => (args, Some(derived)),
    }
  }
}

/// Location of the manifest inside `dir`.
pub fn manifest_path(dir: &Path) -> PathBuf {
  dir.join(MANIFEST_FILE_NAME)
}

/// Location of the derived (translated) manifest inside `dir`.
pub fn derived_path(dir: &Path) -> PathBuf {
  dir.join(DERIVED_FILE_NAME)
}

/// Point a `build` command at the translated manifest of `dir`.
///
/// When `dir` holds a manifest and `args` does not already name a file, the
/// manifest is translated into the derived file (overwriting it) and
/// `-f ./<derived>` is inserted right after the subcommand.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or the derived file
/// cannot be written.
pub fn inject_manifest(args: CommandArgs, dir: &Path) -> Result<Injection, ManifestError> {
  let source = manifest_path(dir);

  if !source.exists() {
    debug!(path = %source.display(), "no manifest found");
    return Ok(Injection::Skipped {
      args,
      reason: SkipReason::NoManifest,
    });
  }
  if args.has_file_flag() {
    debug!("explicit file given, manifest not injected");
    return Ok(Injection::Skipped {
      args,
      reason: SkipReason::ExplicitFile,
    });
  }

  let content = fs::read_to_string(&source).map_err(|e| ManifestError::Read {
    path: source.clone(),
    source: e,
  })?;
  let translated = translate_manifest(&content);

  let path = derived_path(dir);
  fs::write(&path, &translated).map_err(|e| ManifestError::Write {
    path: path.clone(),
    source: e,
  })?;
  info!(path = %path.display(), bytes = translated.len(), "derived manifest written");

  let mut args = args;
  args.insert_after_subcommand([FILE_FLAG.to_string(), format!("./{DERIVED_FILE_NAME}")]);

  Ok(Injection::Injected {
    args,
    derived: DerivedManifest {
      source,
      path,
      bytes: translated.len(),
    },
  })
}
