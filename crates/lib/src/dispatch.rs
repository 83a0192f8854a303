//! Top-level translation pipeline.
//!
//! Rewrites the raw invocation, classifies it, and routes `build` commands to
//! manifest injection and `help` commands to the help listing. The returned
//! [`Dispatch`] is ready to be executed or printed.

use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::command::{CommandArgs, CommandKind, Tool, rewrite_command};
use crate::config::Config;
use crate::help::help_command;
use crate::manifest::{DerivedManifest, ManifestError, inject_manifest};

#[derive(Debug, Error)]
pub enum DispatchError {
  #[error(transparent)]
  Manifest(#[from] ManifestError),
}

/// Final command of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
  /// Target program selected by the rewrite.
  pub tool: Tool,
  /// Category the rewritten command fell into.
  pub kind: CommandKind,
  /// Argument vector to execute.
  pub args: CommandArgs,
  /// Derived manifest written for a `build`, if any.
  pub derived: Option<DerivedManifest>,
}

/// Translate a raw marcel invocation into the command to run.
///
/// `dir` is the working directory searched for a manifest on `build`.
///
/// # Errors
///
/// Returns an error if a manifest is present but cannot be translated to disk.
pub fn build_command(raw: CommandArgs, config: &Config, dir: &Path) -> Result<Dispatch, DispatchError> {
  let (tool, args) = rewrite_command(raw, config);
  let kind = CommandKind::classify(&args);
  debug!(?tool, ?kind, "classified command");

  let (args, derived) = match kind {
    CommandKind::Build => inject_manifest(args, dir)?.into_parts(),
    CommandKind::Help => (help_command(), None),
    CommandKind::Other => (args, None),
  };

  Ok(Dispatch {
    tool,
    kind,
    args,
    derived,
  })
}
