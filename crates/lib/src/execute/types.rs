//! Types for delegating a command to the target tool.

use thiserror::Error;

/// Errors that can occur while running the translated command.
#[derive(Debug, Error)]
pub enum ExecuteError {
  /// Nothing to run.
  #[error("empty command")]
  EmptyCommand,

  /// The program could not be started.
  #[error("failed to execute {program}: {source}")]
  Spawn { program: String, source: std::io::Error },
}
