//! Delegation to the target tool.
//!
//! Runs the final argument vector as a child process that shares marcel's
//! standard streams, and reports the child's exit code so marcel can exit
//! with it.

pub mod types;

use std::process::{Command, ExitStatus};

use tracing::{debug, info};

use crate::command::CommandArgs;

pub use types::ExecuteError;

/// Run `args[0]` with the remaining arguments and wait for it.
///
/// stdin, stdout and stderr are inherited.
///
/// # Returns
///
/// The child's exit code. On Unix a child killed by signal `N` yields `128 + N`.
pub fn execute(args: &CommandArgs) -> Result<i32, ExecuteError> {
  let (program, rest) = args.as_slice().split_first().ok_or(ExecuteError::EmptyCommand)?;
  let program_name = program.to_string_lossy();
  info!(program = %program_name, args = ?rest, "executing command");

  let status = Command::new(program)
    .args(rest)
    .status()
    .map_err(|e| ExecuteError::Spawn {
      program: program_name.to_string(),
      source: e,
    })?;

  let code = exit_code(status);
  debug!(program = %program_name, code, "command exited");
  Ok(code)
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
  use std::os::unix::process::ExitStatusExt;

  status
    .code()
    .or_else(|| status.signal().map(|signal| 128 + signal))
    .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
  status.code().unwrap_or(1)
}
