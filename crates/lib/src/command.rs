//! Command-line rewriting.
//!
//! Turns a raw marcel invocation into the argument vector of the target tool:
//! the program name is swapped for the engine (or the orchestrator when the
//! orchestration marker is present), a default subcommand is appended when
//! none was given, and every token goes through the token dictionary.

use std::borrow::Cow;
use std::ffi::OsString;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::consts::{
  APP_NAME, BUILD_SUBCOMMAND, DEFAULT_SUBCOMMAND, FILE_FLAG, FILE_FLAG_LONG, HELP_SUBCOMMAND, ORCHESTRATION_MARKER,
};
use crate::dictionary;

/// Ordered argument vector: program at index 0, subcommand at index 1.
///
/// Tokens are kept as `OsString` so arguments that are not valid UTF-8 reach
/// the target tool byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs(Vec<OsString>);

impl CommandArgs {
  pub fn program(&self) -> Option<&str> {
    self.0.first().and_then(|arg| arg.to_str())
  }

  pub fn subcommand(&self) -> Option<&str> {
    self.0.get(1).and_then(|arg| arg.to_str())
  }

  pub fn as_slice(&self) -> &[OsString] {
    &self.0
  }

  pub fn into_vec(self) -> Vec<OsString> {
    self.0
  }

  /// Tokens for display, with invalid UTF-8 replaced.
  pub fn lossy(&self) -> impl Iterator<Item = Cow<'_, str>> {
    self.0.iter().map(|arg| arg.to_string_lossy())
  }

  /// Whether an explicit manifest path was already passed (`-f x`, `--file x`, `--file=x`).
  pub fn has_file_flag(&self) -> bool {
    self.0.iter().filter_map(|arg| arg.to_str()).any(|arg| {
      arg == FILE_FLAG || arg == FILE_FLAG_LONG || arg.strip_prefix(FILE_FLAG_LONG).is_some_and(|v| v.starts_with('='))
    })
  }

  /// Insert tokens right after the subcommand, or at the end when there is none.
  pub fn insert_after_subcommand<I, S>(&mut self, tokens: I)
  where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
  {
    let at = self.0.len().min(2);
    self.0.splice(at..at, tokens.into_iter().map(Into::into));
  }
}

impl<S: Into<OsString>> FromIterator<S> for CommandArgs {
  fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
    Self(iter.into_iter().map(Into::into).collect())
  }
}

impl fmt::Display for CommandArgs {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.lossy().collect::<Vec<_>>().join(" "))
  }
}

/// Which target program an invocation was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
  /// Single-container tool (`docker`).
  Engine,
  /// Multi-container tool (`docker-compose`).
  Orchestrator,
}

/// Category of a rewritten command, decided from its subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
  Build,
  Help,
  Other,
}

impl CommandKind {
  pub fn classify(args: &CommandArgs) -> Self {
    match args.subcommand() {
      Some(BUILD_SUBCOMMAND) => CommandKind::Build,
      Some(HELP_SUBCOMMAND) => CommandKind::Help,
      _ => CommandKind::Other,
    }
  }
}

/// Rewrite a raw invocation into target-tool vocabulary.
///
/// Never fails: tokens missing from the dictionary pass through unchanged,
/// which lets native docker syntax be mixed with translated syntax.
/// An empty `raw` is treated as a bare `marcel`.
pub fn rewrite_command(raw: CommandArgs, config: &Config) -> (Tool, CommandArgs) {
  let mut args = raw.into_vec();
  if args.is_empty() {
    args.push(APP_NAME.into());
  }

  let tool = if args.get(1).is_some_and(|arg| arg == ORCHESTRATION_MARKER) {
    args.remove(0);
    args[0] = config.orchestrator.clone().into();
    Tool::Orchestrator
  } else {
    args[0] = config.engine.clone().into();
    Tool::Engine
  };

  if args.len() == 1 {
    args.push(DEFAULT_SUBCOMMAND.into());
  }

  let tokens = dictionary::tokens();
  let rewritten: CommandArgs = args
    .into_iter()
    .filter(|arg| !arg.is_empty())
    .map(|arg| match arg.to_str().and_then(|word| tokens.get(word)) {
      Some(target) => OsString::from(target),
      None => arg,
    })
    .collect();

  debug!(?tool, args = %rewritten, "rewrote command");
  (tool, rewritten)
}
