//! CLI output formatting utilities.
//!
//! Error reporting on stderr and the dry-run rendering of a translated
//! command, either as plain text or as a JSON plan.

use std::borrow::Cow;
use std::path::PathBuf;

use anyhow::Context;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use marcel_lib::{CommandKind, Dispatch, DryRun, Tool};

pub mod symbols {
  pub const ERROR: &str = "✗";
}

/// Serializable view of a [`Dispatch`].
#[derive(Debug, Serialize)]
pub struct Plan<'a> {
  pub tool: Tool,
  pub kind: CommandKind,
  pub argv: Vec<Cow<'a, str>>,
  pub derived_manifest: Option<&'a PathBuf>,
}

impl<'a> From<&'a Dispatch> for Plan<'a> {
  fn from(dispatch: &'a Dispatch) -> Self {
    Self {
      tool: dispatch.tool,
      kind: dispatch.kind,
      argv: dispatch.args.lossy().collect(),
      derived_manifest: dispatch.derived.as_ref().map(|d| &d.path),
    }
  }
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}

/// Print the command that would be executed.
pub fn print_plan(dispatch: &Dispatch, format: DryRun) -> anyhow::Result<()> {
  match format {
    DryRun::Text => {
      println!("{}", dispatch.args);
      Ok(())
    }
    DryRun::Json => print_json(&Plan::from(dispatch)),
  }
}
