//! Environment-driven configuration.

use std::env;

use thiserror::Error;

use crate::consts::{DEFAULT_ENGINE, DEFAULT_ORCHESTRATOR, DRY_RUN_ENV, ENGINE_ENV, ORCHESTRATOR_ENV};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("invalid value for {var}: {value:?} (expected one of: 0, 1, false, true, text, json)")]
  InvalidValue { var: &'static str, value: String },
}

/// How a dry run reports the final command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DryRun {
  /// Tokens joined by spaces.
  Text,
  /// Pretty-printed JSON plan.
  Json,
}

impl DryRun {
  fn parse(value: &str) -> Result<Option<Self>, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
      "" | "0" | "false" => Ok(None),
      "1" | "true" | "text" => Ok(Some(DryRun::Text)),
      "json" => Ok(Some(DryRun::Json)),
      _ => Err(ConfigError::InvalidValue {
        var: DRY_RUN_ENV,
        value: value.to_string(),
      }),
    }
  }
}

/// Runtime settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Program standing in for the single-container tool.
  pub engine: String,
  /// Program standing in for the orchestration tool.
  pub orchestrator: String,
  /// Print the plan instead of executing it.
  pub dry_run: Option<DryRun>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      engine: DEFAULT_ENGINE.to_string(),
      orchestrator: DEFAULT_ORCHESTRATOR.to_string(),
      dry_run: None,
    }
  }
}

impl Config {
  /// Read `MARCEL_ENGINE`, `MARCEL_ORCHESTRATOR` and `MARCEL_DRY_RUN`.
  ///
  /// Unset or empty program overrides fall back to the defaults.
  pub fn from_env() -> Result<Self, ConfigError> {
    let dry_run = match env::var(DRY_RUN_ENV) {
      Ok(value) => DryRun::parse(&value)?,
      Err(_) => None,
    };

    Ok(Self {
      engine: program_from_env(ENGINE_ENV, DEFAULT_ENGINE),
      orchestrator: program_from_env(ORCHESTRATOR_ENV, DEFAULT_ORCHESTRATOR),
      dry_run,
    })
  }
}

fn program_from_env(var: &str, default: &str) -> String {
  env::var(var)
    .ok()
    .map(|value| value.trim().to_string())
    .filter(|value| !value.is_empty())
    .unwrap_or_else(|| default.to_string())
}
