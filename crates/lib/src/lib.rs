//! marcel-lib: translation engine for marcel
//!
//! marcel is a French front-end for the docker CLI. This crate provides:
//! - `dictionary`: the French to docker vocabularies
//! - `command`: rewriting of an invocation into docker syntax
//! - `manifest`: translation and injection of the `RecetteÀMarcel` manifest
//! - `help`: the marcel help listing
//! - `dispatch`: the full pipeline from raw argv to final command
//! - `execute`: delegation of the final command to the target tool

pub mod command;
pub mod config;
pub mod consts;
pub mod dictionary;
pub mod dispatch;
pub mod execute;
pub mod help;
pub mod manifest;

pub use command::{CommandArgs, CommandKind, Tool};
pub use config::{Config, ConfigError, DryRun};
pub use dispatch::{Dispatch, DispatchError, build_command};
pub use execute::{ExecuteError, execute};
