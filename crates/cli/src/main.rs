mod output;

use std::ffi::OsString;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use marcel_lib::consts::{APP_NAME, LOG_ENV};
use marcel_lib::{CommandArgs, Config, build_command, execute};

use crate::output::{print_error, print_plan};

/// marcel - le Docker à la française
///
/// Every argument is forwarded verbatim to the translation pipeline, so
/// marcel defines no flags of its own.
#[derive(Parser)]
#[command(name = "marcel")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
  /// Command and arguments, in marcel or docker vocabulary
  #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
  args: Vec<OsString>,
}

impl Cli {
  /// Parse `argv`, keeping a leading `--` that clap takes as its own escape.
  fn parse_argv(argv: Vec<OsString>) -> Self {
    let mut cli = Self::parse_from(&argv);
    let given = argv.get(1..).unwrap_or_default();
    if given.len() > cli.args.len() && given.first().is_some_and(|arg| arg == "--") {
      cli.args.insert(0, OsString::from("--"));
    }
    cli
  }
}

fn main() -> ExitCode {
  // Initialize logging
  let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let cli = Cli::parse_argv(std::env::args_os().collect());

  match run(cli) {
    Ok(code) => ExitCode::from(code),
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> Result<u8> {
  let config = Config::from_env().context("Invalid configuration")?;
  let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
  debug!(?config, cwd = %cwd.display(), "loaded configuration");

  let raw: CommandArgs = std::iter::once(OsString::from(APP_NAME)).chain(cli.args).collect();
  let dispatch = build_command(raw, &config, &cwd).context("Failed to translate command")?;

  if let Some(format) = config.dry_run {
    print_plan(&dispatch, format)?;
    return Ok(0);
  }

  let code = execute(&dispatch.args)?;
  // Exit statuses are truncated to a byte, as the shell would.
  Ok((code & 0xff) as u8)
}
