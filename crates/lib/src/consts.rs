//! Fixed names shared across the translation pipeline.

/// Name marcel is invoked as. Only used as a placeholder for argv[0].
pub const APP_NAME: &str = "marcel";

/// Second token that selects the orchestration tool instead of the engine.
pub const ORCHESTRATION_MARKER: &str = "et-son-orchestre";

/// Default single-container tool.
pub const DEFAULT_ENGINE: &str = "docker";

/// Default multi-container tool.
pub const DEFAULT_ORCHESTRATOR: &str = "docker-compose";

/// Subcommand appended when marcel is invoked without one.
pub const DEFAULT_SUBCOMMAND: &str = "help";

/// Target-side subcommand that triggers manifest injection.
pub const BUILD_SUBCOMMAND: &str = "build";

/// Target-side subcommand that triggers the help listing.
pub const HELP_SUBCOMMAND: &str = "help";

/// Build manifest looked up in the working directory.
pub const MANIFEST_FILE_NAME: &str = "RecetteÀMarcel";

/// Translated manifest written next to [`MANIFEST_FILE_NAME`].
pub const DERIVED_FILE_NAME: &str = ".RecetteÀMarcel.Dockerfile";

/// Short "use this file" flag of `docker build`.
pub const FILE_FLAG: &str = "-f";

/// Long "use this file" flag of `docker build`.
pub const FILE_FLAG_LONG: &str = "--file";

/// Program the help listing is handed to.
pub const ECHO_PROGRAM: &str = "echo";

/// Environment variable overriding the engine program.
pub const ENGINE_ENV: &str = "MARCEL_ENGINE";

/// Environment variable overriding the orchestration program.
pub const ORCHESTRATOR_ENV: &str = "MARCEL_ORCHESTRATOR";

/// Environment variable enabling dry-run output.
pub const DRY_RUN_ENV: &str = "MARCEL_DRY_RUN";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "MARCEL_LOG";
