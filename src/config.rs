//! Run configuration.
//!
//! All knobs for one run live in a single immutable [`Config`] built from
//! the parsed command line. The reconciliation code receives it by
//! reference; nothing is process-global.

use std::env;
use std::path::PathBuf;

use crate::args::CliArgs;
use crate::errors::FatalError;

/// Name of the per-user application-state directory.
#[cfg(not(windows))]
const APP_DIR_NAME: &str = ".dynomigrate";
#[cfg(windows)]
const APP_DIR_NAME: &str = "dynomigrate";

/// Immutable configuration for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory containing the JSON schema files.
    pub schema_dir: PathBuf,
    /// Delete and recreate tables that already exist.
    pub force: bool,
    /// Show debug-level tracing on the console.
    pub debug: bool,
    /// Optional DynamoDB endpoint override.
    pub endpoint_url: Option<String>,
    /// Per-user application directory holding the log file.
    pub app_dir: PathBuf,
}

impl Config {
    /// Build a config from parsed arguments.
    ///
    /// Fails with [`FatalError::MissingPath`] when `-p/--path` was not
    /// given. `"."` and `"./"` both resolve to the current working
    /// directory.
    pub fn from_args(args: CliArgs) -> Result<Self, FatalError> {
        let raw = args.path.ok_or(FatalError::MissingPath)?;

        let schema_dir = if raw == "." || raw == "./" {
            env::current_dir().unwrap_or_else(|_| PathBuf::from(raw))
        } else {
            PathBuf::from(raw)
        };

        Ok(Config {
            schema_dir,
            force: args.force,
            debug: args.debug,
            endpoint_url: args.endpoint_url,
            app_dir: app_dir(),
        })
    }

    /// Path of the structured log file.
    pub fn log_file(&self) -> PathBuf {
        self.app_dir.join("log.txt")
    }
}

/// Per-user application directory: `%APPDATA%\dynomigrate` on Windows, a
/// dotfile directory under the home directory elsewhere. Falls back to the
/// current directory when the relevant environment variable is unset.
fn app_dir() -> PathBuf {
    #[cfg(windows)]
    let base = env::var_os("APPDATA").map(PathBuf::from);
    #[cfg(not(windows))]
    let base = env::var_os("HOME").map(PathBuf::from);

    base.unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR_NAME)
}
