//! Logging setup.
//!
//! Two `tracing` layers:
//! - a file layer under the application directory, always at debug level, so
//!   the log file captures everything the console shows plus debug detail;
//! - a console layer that is only installed when `--debug` is set.
//!
//! User-facing progress lines are printed directly to stdout/stderr by the
//! run loop; tracing is the structured side channel.

use std::fs::{self, OpenOptions};
use std::sync::Arc;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use crate::config::Config;
use crate::errors::FatalError;

/// Initialize the global tracing subscriber.
///
/// Creates the application directory if needed. Failing to create the
/// directory or open the log file is fatal; the tool refuses to run with a
/// broken logging sink.
pub fn init(config: &Config) -> Result<(), FatalError> {
    fs::create_dir_all(&config.app_dir)
        .map_err(|e| FatalError::AppDir(config.app_dir.display().to_string(), e))?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_file())
        .map_err(|e| FatalError::LogInit(e.to_string()))?;

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Arc::new(log_file))
        .with_filter(LevelFilter::DEBUG);

    let console_layer = config.debug.then(|| {
        fmt::layer()
            .with_target(false)
            .with_filter(LevelFilter::DEBUG)
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| FatalError::LogInit(e.to_string()))
}
