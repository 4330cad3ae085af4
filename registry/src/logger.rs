//! Logging setup for binaries and tests that consume the registry.
//!
//! The registry itself only emits through the `log` facade. Calling
//! [`initialize`] routes those records to colored stdout and a plain log file.

use crate::error::RegistryError;

use common::ErrorLocation;

use std::io::stdout;
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

/// True once a dispatch has been installed. Held locked for the whole
/// attempt so concurrent callers cannot both reach `apply()`.
static LOGGER_INSTALLED: Mutex<bool> = Mutex::new(false);

/// Log file name.
pub const LOG_FILE_NAME: &str = "status-registry.log";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

/// Default log level for debug builds.
#[cfg(debug_assertions)]
const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// Default log level for release builds.
#[cfg(not(debug_assertions))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Initialize the logger with dual output (stdout + `log_dir/status-registry.log`).
///
/// Safe to call more than once: once a logger is installed, later calls log a
/// warning and return Ok. A failed attempt installs nothing, so a later call
/// with a usable directory can still succeed.
///
/// # Errors
///
/// Returns [`RegistryError::Logger`] if the log file cannot be created or a
/// global logger is already installed by someone else.
pub fn initialize(log_dir: &Path) -> Result<(), RegistryError> {
    let mut installed = LOGGER_INSTALLED
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if *installed {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    initialize_internal(log_dir)?;
    *installed = true;
    info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{LOG_LEVEL:?}");

    Ok(())
}

#[track_caller]
fn initialize_internal(log_dir: &Path) -> Result<(), RegistryError> {
    let log_file_path = log_dir.join(LOG_FILE_NAME);

    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let base_dispatch = Dispatch::new().level(LOG_LEVEL);

    let stdout_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{target}]",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
                target = record.target(),
            ))
        })
        .chain(stdout());

    let log_file = fern::log_file(&log_file_path).map_err(|e| RegistryError::Logger {
        message: format!("Failed to create log file {}: {e}", log_file_path.display()),
        location: ErrorLocation::from(std::panic::Location::caller()),
    })?;

    // No colors in the file
    let file_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0)
            ))
        })
        .chain(log_file);

    base_dispatch
        .chain(stdout_dispatch)
        .chain(file_dispatch)
        .apply()
        .map_err(|e| RegistryError::Logger {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(std::panic::Location::caller()),
        })?;

    Ok(())
}
