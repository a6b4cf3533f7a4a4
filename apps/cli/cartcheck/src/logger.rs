//! Logging for the cartcheck binary.
//!
//! Coloured lines go to stderr so stdout carries only the report. A plain-text
//! copy is appended to `--log-file` when given.

use crate::error::CartcheckError;

use common::ErrorLocation;

use std::io::stderr;
use std::panic::Location;
use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Tracks if logger initialization was already attempted.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

/// Install the global logger.
///
/// Safe to call more than once: later calls log a warning and return Ok.
///
/// # Errors
///
/// Returns [`CartcheckError::Logger`] if the log file cannot be opened or
/// another logger is already installed.
pub fn initialize(level: LevelFilter, log_file: Option<&Path>) -> Result<(), CartcheckError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = initialize_internal(level, log_file);
        if result.is_ok() {
            info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{level:?}");
        }
    });

    result
}

#[track_caller]
pub(crate) fn initialize_internal(level: LevelFilter, log_file: Option<&Path>) -> Result<(), CartcheckError> {
    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    // Dependency crates stay at warn unless we are debugging them.
    let mut base_dispatch = Dispatch::new()
        .level(LevelFilter::Warn)
        .level_for("cartcheck", level)
        .level_for("cart_core", level);

    let stderr_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level} {target}] {message}",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                target = record.target(),
                message = message,
            ))
        })
        .chain(stderr());
    base_dispatch = base_dispatch.chain(stderr_dispatch);

    if let Some(path) = log_file {
        let file = fern::log_file(path).map_err(|e| CartcheckError::Logger {
            message: format!("Failed to open log file {}: {e}", path.display()),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let file_dispatch = Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level} {target}] {message} [{file}:{line}]",
                    date = format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    target = record.target(),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0)
                ))
            })
            .chain(file);
        base_dispatch = base_dispatch.chain(file_dispatch);
    }

    base_dispatch.apply().map_err(|e| CartcheckError::Logger {
        message: format!("Failed to initialize logger: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(())
}
