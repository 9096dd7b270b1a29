//! Diagnostic logging bootstrap.
//!
//! Diagnostics go to stderr through the `log` facade so that stdout stays
//! reserved for command output (tables, `--json`). Initialization happens at
//! most once per process; later calls with the same level are no-ops.

use crate::errors::{AppError, AppResult};
use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

pub fn init_logging(level: &str) -> AppResult<()> {
    let normalized = normalize_level(level)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> AppResult<LoggingState> {
        let logger = Logger::try_with_str(normalized)
            .map_err(|e| AppError::Config(format!("invalid log level `{normalized}`: {e}")))?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()
            .map_err(|e| AppError::Other(format!("failed to start logger: {e}")))?;

        log::debug!(
            "event=app_start version={} level={}",
            env!("CARGO_PKG_VERSION"),
            normalized
        );

        Ok(LoggingState {
            level: normalized,
            _logger: logger,
        })
    })?;

    if state.level != normalized {
        log::debug!(
            "logging already initialized with level `{}`; ignoring `{}`",
            state.level,
            normalized
        );
    }

    Ok(())
}

pub fn normalize_level(level: &str) -> AppResult<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(AppError::Config(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error|off"
        ))),
    }
}
