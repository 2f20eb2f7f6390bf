// src/logging.rs
//
// Logging bootstrap.
//
// - Initialized at most once per process; later calls are no-ops
// - Logs to stderr, or to rotating files when a directory is configured
// - Messages use `event=... module=... status=...` key/value form

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

const LOG_FILE_BASENAME: &str = "ragapro";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: Option<PathBuf>,
    _logger: LoggerHandle,
}

/// Start logging from the effective configuration
pub fn init_from_config(config: &AppConfig) -> AppResult<()> {
    let level = config.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, config.log_dir.as_deref())
}

/// Start the global logger.
///
/// `log_dir = None` writes to stderr. Returns `Ok(())` without changes if
/// logging is already running.
pub fn init_logging(level: &str, log_dir: Option<&Path>) -> AppResult<()> {
    let level = normalize_level(level)?;

    if LOGGING_STATE.get().is_some() {
        return Ok(());
    }

    let state = LOGGING_STATE.get_or_try_init(|| -> AppResult<LoggingState> {
        let builder = Logger::try_with_str(level)
            .map_err(|err| AppError::Config(format!("invalid log level `{level}`: {err}")))?;

        let builder = match log_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                builder
                    .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
                    .rotate(
                        Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                        Naming::Numbers,
                        Cleanup::KeepLogFiles(MAX_LOG_FILES),
                    )
                    .write_mode(WriteMode::BufferAndFlush)
                    .append()
                    .format_for_files(flexi_logger::detailed_format)
            }
            None => builder.log_to_stderr(),
        };

        let logger = builder
            .start()
            .map_err(|err| AppError::Config(format!("failed to start logger: {err}")))?;

        install_panic_hook();

        Ok(LoggingState {
            level,
            log_dir: log_dir.map(Path::to_path_buf),
            _logger: logger,
        })
    })?;

    log::info!(
        "event=app_start module=logging status=ok platform={} build_mode={} version={} level={} sink={}",
        std::env::consts::OS,
        build_mode(),
        env!("CARGO_PKG_VERSION"),
        state.level,
        state
            .log_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|| "stderr".to_string())
    );

    Ok(())
}

/// `debug` in debug builds, `info` in release builds
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn normalize_level(level: &str) -> AppResult<&'static str> {
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

fn build_mode() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

fn install_panic_hook() {
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        log::error!(
            "event=panic_captured module=logging status=error location={} payload={}",
            location,
            panic_payload_summary(panic_info)
        );
        previous_hook(panic_info);
    }));
}

fn panic_payload_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };

    sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
}

/// Single-line, length-capped copy of `value`
pub(crate) fn sanitize_message(value: &str, max_chars: usize) -> String {
    let normalized = value.replace(['\n', '\r'], " ");
    let mut truncated = normalized.chars().take(max_chars).collect::<String>();
    if normalized.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}
