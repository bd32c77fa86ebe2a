//! Structured logging for flonbot.
//!
//! Console output is tagged and colored; each pair worker additionally owns
//! a [`PairLog`] that appends `[LEVEL] message` lines to its own file under
//! the configured log directory. Debug-level output is gated by the verbose
//! flag.

mod config;
mod format;
mod levels;
mod pair;
mod tags;

pub use config::{ get_logger_config, set_logger_config, LoggerConfig };
pub use levels::LogLevel;
pub use pair::{ log_file_name, PairLog };
pub use tags::LogTag;

/// Initialize the logger system. Call once at startup, before any logging.
pub fn init(verbose: bool) {
    set_logger_config(LoggerConfig { verbose });
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level
pub fn warning(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations)
pub fn info(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level; only shown when verbose mode is enabled
pub fn debug(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Debug, message);
}

fn should_log(level: LogLevel) -> bool {
    match level {
        LogLevel::Error => true,
        LogLevel::Debug => get_logger_config().verbose,
        _ => true,
    }
}

fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(level) {
        return;
    }
    format::format_and_print(tag, level.as_str(), message);
}
