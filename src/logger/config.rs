use once_cell::sync::Lazy;
use parking_lot::RwLock;

#[derive(Debug, Clone, Default)]
pub struct LoggerConfig {
    pub verbose: bool,
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> = Lazy::new(|| {
    RwLock::new(LoggerConfig::default())
});

pub fn get_logger_config() -> LoggerConfig {
    LOGGER_CONFIG.read().clone()
}

pub fn set_logger_config(config: LoggerConfig) {
    *LOGGER_CONFIG.write() = config;
}
