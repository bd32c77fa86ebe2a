//! Per-pair log files.
//!
//! Each pair worker owns exactly one append-only log file, so no
//! cross-worker locking is needed. Lines are `[LEVEL] message`; the
//! containing directory is created on first write.

use std::fs::{ self, File, OpenOptions };
use std::io::Write;
use std::path::{ Path, PathBuf };

use super::levels::LogLevel;
use super::tags::LogTag;

/// `trade_<pair>.log`, with dots replaced so the pair key is a valid
/// file-name component.
pub fn log_file_name(pair: &str) -> String {
    format!("trade_{}.log", pair.replace('.', "_"))
}

pub struct PairLog {
    pair: String,
    path: PathBuf,
    file: Option<File>,
}

impl PairLog {
    pub fn new(log_dir: &str, pair: &str) -> Self {
        Self {
            pair: pair.to_string(),
            path: Path::new(log_dir).join(log_file_name(pair)),
            file: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn error(&mut self, message: &str) {
        self.write(LogLevel::Error, message);
    }

    pub fn info(&mut self, message: &str) {
        self.write(LogLevel::Info, message);
    }

    pub fn debug(&mut self, message: &str) {
        if !super::get_logger_config().verbose {
            return;
        }
        self.write(LogLevel::Debug, message);
    }

    /// Append `[LEVEL] message` to the pair file and mirror it on the
    /// console with pair context.
    fn write(&mut self, level: LogLevel, message: &str) {
        let console = format!("{}: {}", self.pair, message);
        match level {
            LogLevel::Error => super::error(LogTag::Worker, &console),
            LogLevel::Warning => super::warning(LogTag::Worker, &console),
            LogLevel::Info => super::info(LogTag::Worker, &console),
            LogLevel::Debug => super::debug(LogTag::Worker, &console),
        }

        let line = format!("[{}] {}", level.as_str(), message);
        if let Err(e) = self.append(&line) {
            super::error(
                LogTag::System,
                &format!("failed to write {}: {}", self.path.display(), e)
            );
        }
    }

    fn append(&mut self, line: &str) -> std::io::Result<()> {
        if self.file.is_none() {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
            self.file = Some(file);
        }
        if let Some(file) = self.file.as_mut() {
            writeln!(file, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_replaces_dots() {
        assert_eq!(log_file_name("flon.usdt"), "trade_flon_usdt.log");
        assert_eq!(log_file_name("btc"), "trade_btc.log");
    }

    #[test]
    fn appends_lines_and_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs").join("nested");
        let log_dir = log_dir.to_str().unwrap().to_string();

        let mut log = PairLog::new(&log_dir, "flon.usdt");
        log.info("worker started");
        log.error("no bots configured");

        let content = fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["[INFO] worker started", "[ERROR] no bots configured"]);
    }

    #[test]
    fn two_pairs_use_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().to_str().unwrap().to_string();

        let mut left = PairLog::new(&log_dir, "flon.usdt");
        let mut right = PairLog::new(&log_dir, "flon.eos");
        left.info("left line");
        right.info("right line");

        assert_ne!(left.path(), right.path());
        assert!(fs::read_to_string(left.path()).unwrap().contains("left line"));
        assert!(fs::read_to_string(right.path()).unwrap().contains("right line"));
    }
}
