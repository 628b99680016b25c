// src/log.rs
//
// File sink for the `log` facade: `[hh:mm:ss.mmm][LEVEL] message` lines,
// elapsed time since start, appended to `.store/debug.log`.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

use crate::config::consts::{ENV_LOG_LEVEL, LOG_FILE, STORE_DIR};

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

pub struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl FileLogger {
    pub fn open(path: &Path, level: LevelFilter) -> std::io::Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { level, file: Mutex::new(file) })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) { return; }

        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        let line = format!("[{elapsed}][{}] {}\n", record.level(), record.args());

        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(line.as_bytes());
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Level from `VERANDA_LOG` (error|warn|info|debug|trace|off), default info.
pub fn level_from_env() -> LevelFilter {
    std::env::var(ENV_LOG_LEVEL)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

/// Install the file logger. Best effort: a second call, or an unwritable
/// store dir, leaves logging off rather than failing the app.
pub fn init() {
    start();
    let level = level_from_env();
    match FileLogger::open(&log_path(), level) {
        Ok(logger) => {
            if log::set_boxed_logger(Box::new(logger)).is_ok() {
                log::set_max_level(level);
            }
        }
        Err(e) => eprintln!("Logging disabled: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_formats_hours_minutes_seconds_millis() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_045), "01:02:03.045");
    }

    #[test]
    fn logger_respects_level() {
        let dir = tempfile::tempdir().unwrap();
        let logger = FileLogger::open(&dir.path().join("x/debug.log"), LevelFilter::Warn).unwrap();
        let info = Metadata::builder().level(log::Level::Info).build();
        let error = Metadata::builder().level(log::Level::Error).build();
        assert!(!logger.enabled(&info));
        assert!(logger.enabled(&error));
    }
}
