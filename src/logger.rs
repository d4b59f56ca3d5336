use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Appends timestamped lines to a file. The game owns the terminal, so
/// nothing is ever printed.
pub struct Logger {
    file: Mutex<File>,
}

impl Logger {
    fn new(file: File) -> Self {
        Self { file: Mutex::new(file) }
    }

    pub fn log(&self, message: &str) {
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", format_line(message));
        }
    }
}

fn format_line(message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("[{}] {}", timestamp, message)
}

pub fn init_logger(path: &Path) -> Result<(), String> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("Failed to open log file {}: {}", path.display(), e))?;
    LOGGER.get_or_init(|| Logger::new(file));
    Ok(())
}

/// Without `init_logger` the message is dropped.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_has_timestamp_prefix() {
        let line = format_line("Blue snake ran into green snake");
        assert!(line.starts_with('['));
        assert!(line.ends_with("] Blue snake ran into green snake"));
        // "[YYYY-MM-DD HH:MM:SS] "
        assert_eq!(line.find(']'), Some(20));
    }

    #[test]
    fn test_logger_appends_lines() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let logger = Logger::new(file.reopen().unwrap());

        logger.log("first");
        logger.log("second");

        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].ends_with("second"));
    }

    #[test]
    fn test_init_logger_fails_on_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("snake.log");
        assert!(init_logger(&path).is_err());
    }
}
