#![deny(missing_docs)]
//! Shared logging utilities for the movie catalog workspace.
//!
//! This crate provides the `catalog_*` logging macros used across the codebase,
//! the process-wide logger setup used by the front end, and a minimal test
//! initializer for the global logger.

use std::fs::File;
use std::path::{Path, PathBuf};

use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

#[doc(hidden)]
pub use log;

pub use log::LevelFilter;

/// Default log file written when a file destination is chosen.
pub const DEFAULT_LOG_FILE: &str = "./movies.log";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_info {
    ($($arg:tt)*) => {{
        $crate::log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_error {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
    }};
}

/// Destination for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Write to the given file, truncating it on startup.
    File(PathBuf),
    /// Write to the terminal (stderr for warnings and errors).
    Terminal,
    /// Write to both the file and the terminal.
    Both(PathBuf),
}

impl LogDestination {
    /// File destination at [`DEFAULT_LOG_FILE`].
    pub fn default_file() -> Self {
        Self::File(PathBuf::from(DEFAULT_LOG_FILE))
    }
}

/// Initializes the global logger with the specified destination.
///
/// A log file that cannot be created falls back to terminal output, so
/// diagnostics are never silently dropped. Returns `false` when another
/// logger is already active.
pub fn initialize(destination: LogDestination, level: LevelFilter) -> bool {
    let (_, loggers) = build_loggers(destination, level);
    CombinedLogger::init(loggers).is_ok()
}

/// Builds the loggers for `destination` and reports the destination actually in use.
fn build_loggers(
    destination: LogDestination,
    level: LevelFilter,
) -> (LogDestination, Vec<Box<dyn SharedLogger>>) {
    let config = build_config();

    match destination {
        LogDestination::File(path) => match create_file_logger(&path, level, config.clone()) {
            Some(file_logger) => (LogDestination::File(path), vec![file_logger]),
            None => (
                LogDestination::Terminal,
                vec![terminal_logger(level, config)],
            ),
        },
        LogDestination::Terminal => (
            LogDestination::Terminal,
            vec![terminal_logger(level, config)],
        ),
        LogDestination::Both(path) => {
            let mut loggers = vec![terminal_logger(level, config.clone())];
            match create_file_logger(&path, level, config) {
                Some(file_logger) => {
                    loggers.push(file_logger);
                    (LogDestination::Both(path), loggers)
                }
                None => (LogDestination::Terminal, loggers),
            }
        }
    }
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn terminal_logger(level: LevelFilter, config: Config) -> Box<dyn SharedLogger> {
    TermLogger::new(level, config, TerminalMode::Mixed, ColorChoice::Auto)
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<dyn SharedLogger>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_points_at_movies_log() {
        assert_eq!(
            LogDestination::default_file(),
            LogDestination::File(PathBuf::from(DEFAULT_LOG_FILE))
        );
    }

    #[test]
    fn file_logger_fails_for_missing_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("missing").join("movies.log");
        assert!(create_file_logger(&path, LevelFilter::Info, build_config()).is_none());
    }

    #[test]
    fn unwritable_log_file_falls_back_to_terminal() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("missing").join("movies.log");

        let (used, loggers) = build_loggers(LogDestination::File(path.clone()), LevelFilter::Info);
        assert_eq!(used, LogDestination::Terminal);
        assert_eq!(loggers.len(), 1);

        let (used, loggers) = build_loggers(LogDestination::Both(path), LevelFilter::Info);
        assert_eq!(used, LogDestination::Terminal);
        assert_eq!(loggers.len(), 1);
    }

    #[test]
    fn writable_log_file_is_used() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("movies.log");

        let (used, loggers) = build_loggers(LogDestination::Both(path.clone()), LevelFilter::Info);
        assert_eq!(used, LogDestination::Both(path.clone()));
        assert_eq!(loggers.len(), 2);
        assert!(path.exists());
    }

    #[test]
    fn macros_are_usable_without_logger() {
        initialize_for_tests();
        catalog_trace!("trace {}", 1);
        catalog_debug!("debug {}", 2);
        catalog_info!("info {}", 3);
        catalog_warn!("warn {}", 4);
        catalog_error!("error {}", 5);
    }
}
