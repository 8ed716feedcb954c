#![deny(missing_docs)]
//! Shared logging utilities for the intake workspace.
//!
//! This crate provides the `intake_*` logging macros used across the codebase,
//! the logger initialization used by the terminal front end, and a minimal
//! test initializer for the global logger.

use std::fs::File;
use std::io;
use std::path::PathBuf;

#[doc(hidden)]
pub use log;
pub use log::LevelFilter;

use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Default log file name, relative to the current working directory.
pub const DEFAULT_LOG_FILE: &str = "intake.log";

/// Terminal output goes to stderr only; stdout carries the form.
const APP_TERMINAL_MODE: TerminalMode = TerminalMode::Stderr;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! intake_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! intake_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! intake_info {
    ($($arg:tt)*) => {{
        $crate::log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! intake_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! intake_error {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
    }};
}

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogDestination {
    /// Write to the configured log file.
    #[default]
    File,
    /// Write to the terminal on stderr.
    Terminal,
    /// Write to both file and terminal.
    Both,
    /// Do not install a logger.
    Off,
}

/// Logger settings chosen by the application at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Where log records go.
    pub destination: LogDestination,
    /// Maximum level that is recorded.
    pub level: LevelFilter,
    /// Path of the log file, used for `File` and `Both`.
    pub file_path: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            destination: LogDestination::File,
            level: LevelFilter::Info,
            file_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Initialize the global logger with the given settings.
///
/// The log file is truncated on every start. Returns an error only when the
/// log file cannot be created; an already-installed logger is left in place.
pub fn initialize(settings: &LogSettings) -> io::Result<()> {
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match settings.destination {
        LogDestination::Off => return Ok(()),
        LogDestination::File => vec![create_file_logger(settings, config)?],
        LogDestination::Terminal => vec![create_term_logger(settings.level, config)],
        LogDestination::Both => vec![
            create_term_logger(settings.level, config.clone()),
            create_file_logger(settings, config)?,
        ],
    };

    let _ = CombinedLogger::init(loggers);
    Ok(())
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

fn create_term_logger(level: LevelFilter, config: Config) -> Box<dyn SharedLogger> {
    TermLogger::new(level, config, APP_TERMINAL_MODE, ColorChoice::Auto)
}

fn create_file_logger(settings: &LogSettings, config: Config) -> io::Result<Box<dyn SharedLogger>> {
    let file = File::create(&settings.file_path)?;
    Ok(WriteLogger::new(settings.level, config, file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_write_info_to_intake_log() {
        let settings = LogSettings::default();
        assert_eq!(settings.destination, LogDestination::File);
        assert_eq!(settings.level, LevelFilter::Info);
        assert_eq!(settings.file_path, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn file_destination_creates_log_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("run.log");
        let settings = LogSettings {
            destination: LogDestination::File,
            level: LevelFilter::Debug,
            file_path: path.clone(),
        };

        initialize(&settings).unwrap();
        intake_info!("logger ready");

        assert!(path.is_file());
    }

    #[test]
    fn file_destination_reports_unwritable_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let settings = LogSettings {
            destination: LogDestination::Both,
            level: LevelFilter::Info,
            file_path: temp.path().join("missing").join("run.log"),
        };

        assert!(initialize(&settings).is_err());
    }

    #[test]
    fn terminal_destination_keeps_stdout_clear() {
        assert!(matches!(APP_TERMINAL_MODE, TerminalMode::Stderr));
    }

    #[test]
    fn off_installs_nothing() {
        let settings = LogSettings {
            destination: LogDestination::Off,
            ..LogSettings::default()
        };
        assert!(initialize(&settings).is_ok());
    }
}
