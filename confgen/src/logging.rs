//! Logging infrastructure for user-facing output.
//!
//! The library itself reports diagnostics through the `log` facade; this
//! module is the stderr logger the CLI drives from its `--verbose` and
//! `--quiet` flags.

use std::env;
use std::fmt;

/// Output verbosity, ordered from least to most verbose.
///
/// # Examples
///
/// ```
/// use confgen::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info, and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is none of `quiet`, `normal`,
    /// `verbose`.
    ///
    /// # Examples
    ///
    /// ```
    /// use confgen::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A stderr logger that drops messages below its configured level.
///
/// # Examples
///
/// ```
/// use confgen::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("document has no nested sections");
/// logger.info("not printed at Normal level");
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger with the given level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an error message. Suppressed only at Quiet.
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("ERROR: {message}");
        }
    }

    /// Logs a warning message. Suppressed only at Quiet.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("WARN: {message}");
        }
    }

    /// Logs an informational message. Printed only at Verbose.
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("INFO: {message}");
        }
    }

    /// Logs a debug message. Printed only at Verbose.
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("DEBUG: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Builds a logger from CLI flags and the environment.
///
/// Precedence: the `verbose` flag, then the `quiet` flag, then the
/// `CONFGEN_LOG_MODE` environment variable, then Normal. An unparseable
/// environment value falls back to Normal.
///
/// # Examples
///
/// ```
/// use confgen::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var("CONFGEN_LOG_MODE") {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering_and_display() {
        assert!(LogLevel::Quiet < LogLevel::Normal);
        assert!(LogLevel::Normal < LogLevel::Verbose);
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("normal").unwrap(), LogLevel::Normal);
        assert_eq!(LogLevel::parse("QUIET").unwrap(), LogLevel::Quiet);
        assert_eq!(LogLevel::parse("Verbose").unwrap(), LogLevel::Verbose);
        assert!(LogLevel::parse("loud").is_err());
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_logger_defaults_to_normal() {
        assert_eq!(Logger::default().level(), LogLevel::Normal);
    }

    #[test]
    fn test_init_logger_flags() {
        assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
        assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
        // Verbose wins when both flags are set.
        assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
    }

    // All environment-variable cases live in one test because the
    // variable is process-global and tests run in parallel.
    #[test]
    fn test_init_logger_env_priority() {
        let saved = env::var("CONFGEN_LOG_MODE").ok();

        env::remove_var("CONFGEN_LOG_MODE");
        assert_eq!(init_logger(false, false).level(), LogLevel::Normal);

        env::set_var("CONFGEN_LOG_MODE", "verbose");
        assert_eq!(init_logger(false, false).level(), LogLevel::Verbose);

        env::set_var("CONFGEN_LOG_MODE", "quiet");
        assert_eq!(init_logger(false, false).level(), LogLevel::Quiet);

        env::set_var("CONFGEN_LOG_MODE", "invalid");
        assert_eq!(init_logger(false, false).level(), LogLevel::Normal);

        // CLI flags override whatever the environment says.
        env::set_var("CONFGEN_LOG_MODE", "normal");
        assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);

        match saved {
            Some(val) => env::set_var("CONFGEN_LOG_MODE", val),
            None => env::remove_var("CONFGEN_LOG_MODE"),
        }
    }
}
