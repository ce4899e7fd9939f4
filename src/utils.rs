//! Utility functions for the automata-search crate

use std::io::Write;

use flexi_logger::{DeferredNow, Logger, LoggerHandle, style};
use log::Record;

use crate::Result;

/// Single-letter level prefix followed by the message, coloured by level.
pub fn log_format(
    w: &mut dyn Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> std::result::Result<(), std::io::Error> {
    let level = record.level();
    write!(
        w,
        "{} {}",
        style(level).paint(level.to_string()[..1].to_string()),
        style(level).paint(record.args().to_string())
    )
}

/// Start logging to stderr with a `log` level spec such as `"warn"` or
/// `"automata_search=debug"`.
///
/// The returned handle must be kept alive for as long as logging is needed.
///
/// # Errors
///
/// Returns [`crate::Error::Logger`] if the spec cannot be parsed or a logger
/// is already installed.
pub fn init_logger(spec: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_str(spec)?
        .log_to_stderr()
        .format_for_stderr(log_format)
        .start()?;
    Ok(handle)
}

/// Format a duration in microseconds with two decimals.
///
/// # Examples
///
/// ```
/// use automata_search::utils::format_micros;
/// use std::time::Duration;
///
/// assert_eq!(format_micros(Duration::from_nanos(12_346)), "12.35 µs");
/// ```
pub fn format_micros(elapsed: std::time::Duration) -> String {
    format!("{:.2} µs", elapsed.as_secs_f64() * 1e6)
}
