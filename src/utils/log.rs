// src/utils/log.rs

//! Logging setup with a `timestamp LEVEL message` line format.

use chrono::{DateTime, Local};

/// Log target for conditions that stop the process.
pub const CRITICAL: &str = "critical";

/// Level label for a record, promoting the critical target.
pub fn level_label(level: log::Level, target: &str) -> &'static str {
    if target == CRITICAL && level == log::Level::Error {
        return "CRITICAL";
    }
    match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARNING",
        log::Level::Info => "INFO",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    }
}

/// Format one log line.
pub fn format_line(
    timestamp: DateTime<Local>,
    level: log::Level,
    target: &str,
    message: &std::fmt::Arguments<'_>,
) -> String {
    format!(
        "{} {} {}",
        timestamp.format("%Y-%m-%d %H:%M:%S"),
        level_label(level, target),
        message
    )
}

/// Initialize `env_logger`.
///
/// `verbose` lowers the default level to debug; `RUST_LOG` still wins.
/// With `log_file` set, lines are appended to that file instead of stderr.
#[cfg(feature = "cli")]
pub fn init(verbose: bool, log_file: Option<&std::path::Path>) -> std::io::Result<()> {
    builder(verbose, log_file)?.init();
    Ok(())
}

/// Configure an `env_logger` builder without installing it.
#[cfg(feature = "cli")]
pub fn builder(
    verbose: bool,
    log_file: Option<&std::path::Path>,
) -> std::io::Result<env_logger::Builder> {
    use std::io::Write;

    let level = if verbose { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{}",
            format_line(Local::now(), record.level(), record.target(), record.args())
        )
    });

    if let Some(path) = log_file {
        builder.target(env_logger::Target::Pipe(Box::new(open_log_file(path)?)));
    }

    Ok(builder)
}

/// Open a log file for appending, creating it if needed.
pub fn open_log_file(path: &std::path::Path) -> std::io::Result<std::fs::File> {
    std::fs::OpenOptions::new().create(true).append(true).open(path)
}
