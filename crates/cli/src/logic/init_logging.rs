use chrono::Local;
use colored::{ColoredString, Colorize};
use log::{debug, Level};
use std::str::FromStr;

const RUST_LOG_ENV: &str = "RUST_LOG";

fn color_from_level(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".red(),
        Level::Warn => "WARN".yellow(),
        Level::Info => "INFO".green(),
        Level::Debug => "DEBUG".blue(),
        Level::Trace => "TRACE".white(),
    }
}

/// Logs go to stderr so that command output on stdout stays machine readable.
///
/// # Panics
/// Panics if a logger was already installed.
pub(crate) fn init_logging_with_level(log_level: log::LevelFilter) {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let time = Local::now().format("%H:%M:%S%.3f");
            let color = color_from_level(record.level());
            out.finish(format_args!("{time} {color} > {message}"));
        })
        .level(log_level)
        .chain(std::io::stderr())
        .apply()
        .inspect_err(|e| eprintln!("Failed to initialize logging with level `{log_level}`: {e}"))
        .unwrap();

    debug!("Logging initialized with level: {log_level}");
}

fn parse_log_level_from_str(log_level: &str) -> log::LevelFilter {
    log::LevelFilter::from_str(log_level).unwrap_or_else(|_| {
        panic!(
            "Invalid log level set with `{}`, got: {}",
            RUST_LOG_ENV, log_level
        )
    })
}

// Setup logging once
use std::sync::Once;
static INIT: Once = Once::new();
fn init_logging_inner() {
    let log_level = std::env::var(RUST_LOG_ENV)
        .map(|level| parse_log_level_from_str(&level))
        .unwrap_or(log::LevelFilter::Warn);
    init_logging_with_level(log_level);
}

/// Installs the logger, at `warn` unless `RUST_LOG` says otherwise.
///
/// # Panics
/// Panics if `RUST_LOG` is set to something that is not a log level.
pub fn init_logging() {
    INIT.call_once(init_logging_inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "Invalid log level")]
    fn invalid_log_level() {
        parse_log_level_from_str("loud");
    }

    #[test]
    fn valid_log_levels_parse_case_insensitively() {
        assert_eq!(parse_log_level_from_str("debug"), log::LevelFilter::Debug);
        assert_eq!(parse_log_level_from_str("WARN"), log::LevelFilter::Warn);
        assert_eq!(parse_log_level_from_str("off"), log::LevelFilter::Off);
    }

    #[test]
    fn test_color_from_level() {
        assert_eq!(
            color_from_level(Level::Error).to_string(),
            "ERROR".red().to_string()
        );
        assert_eq!(
            color_from_level(Level::Info).to_string(),
            "INFO".green().to_string()
        );
        assert_eq!(
            color_from_level(Level::Trace).to_string(),
            "TRACE".white().to_string()
        );
    }
}
