//! Logging Infrastructure
//!
//! Structured logging setup for development (pretty console) and
//! production (JSON, optional daily rotating file).

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn"); `RUST_LOG` wins when set
/// * `json_format` - Whether to use JSON format
/// * `log_dir` - Optional directory for daily rotating `booking-engine.*` files
///
/// # Examples
/// ```no_run
/// use booking_engine::init_logger_with_file;
///
/// // Development setup (console only)
/// init_logger_with_file("debug", false, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_appender = match log_dir {
        Some(dir) => {
            let path = Path::new(dir);
            fs::create_dir_all(path)?;
            Some(RollingFileAppender::new(
                Rotation::DAILY,
                path,
                "booking-engine",
            ))
        }
        None => None,
    };

    // Console output goes to stderr so command output on stdout stays clean JSON
    let registry = tracing_subscriber::registry().with(env_filter);
    match (json_format, file_appender) {
        (true, Some(appender)) => registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::sync::Mutex::new(appender)),
            )
            .try_init()?,
        (true, None) => registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .try_init()?,
        (false, Some(appender)) => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(std::sync::Mutex::new(appender)),
            )
            .try_init()?,
        (false, None) => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}
