//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments
//! Features:
//! - Console output (pretty in development, JSON in production)
//! - Optional daily rotating application logs
//! - Optional daily rotating HTTP access logs (target `http_access`)

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::{LevelFilter, filter_fn};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

/// Target used by the access log middleware
pub const ACCESS_LOG_TARGET: &str = "http_access";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn"); `RUST_LOG` overrides the console filter
/// * `json_format` - Whether to use JSON format (true for production)
/// * `log_dir` - Optional directory for file logging
///
/// # Examples
/// ```no_run
/// use report_server::init_logger_with_file;
///
/// // Development setup (console only)
/// init_logger_with_file("debug", false, None).unwrap();
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let max_level: LevelFilter = level.parse().unwrap_or(LevelFilter::INFO);

    let mut layers: Vec<BoxedLayer> = Vec::new();

    // Console layer
    if json_format {
        layers.push(
            fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(console_filter)
                .boxed(),
        );
    } else {
        layers.push(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_filter(console_filter)
                .boxed(),
        );
    }

    if let Some(dir) = log_dir {
        let app_log_dir = dir.join("app");
        let access_log_dir = dir.join("access");
        fs::create_dir_all(&app_log_dir)?;
        fs::create_dir_all(&access_log_dir)?;

        // Application logs: everything except access lines
        let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app");
        layers.push(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(std::sync::Mutex::new(app_log))
                .with_filter(filter_fn(move |meta| {
                    meta.target() != ACCESS_LOG_TARGET && *meta.level() <= max_level
                }))
                .boxed(),
        );

        // Access logs: only the request middleware's lines
        let access_log = RollingFileAppender::new(Rotation::DAILY, access_log_dir, "access");
        layers.push(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(std::sync::Mutex::new(access_log))
                .with_filter(filter_fn(|meta| meta.target() == ACCESS_LOG_TARGET))
                .boxed(),
        );
    }

    tracing_subscriber::registry().with(layers).try_init()?;

    Ok(())
}
