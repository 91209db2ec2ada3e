//! Logging setup
//!
//! Builds the tracing subscriber from a [`LogConfig`]: an ANSI console
//! layer on stderr, plus a non-blocking file layer writing the daily log
//! file. Either layer can be switched off. `RUST_LOG` overrides the
//! configured level.

use std::fs::File;

use anyhow::{Context, Result};
use tinyfront_core::LogConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

/// Keeps the file-appender worker thread alive.
///
/// Dropping this flushes and stops the writer, so `main` holds it for the
/// lifetime of the process.
pub struct LogGuard {
    _guard: WorkerGuard,
}

/// Initializes the logging system.
///
/// Returns the guard for the file writer when file output is enabled.
pub fn init(config: &LogConfig) -> Result<Option<LogGuard>> {
    config
        .ensure_log_directory()
        .context("Failed to create log directory")?;

    // Housekeeping failures are not worth aborting startup over.
    if let Err(e) = config.cleanup_old_logs() {
        eprintln!("Warning: Failed to cleanup old log files: {}", e);
    }

    let filter = || {
        EnvFilter::builder()
            .with_default_directive(config.parse_level().into())
            .from_env_lossy()
    };

    let console_layer = config.console_output.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false)
            .with_filter(filter())
    });

    let (file_layer, guard) = if config.file_output {
        let log_path = config.current_log_path();
        let file = File::create(&log_path)
            .with_context(|| format!("Failed to create log file: {:?}", log_path))?;
        let (writer, worker_guard) = tracing_appender::non_blocking(file);

        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(filter());
        (
            Some(layer),
            Some(LogGuard {
                _guard: worker_guard,
            }),
        )
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized at level: {}", config.level);
    if config.file_output {
        tracing::info!("Log file path: {:?}", config.current_log_path());
    }

    Ok(guard)
}
