//! Logging configuration.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

/// Errors from log-directory housekeeping.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("failed to create log directory {path:?}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The log directory could not be read during cleanup.
    #[error("failed to scan log directory {path:?}")]
    ScanDir {
        /// Directory that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// An old log file could not be removed.
    #[error("failed to remove old log file {path:?}")]
    RemoveFile {
        /// File that could not be removed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
}

/// Configuration for the logging system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level to record ("trace", "debug", "info", "warn", "error").
    pub level: String,
    /// Mirror log output to stderr.
    pub console_output: bool,
    /// Write log output to a file under `log_dir`.
    pub file_output: bool,
    /// Directory holding log files.
    pub log_dir: PathBuf,
    /// How many log files to retain during cleanup.
    pub max_log_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        let log_dir = dirs::data_local_dir()
            .map(|dir| dir.join("tinyfront").join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"));
        Self {
            level: "info".to_string(),
            console_output: true,
            file_output: true,
            log_dir,
            max_log_files: 10,
        }
    }
}

impl LogConfig {
    /// Creates the log directory if it does not exist.
    pub fn ensure_log_directory(&self) -> Result<(), LoggingError> {
        fs::create_dir_all(&self.log_dir).map_err(|source| LoggingError::CreateDir {
            path: self.log_dir.clone(),
            source,
        })
    }

    /// Removes the oldest `.log` files beyond `max_log_files`.
    ///
    /// Returns how many files were removed.
    pub fn cleanup_old_logs(&self) -> Result<usize, LoggingError> {
        if !self.log_dir.exists() {
            return Ok(0);
        }

        let entries = fs::read_dir(&self.log_dir).map_err(|source| LoggingError::ScanDir {
            path: self.log_dir.clone(),
            source,
        })?;

        let mut log_files: Vec<(PathBuf, SystemTime)> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry.path().extension().map(|ext| ext == "log").unwrap_or(false)
            })
            .filter_map(|entry| {
                let modified = entry.metadata().and_then(|meta| meta.modified()).ok()?;
                Some((entry.path(), modified))
            })
            .collect();

        // Newest first; everything past the cap goes.
        log_files.sort_by(|a, b| b.1.cmp(&a.1));

        let mut removed = 0;
        for (path, _) in log_files.into_iter().skip(self.max_log_files) {
            fs::remove_file(&path).map_err(|source| LoggingError::RemoveFile {
                path: path.clone(),
                source,
            })?;
            removed += 1;
        }
        Ok(removed)
    }

    /// Parses the configured level, defaulting to INFO if invalid.
    pub fn parse_level(&self) -> Level {
        self.level.parse().unwrap_or(Level::INFO)
    }

    /// Path of the log file for the current day.
    ///
    /// Stable for repeated calls within one day, so setup code can create
    /// the file and report its location from the same value.
    pub fn current_log_path(&self) -> PathBuf {
        let date = chrono::Local::now().format("%Y-%m-%d");
        self.log_dir.join(format!("tinyfront-{}.log", date))
    }
}
