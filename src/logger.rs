//! Logging setup built on `fern`.
//!
//! Every line goes to an in-memory buffer (kept for a debug view) and, when
//! logging is enabled in the config, to a log file as well.

use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::config::LoggingConfig;
use crate::constants::{LOG_BUFFER_CAPACITY, LOG_TIMESTAMP_FORMAT};

/// Shared logger handle that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    level: LevelFilter,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Build a logger from the logging section of the config.
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let log_file = if config.enabled { Some(config.log_file_path()?) } else { None };

        Ok(Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(LOG_BUFFER_CAPACITY))),
            level: config.level_filter()?,
            log_file,
        })
    }

    /// Whether lines are also written to a file
    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn log_file_path(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Build the fern dispatch feeding this logger's buffer and file.
    pub fn dispatch(&self) -> Result<fern::Dispatch> {
        let logs = Arc::clone(&self.logs);

        let mut dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    Local::now().format(LOG_TIMESTAMP_FORMAT),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(self.level)
            // sqlx echoes every statement at info level
            .level_for("sqlx", LevelFilter::Warn)
            .level_for("sea_orm", LevelFilter::Warn)
            .chain(fern::Output::call(move |record| {
                if let Ok(mut logs) = logs.lock() {
                    if logs.len() == LOG_BUFFER_CAPACITY {
                        logs.pop_front();
                    }
                    logs.push_back(record.args().to_string());
                }
            }));

        if let Some(path) = &self.log_file {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(file);
        }

        Ok(dispatch)
    }

    /// Install this logger as the global `log` backend.
    pub fn init(&self) -> Result<()> {
        self.dispatch()?
            .apply()
            .context("A global logger is already installed")?;
        Ok(())
    }

    /// Get all buffered lines, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear the in-memory buffer
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}
