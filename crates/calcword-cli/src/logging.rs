//! Tracing subscriber setup.
//!
//! Logs go to stderr unless a log file is given. The TUI owns the terminal, so
//! it passes `LogTarget::Discard` when no file was requested.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;

use crate::args::LogLevel;

#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

impl LogTarget {
    /// File if one was requested, otherwise the given fallback
    pub fn file_or(path: Option<PathBuf>, fallback: LogTarget) -> Self {
        path.map(LogTarget::File).unwrap_or(fallback)
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init(level: LogLevel, target: LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::from(level))
        .with_target(false);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }

    Ok(())
}
