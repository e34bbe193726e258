use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::subscriber::DefaultGuard;
use tracing::warn;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;

use crate::util::ensure_directory;

const LOG_FILE_PREFIX: &str = "extract_date";
const LOG_FILE_SUFFIX: &str = "log";
const MAX_LOG_FILES: usize = 5;
const FILE_FILTER: &str = "debug,lopdf=error";

#[derive(Debug, Clone)]
pub struct LogSettings {
    pub directory: PathBuf,
    pub verbose: bool,
}

/// Keeps the run's subscriber installed; dropping it tears logging down.
pub struct LogContext {
    _guard: DefaultGuard,
    directory: Option<PathBuf>,
}

impl LogContext {
    /// Where the rolling log file lives, if file logging could be set up.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }
}

pub fn init(settings: &LogSettings) -> LogContext {
    let (file_appender, file_error) = match open_appender(&settings.directory) {
        Ok(appender) => (Some(appender), None),
        Err(err) => (None, Some(err)),
    };
    let directory = file_appender.as_ref().map(|_| settings.directory.clone());

    let file_layer = file_appender.map(|appender| {
        tracing_subscriber::fmt::layer()
            .with_writer(appender)
            .with_ansi(false)
            .with_filter(EnvFilter::new(FILE_FILTER))
    });

    let stderr_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if settings.verbose { "debug" } else { "warn" })
    });
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(stderr_filter);

    let subscriber = tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer);
    let guard = tracing::subscriber::set_default(subscriber);

    if let Some(err) = file_error {
        warn!(
            directory = %settings.directory.display(),
            error = %format!("{err:#}"),
            "file logging disabled"
        );
    }

    LogContext {
        _guard: guard,
        directory,
    }
}

fn open_appender(directory: &Path) -> Result<RollingFileAppender> {
    ensure_directory(directory)?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(directory)
        .with_context(|| format!("failed to open log file in {}", directory.display()))
}
