use std::env;
use std::path::PathBuf;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Logging configuration: a filter directive plus an optional log directory
/// for daily-rolling file output.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_dir: env::var("LOG_DIR").ok().map(PathBuf::from),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    Initialization(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),
}

/// Initialize the tracing subscriber: console output always, plus a
/// daily-rolling `showroom.log` when `LOG_DIR` is set.
pub fn init_logging() -> Result<(), LoggingError> {
    let config = LoggingConfig::from_env();

    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", config.log_level, e)))?;

    let console = fmt::layer().with_target(true).with_filter(filter);

    match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;

            let file_filter = EnvFilter::try_new(&config.log_level)
                .map_err(|e| LoggingError::InvalidLogLevel(e.to_string()))?;
            let file = fmt::layer()
                .with_writer(tracing_appender::rolling::daily(dir, "showroom.log"))
                .with_ansi(false)
                .with_filter(file_filter);

            tracing_subscriber::registry()
                .with(console)
                .with(file)
                .try_init()
                .map_err(|e| LoggingError::Initialization(e.to_string()))?;
        }
        None => {
            tracing_subscriber::registry()
                .with(console)
                .try_init()
                .map_err(|e| LoggingError::Initialization(e.to_string()))?;
        }
    }

    Ok(())
}
