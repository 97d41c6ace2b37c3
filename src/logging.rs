//! Logging and tracing initialization.

use crate::config::{LogFormat, LoggingConfig};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Filter directive for the given `-v` count, falling back to the configured
/// level when no flag was given.
pub fn level_directive(config: &LoggingConfig, verbosity: u8) -> String {
    match verbosity {
        0 => config.level.to_lowercase(),
        1 => "warn".to_string(),
        2 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins over everything else. Console output goes to stderr; the
/// optional log file is appended to without colours.
pub fn init_logging(config: &LoggingConfig, verbosity: u8) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level_directive(config, verbosity)))
        .with_context(|| format!("Invalid log level: {}", config.level))?;

    let mut layers: Vec<BoxedLayer> = Vec::new();

    if config.to_console {
        let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
        layers.push(match config.format {
            LogFormat::Full => layer.boxed(),
            LogFormat::Compact => layer.compact().boxed(),
        });
    }

    if config.to_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.file_path)
            .with_context(|| format!("Failed to open log file: {:?}", config.file_path))?;

        let layer = fmt::layer().with_writer(Mutex::new(file)).with_ansi(false);
        layers.push(match config.format {
            LogFormat::Full => layer.boxed(),
            LogFormat::Compact => layer.compact().boxed(),
        });
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .with_context(|| "Failed to initialize logging")?;

    Ok(())
}
