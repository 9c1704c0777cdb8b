//! Diagnostic logging setup.
//!
//! Game text owns stdout, so diagnostics go to stderr (warnings and up by
//! default, `RUST_LOG` overrides) and, when a log directory is configured,
//! to a non-blocking file writer as well.
use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// File name written inside `LoggingConfig::log_dir`.
pub const LOG_FILE_NAME: &str = "robot-arena.log";

/// Installs the global subscriber.
///
/// Keep the returned guard alive for the whole run; dropping it flushes and
/// stops the file writer.
pub fn setup_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    if let Some(dir) = &config.log_dir {
        tracing::info!("Log file: {}/{}", dir.display(), LOG_FILE_NAME);
    }

    Ok(guard)
}
