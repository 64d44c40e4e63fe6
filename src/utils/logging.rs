use crate::models::error::SError;
use camino::Utf8Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_PREFIX: &str = "theme_extras.log";

/// Installs the global subscriber: stderr plus a daily rolling file in `log_dir`.
/// `RUST_LOG` overrides `level` when set.
///
/// The returned guard flushes the file writer on drop, so the host must keep it
/// alive for as long as the plugin is loaded.
pub fn init(log_dir: &Utf8Path, level: &str) -> Result<WorkerGuard, SError> {
    std::fs::create_dir_all(log_dir)?;

    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .try_init()
        .map_err(|_| SError::LoggingInitialized)?;

    Ok(guard)
}
