//! Tracing setup for the `taskpick` binary.
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use taskpick_core::config::{log_directory, LoggingConfig};

/// `RUST_LOG` wins over the configured level.
fn env_filter(logging: &LoggingConfig) -> Result<EnvFilter, String> {
    match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => Ok(EnvFilter::from_default_env()),
        _ => EnvFilter::try_new(&logging.level).map_err(|e| format!("bad log level: {e}")),
    }
}

/// Daily-rolling `taskpick.log` under the log directory, when file logging
/// is on.
pub fn file_writer(logging: &LoggingConfig) -> Result<Option<(NonBlocking, WorkerGuard)>, String> {
    if !logging.file {
        return Ok(None);
    }
    let dir = log_directory(logging);
    std::fs::create_dir_all(&dir)
        .map_err(|e| format!("create log dir {} failed: {e}", dir.display()))?;
    let appender = tracing_appender::rolling::daily(dir, "taskpick.log");
    Ok(Some(tracing_appender::non_blocking(appender)))
}

/// Installs the global subscriber. The returned guard flushes the file
/// writer on drop and must outlive the picker run.
pub fn init_tracing(logging: &LoggingConfig) -> Result<Option<WorkerGuard>, String> {
    if !logging.enabled {
        return Ok(None);
    }
    let filter = env_filter(logging)?;
    let (writer, guard) = file_writer(logging)?.unzip();
    if !logging.console && writer.is_none() {
        return Err("logging enabled but neither console nor file output is on".to_string());
    }

    // Picker output goes to stdout; logs stay on stderr.
    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });
    let file_layer = writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| e.to_string())?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_writer_creates_the_log_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("nested").join("logs");
        let logging = LoggingConfig {
            file: true,
            directory: Some(dir.to_string_lossy().into_owned()),
            ..Default::default()
        };

        assert!(file_writer(&logging).unwrap().is_some());
        assert!(dir.is_dir());
    }

    #[test]
    fn no_file_writer_unless_enabled() {
        assert!(file_writer(&LoggingConfig::default()).unwrap().is_none());
    }
}
