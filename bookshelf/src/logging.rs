use anyhow::Result;
use chrono::Local;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with file-based logging.
/// Logs are written to ~/.config/bookshelf/logs/bookshelf-YYYY-MM-DD-HH-MM-SS.log
///
/// The returned guard flushes pending records when dropped and must be kept
/// alive until the program exits.
pub fn init_logging() -> Result<(PathBuf, WorkerGuard)> {
    let logs_dir = dirs::config_dir()
        .ok_or(anyhow::anyhow!("Could not find config directory"))?
        .join("bookshelf")
        .join("logs");
    std::fs::create_dir_all(&logs_dir)?;

    let log_filename = log_file_name(Local::now());
    let log_path = logs_dir.join(&log_filename);

    let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    // Default to INFO, can be overridden with RUST_LOG
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;

    Ok((log_path, guard))
}

fn log_file_name(now: chrono::DateTime<Local>) -> String {
    format!("bookshelf-{}.log", now.format("%Y-%m-%d-%H-%M-%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn log_file_name_is_timestamped() {
        let now = Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 5).unwrap();

        assert_eq!(log_file_name(now), "bookshelf-2024-05-01-09-30-05.log");
    }
}
