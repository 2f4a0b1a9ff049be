use anyhow::Result;
use chrono::Local;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::settings::Settings;

/// Initialize tracing with file-based logging
/// Logs are written to ~/.config/pageflow/logs/pageflow-YYYY-MM-DD-HH-MM-SS.log
/// unless `log_dir` is configured
pub fn init_logging(settings: &Settings) -> Result<PathBuf> {
    let logs_dir = match &settings.log_dir {
        Some(dir) => dir.clone(),
        None => dirs::config_dir()
            .ok_or(anyhow::anyhow!("Could not find config directory"))?
            .join("pageflow")
            .join("logs"),
    };
    std::fs::create_dir_all(&logs_dir)?;

    let log_filename = log_file_name(&Local::now());
    let log_path = logs_dir.join(&log_filename);

    // Create file appender (non-blocking for better performance)
    let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;

    // Keep the guard alive for the lifetime of the program
    std::mem::forget(guard);

    Ok(log_path)
}

fn log_file_name(now: &chrono::DateTime<Local>) -> String {
    format!("pageflow-{}.log", now.format("%Y-%m-%d-%H-%M-%S"))
}
