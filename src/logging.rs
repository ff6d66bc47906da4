//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

const LOG_FILENAME: &str = "mikabites.log";

/// Initialize the logging subsystem
///
/// Logs go to a daily rolling file under the user's local data directory
/// (`~/.local/share/mikabites/logs/` on Linux). The level is controlled by
/// the `MIKABITES_LOG` environment variable, e.g. `MIKABITES_LOG=debug`.
pub fn init() -> Result<PathBuf> {
    let log_dir = log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILENAME);

    let env_filter = EnvFilter::try_from_env("MIKABITES_LOG")
        .unwrap_or_else(|_| EnvFilter::new("mikabites=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::Logging {
            message: e.to_string(),
        })?;

    tracing::info!("MikaBites {} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(log_dir)
}

fn log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .ok_or(Error::NoDirectory { kind: "data" })?;
    Ok(base.join("mikabites").join("logs"))
}
