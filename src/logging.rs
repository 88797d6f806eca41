//! File-based logging for podtui
//!
//! Tracing output goes to a file rather than stdout, since the TUI occupies
//! the terminal. CLI mode skips this entirely and talks to stderr directly.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "podtui";

/// Initialize the logging system.
///
/// Logs are written to `<data-dir>/logs/podtui.YYYY-MM-DD.log` with daily
/// rotation. `RUST_LOG` overrides the default filter (podtui at debug,
/// everything else at warn).
pub fn init(data_dir: &Path) -> anyhow::Result<()> {
    let log_dir = data_dir.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    // Non-blocking writer so log writes never stall the event loop. The
    // guard must outlive the process; leaking it is the simplest way.
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    Box::leak(Box::new(guard));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("podtui=debug,warn"));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    tracing::info!(dir = %log_dir.display(), "logging initialized");
    Ok(())
}
