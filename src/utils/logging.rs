//! Logging configuration and setup
//!
//! Initializes tracing output (stdout plus a daily-rotated file) and provides
//! structured audit helpers for authentication and admin activity.

use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// The returned guard must be held for the lifetime of the process, dropping
/// it stops the background log writer.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "techfest.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log authentication attempts with structured data
pub fn log_auth_event(subject: &str, action: &str, success: bool) {
    if success {
        info!(subject = subject, action = action, "Authentication event: success");
    } else {
        warn!(subject = subject, action = action, "Authentication event: failure");
    }
}

/// Log admin actions against registration data
pub fn log_admin_action(admin_id: &str, action: &str, target: Option<&str>) {
    warn!(
        admin_id = admin_id,
        action = action,
        target = target,
        "Admin action performed"
    );
}
