use super::config::AppConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber. `RUST_LOG` wins over `LOG_LEVEL` when set.
pub fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(&config.log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .with_file(config.debug)
        .with_line_number(config.debug)
        .init();
}

/// Maps a `LOG_LEVEL` value onto a tracing level directive. Unknown names fall back to `info`.
pub fn level_directive(log_level: &str) -> &'static str {
    match log_level.trim().to_uppercase().as_str() {
        "TRACE" => "trace",
        "DEBUG" => "debug",
        "WARN" | "WARNING" => "warn",
        "ERROR" | "CRITICAL" => "error",
        "OFF" => "off",
        _ => "info",
    }
}
