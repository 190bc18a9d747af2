//! Structured logging for the turntable viewer.
//!
//! Provides structured, filterable console logging via the `tracing`
//! ecosystem. Integrates with the configuration system so the log level can
//! be set from `config.ron` or overridden with `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use turntable_config::Config;

/// Initialize the tracing subscriber for the viewer.
///
/// Sets up console logging with module paths, severity levels, and an uptime
/// timer. Filter precedence: the `RUST_LOG` environment variable, then the
/// config's `debug.log_level`, then `"info"`.
///
/// Calling this more than once is harmless; later calls leave the existing
/// subscriber in place.
///
/// # Examples
///
/// ```no_run
/// use turntable_config::Config;
/// use turntable_log::init_logging;
///
/// // Basic initialization
/// init_logging(None);
///
/// // With config override
/// let config = Config::default();
/// init_logging(Some(&config));
/// ```
pub fn init_logging(config: Option<&Config>) {
    // Determine the filter string
    let filter_str = match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => "info".to_string(),
    };

    // RUST_LOG wins over the config value
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    // Console layer: human-readable format with timestamps
    let console_layer = fmt::layer()
        .with_target(true) // Show module path
        .with_thread_ids(false)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime()); // Time since viewer start

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if subscriber.try_init().is_err() {
        tracing::debug!("logging already initialized; keeping existing subscriber");
    }
}

/// Create an `EnvFilter` with the default filter string.
///
/// This is useful for testing and for getting consistent default behavior.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let filter = default_env_filter();
        let filter_str = format!("{}", filter);
        assert!(filter_str.contains("info"));
    }

    #[test]
    fn test_subsystem_filter() {
        let filter = EnvFilter::new("info,turntable_camera=trace");

        let filter_str = format!("{}", filter);
        assert!(filter_str.contains("turntable_camera=trace"));
        assert!(filter_str.contains("info"));
    }

    #[test]
    fn test_env_filter_parsing() {
        // Test various RUST_LOG strings parse without error
        let valid_filters = [
            "info",
            "debug,turntable_input=trace",
            "warn,turntable_camera=debug,turntable_scene=trace",
            "error",
        ];

        for filter_str in &valid_filters {
            let result = EnvFilter::try_from(*filter_str);
            assert!(result.is_ok(), "Failed to parse filter: {}", filter_str);
        }

        // EnvFilter is forgiving and ignores invalid parts rather than
        // erroring, so weird input just needs to not panic.
        let _result = EnvFilter::try_from("weird=input=with=equals");
    }

    #[test]
    fn test_config_level_feeds_filter() {
        let mut config = Config::default();
        config.debug.log_level = "turntable_demo=debug".to_string();
        let filter = EnvFilter::new(&config.debug.log_level);
        assert!(format!("{}", filter).contains("turntable_demo=debug"));
    }

    #[test]
    fn test_repeated_init_does_not_panic() {
        init_logging(None);
        init_logging(Some(&Config::default()));
    }
}
