//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "info";

/// Initializes the global tracing subscriber.
///
/// Sets up a registry with:
/// 1. An `EnvFilter` built from the configured trace level
/// 2. A `fmt` layer writing human-readable lines to stderr
///
/// # Parameters
///
/// * `config` - Configuration containing the `trace_level` option
///
/// # Initialization Behavior
///
/// - Invalid filter directives fall back to `"info"`
/// - Idempotent: only the first successful call installs a subscriber, later
///   calls (or a subscriber installed by the host) are left untouched
///
/// # Example
///
/// ```rust
/// use picklist::observability::init_tracing;
/// use picklist::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let filter = build_filter(config.trace_level.as_deref());

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true));

    let _ = subscriber.try_init();
}

fn build_filter(level: Option<&str>) -> EnvFilter {
    let level = level.unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_uses_configured_level() {
        let filter = build_filter(Some("picklist=trace"));
        assert!(filter.to_string().contains("picklist=trace"));
    }

    #[test]
    fn filter_defaults_to_info() {
        assert!(build_filter(None).to_string().contains("info"));
    }

    #[test]
    fn repeated_initialization_is_harmless() {
        let config = Config::default();
        init_tracing(&config);
        init_tracing(&config);
        tracing::debug!("still running");
    }
}
