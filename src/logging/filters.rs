use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// `RUST_LOG` wins when set; otherwise the configured directive, falling
/// back to `info` if that directive does not parse.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    match EnvFilter::try_from_default_env() {
        Ok(env_filter) => env_filter,
        Err(_) => match EnvFilter::try_new(&config.level) {
            Ok(filter) => filter,
            Err(e) => {
                eprintln!(
                    "Invalid log filter directive '{}': {}; falling back to 'info'",
                    config.level, e
                );
                EnvFilter::new("info")
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::*;

    fn config_with_level(level: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            ..LoggingConfig::default()
        }
    }

    #[test]
    #[serial]
    fn test_configured_directive_is_used() {
        env::remove_var("RUST_LOG");
        let filter = build_filter(&config_with_level("probedict=trace"));
        assert_eq!(filter.to_string(), "probedict=trace");
    }

    #[test]
    #[serial]
    fn test_invalid_directive_falls_back_to_info() {
        env::remove_var("RUST_LOG");
        let filter = build_filter(&config_with_level("probedict=verbose"));
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    #[serial]
    fn test_rust_log_overrides_config() {
        env::set_var("RUST_LOG", "warn");
        let filter = build_filter(&config_with_level("debug"));
        env::remove_var("RUST_LOG");
        assert_eq!(filter.to_string(), "warn");
    }
}
