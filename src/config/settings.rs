use std::path::Path;

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::database::{GrowthPolicy, DEFAULT_CAPACITY, LOAD_THRESHOLD};

/// Environment variable prefix, e.g. `PROBEDICT_DICT__LOAD_THRESHOLD=0.5`.
pub const ENV_PREFIX: &str = "PROBEDICT";

/// Parameters of a new dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictConfig {
    /// Initial number of slots. Negative values are rejected when the
    /// dictionary is built.
    pub initial_capacity: i64,
    /// Load factor in `(0, 1]` that triggers growth.
    pub load_threshold: f64,
    pub growth_policy: GrowthPolicy,
}

/// Output format of the console log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set, e.g. `"debug"` or
    /// `"probedict=trace"`.
    pub level: String,
    pub format: LogFormat,
    pub ansi: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dict: DictConfig,
    pub logging: LoggingConfig,
}

impl Default for DictConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY as i64,
            load_threshold: LOAD_THRESHOLD,
            growth_policy: GrowthPolicy::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            ansi: true,
        }
    }
}

impl Settings {
    /// Defaults overridden by `PROBEDICT_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    /// Defaults, then the file at `path` (format taken from the extension),
    /// then the environment.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::from(path.as_ref()))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = Settings::default();

        Ok(Config::builder()
            .set_default("dict.initial_capacity", defaults.dict.initial_capacity)?
            .set_default("dict.load_threshold", defaults.dict.load_threshold)?
            .set_default("dict.growth_policy", "live-entries")?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", "compact")?
            .set_default("logging.ansi", defaults.logging.ansi)?)
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::{env, io::Write};

    use serial_test::serial;

    use super::*;

    fn clear_env() {
        for key in [
            "PROBEDICT_DICT__INITIAL_CAPACITY",
            "PROBEDICT_DICT__LOAD_THRESHOLD",
            "PROBEDICT_DICT__GROWTH_POLICY",
            "PROBEDICT_LOGGING__LEVEL",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let settings = Settings::load().unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.dict.initial_capacity, 13);
        assert_eq!(settings.dict.load_threshold, 0.67);
        assert_eq!(settings.logging.format, LogFormat::Compact);
    }

    #[test]
    #[serial]
    fn test_environment_overrides() {
        clear_env();
        env::set_var("PROBEDICT_DICT__INITIAL_CAPACITY", "31");
        env::set_var("PROBEDICT_DICT__GROWTH_POLICY", "count-tombstones");
        env::set_var("PROBEDICT_LOGGING__LEVEL", "debug");

        let settings = Settings::load().unwrap();
        clear_env();

        assert_eq!(settings.dict.initial_capacity, 31);
        assert_eq!(settings.dict.growth_policy, GrowthPolicy::CountTombstones);
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.dict.load_threshold, LOAD_THRESHOLD);
    }

    #[test]
    #[serial]
    fn test_file_then_environment() {
        clear_env();
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "[dict]\ninitial_capacity = 7\nload_threshold = 0.5\n\n[logging]\nformat = \"json\""
        )
        .unwrap();

        env::set_var("PROBEDICT_DICT__INITIAL_CAPACITY", "11");
        let settings = Settings::load_from_file(file.path()).unwrap();
        clear_env();

        assert_eq!(settings.dict.initial_capacity, 11);
        assert_eq!(settings.dict.load_threshold, 0.5);
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert!(settings.logging.ansi);
    }

    #[test]
    #[serial]
    fn test_missing_file_is_an_error() {
        clear_env();
        assert!(Settings::load_from_file("/nonexistent/probedict.toml").is_err());
    }
}
