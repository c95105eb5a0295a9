//! Configuration loading.
//!
//! Configuration is merged from, in order of increasing precedence:
//! 1. Built-in defaults
//! 2. Explicit config files, in the order they were added
//! 3. `PROSECOUNT_*` environment variables
//!
//! # Supported formats
//!
//! The format of each file is picked from its extension:
//! - TOML (`.toml`, also the fallback for unknown extensions)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! Files are named explicitly by the caller; nothing is searched for.
//!
//! # Example
//! ```no_run
//! use prosecount_core::config::ConfigLoader;
//!
//! let config = ConfigLoader::new()
//!     .with_file("prosecount.toml")
//!     .load()
//!     .unwrap();
//! println!("input limit: {:?}", config.input_limit());
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "PROSECOUNT_";

/// The configuration for prosecount.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Maximum size in bytes of a file read as a counting source.
    ///
    /// Omit to use the default (5 MiB). Use `disable_input_limit` to remove
    /// the limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored and no size check is performed.
    pub disable_input_limit: bool,
}

impl Config {
    /// The effective input size limit, or `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Config files to load, lowest precedence first.
    files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a loader that reads only defaults and the environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a config file to load.
    ///
    /// Files are loaded in order, with later files taking precedence.
    /// A file that does not exist is an error when loading.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all sources.
    #[tracing::instrument(skip(self), fields(files = self.files.len()))]
    pub fn load(self) -> ConfigResult<Config> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        for file in &self.files {
            figment = Self::merge_file(figment, file);
        }

        // PROSECOUNT_MAX_INPUT_BYTES=1024, PROSECOUNT_DISABLE_INPUT_LIMIT=true
        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(input_limit = ?config.input_limit(), "configuration loaded");
        Ok(config)
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serializes tests that read or mutate `PROSECOUNT_*` variables.
    static TEST_ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn write_config(tmp: &TempDir, name: &str, body: &str) -> Utf8PathBuf {
        let path = tmp.path().join(name);
        fs::write(&path, body).unwrap();
        Utf8PathBuf::try_from(path).unwrap()
    }

    #[test]
    fn default_limit_is_five_mib() {
        let config = Config::default();
        assert_eq!(config.input_limit(), Some(DEFAULT_MAX_INPUT_BYTES));
    }

    #[test]
    fn disable_input_limit_overrides_max_bytes() {
        let config = Config {
            max_input_bytes: Some(10),
            disable_input_limit: true,
        };
        assert_eq!(config.input_limit(), None);
    }

    #[test]
    fn loads_defaults_without_files() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn toml_file_sets_limit() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "prosecount.toml", "max_input_bytes = 2048\n");

        let config = ConfigLoader::new().with_file(&path).load().unwrap();
        assert_eq!(config.input_limit(), Some(2048));
    }

    #[test]
    fn yaml_and_json_files_are_detected() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let yaml = write_config(&tmp, "prosecount.yml", "max_input_bytes: 100\n");
        let json = write_config(&tmp, "prosecount.json", r#"{"disable_input_limit": true}"#);

        let config = ConfigLoader::new().with_file(&yaml).load().unwrap();
        assert_eq!(config.max_input_bytes, Some(100));

        let config = ConfigLoader::new().with_file(&json).load().unwrap();
        assert!(config.disable_input_limit);
    }

    #[test]
    fn later_file_overrides_earlier() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let base = write_config(&tmp, "base.toml", "max_input_bytes = 10\n");
        let over = write_config(&tmp, "override.toml", "max_input_bytes = 20\n");

        let config = ConfigLoader::new()
            .with_file(&base)
            .with_file(&over)
            .load()
            .unwrap();
        assert_eq!(config.max_input_bytes, Some(20));
    }

    #[test]
    fn missing_file_is_an_error() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("absent.toml")).unwrap();

        let result = ConfigLoader::new().with_file(&path).load();
        assert!(result.is_err());
    }

    #[test]
    fn invalid_value_is_an_error() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "bad.toml", "max_input_bytes = \"lots\"\n");

        let err = ConfigLoader::new().with_file(&path).load().unwrap_err();
        assert!(err.to_string().contains("invalid configuration"));
    }

    #[test]
    fn config_deserializes_from_yaml() {
        let config: Config = serde_yaml::from_str("disable_input_limit: true\n").unwrap();
        assert!(config.disable_input_limit);
        assert!(config.max_input_bytes.is_none());
    }

    #[test]
    #[allow(unsafe_code)]
    fn env_var_overrides_file_config() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "prosecount.toml", "max_input_bytes = 10\n");

        // SAFETY: Test environment; the mutex serializes env access across tests.
        unsafe {
            std::env::set_var("PROSECOUNT_MAX_INPUT_BYTES", "4096");
        }

        let result = ConfigLoader::new().with_file(&path).load();

        // SAFETY: Cleanup after test.
        unsafe {
            std::env::remove_var("PROSECOUNT_MAX_INPUT_BYTES");
        }

        assert_eq!(result.unwrap().max_input_bytes, Some(4096));
    }
}
