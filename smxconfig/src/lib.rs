//! # SongMix Configuration Module
//!
//! This module provides configuration management for SongMix, including:
//! - Loading configuration from YAML files
//! - Merging with embedded default configuration
//! - Environment variable overrides
//! - Dotted-path access to configuration values
//! - Thread-safe singleton access pattern
//!
//! ## Usage
//!
//! ```no_run
//! use smxconfig::get_config;
//!
//! // Get the global configuration
//! let config = get_config();
//!
//! // Access configuration values
//! let value = config.get_value(&["lookup", "base_url"])?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Typed getters for a crate's configuration section live in that crate's
//! `config_ext` module (e.g. `smxlookup::LookupConfigExt`), not here.

use anyhow::{anyhow, Result};
use dirs::home_dir;
use lazy_static::lazy_static;
use serde_yaml::{Mapping, Value};
use std::{
    env, fs,
    path::Path,
    sync::{Arc, Mutex},
};
use tracing::info;

// Embedded default configuration
const DEFAULT_CONFIG: &str = include_str!("songmix.yaml");

lazy_static! {
    static ref CONFIG: Arc<Config> =
        Arc::new(Config::load_config("").expect("Failed to load SongMix configuration"));
}

const ENV_CONFIG_DIR: &str = "SONGMIX_CONFIG";
const ENV_PREFIX: &str = "SONGMIX_CONFIG__";

/// Name of the configuration file inside the config directory
const CONFIG_FILE_NAME: &str = "songmix.yaml";

/// Configuration manager for SongMix
///
/// Holds the merged YAML document (embedded defaults overlaid by the user's
/// `songmix.yaml`, overlaid in turn by `SONGMIX_CONFIG__*` environment
/// variables) behind a mutex, plus the paths it was loaded from.
#[derive(Debug)]
pub struct Config {
    config_dir: String,
    path: String,
    data: Mutex<Value>,
}

impl Clone for Config {
    fn clone(&self) -> Self {
        let data = self.data.lock().unwrap().clone();
        Self {
            config_dir: self.config_dir.clone(),
            path: self.path.clone(),
            data: Mutex::new(data),
        }
    }
}

impl Config {
    /// Finds a config directory by trying different locations in order
    fn find_config_dir(directory: &str) -> String {
        // 1. Try provided directory
        if !directory.is_empty() {
            return directory.to_string();
        }

        // 2. Try environment variable
        if let Ok(env_path) = env::var(ENV_CONFIG_DIR) {
            info!(env_var = ENV_CONFIG_DIR, path = %env_path, "Trying to load config from env");
            return env_path;
        }

        // 3. Try current directory
        if Path::new(".songmix").exists() {
            return ".songmix".to_string();
        }

        // 4. Try home directory
        if let Some(home) = home_dir() {
            let home_config = home.join(".songmix");
            if home_config.exists() {
                return home_config.to_string_lossy().to_string();
            }
        }

        // Default fallback
        ".songmix".to_string()
    }

    /// Validates and prepares a config directory
    fn validate_config_dir(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        if !path.is_dir() {
            return Err(anyhow!("Config path is not a directory"));
        }

        // Test write permission
        let test_file = path.join(".write_test");
        fs::write(&test_file, b"test")?;
        fs::remove_file(&test_file)?;

        // Test read permission
        fs::read_dir(path)?;

        Ok(())
    }

    /// Determines and validates the configuration directory
    ///
    /// The directory is searched in the following order:
    /// 1. The provided `directory` parameter if not empty
    /// 2. The `SONGMIX_CONFIG` environment variable
    /// 3. `.songmix` in the current directory
    /// 4. `.songmix` in the user's home directory
    ///
    /// The directory is created if it doesn't exist, and validated for
    /// read/write permissions.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created or validated
    pub fn config_dir(directory: &str) -> String {
        let dir_path = Self::find_config_dir(directory);
        let path = Path::new(&dir_path);

        Self::validate_config_dir(path).expect("Cannot validate the configuration directory");

        dir_path
    }

    /// Loads the configuration from the specified directory
    ///
    /// This method:
    /// 1. Determines the configuration directory
    /// 2. Loads the default embedded configuration
    /// 3. Merges it with the external songmix.yaml file if present
    /// 4. Applies environment variable overrides
    /// 5. Saves the merged configuration
    ///
    /// # Arguments
    ///
    /// * `directory` - The directory containing the songmix.yaml file, or
    ///   empty to use the search order above
    pub fn load_config(directory: &str) -> Result<Self> {
        let config_dir = Self::config_dir(directory);
        info!(config_dir = %config_dir, "Using config directory");

        let config_file_path = Path::new(&config_dir).join(CONFIG_FILE_NAME);
        let path = config_file_path.to_string_lossy().to_string();

        // Default embedded configuration
        let mut default_value: Value = serde_yaml::from_str(DEFAULT_CONFIG)?;

        // Try to load the external configuration file
        let yaml_data = if let Ok(data) = fs::read(&path) {
            info!(config_file = %path, "Loaded config file");
            data
        } else {
            info!(config_file = %path, "Config file not found, using default embedded config");
            DEFAULT_CONFIG.as_bytes().to_vec()
        };

        // Merge over the default config
        let external_value: Value = serde_yaml::from_slice(&yaml_data)?;
        merge_yaml(&mut default_value, &external_value);
        let mut config_value = Self::lower_keys_value(default_value);

        // Apply environment variable overrides
        Self::apply_env_overrides(&mut config_value);

        let config = Config {
            config_dir,
            path,
            data: Mutex::new(config_value),
        };

        config.save()?;
        Ok(config)
    }

    /// Saves the current configuration to the songmix.yaml file
    pub fn save(&self) -> Result<()> {
        let data = self.data.lock().unwrap();
        let yaml = serde_yaml::to_string(&*data)?;
        fs::write(&self.path, yaml)?;
        Ok(())
    }

    /// Returns the configuration directory in use
    pub fn get_config_dir(&self) -> &str {
        &self.config_dir
    }

    /// Sets a configuration value at the specified path and saves it
    ///
    /// # Arguments
    ///
    /// * `path` - Array of keys representing the path (e.g., `&["lookup", "limit"]`)
    /// * `value` - The YAML value to set
    pub fn set_value(&self, path: &[&str], value: Value) -> Result<()> {
        let mut data = self.data.lock().unwrap();
        Self::set_value_internal(&mut data, path, value)?;
        drop(data);
        self.save()?;
        Ok(())
    }

    fn set_value_internal(data: &mut Value, path: &[&str], value: Value) -> Result<()> {
        if path.is_empty() {
            *data = value;
            return Ok(());
        }
        if let Value::Mapping(map) = data {
            let key = path[0].to_lowercase();
            let key_value = Value::String(key);
            if path.len() == 1 {
                map.insert(key_value, value);
            } else {
                let entry = map
                    .entry(key_value)
                    .or_insert(Value::Mapping(Mapping::new()));
                Self::set_value_internal(entry, &path[1..], value)?;
            }
            Ok(())
        } else {
            Err(anyhow!("Current node is not a map"))
        }
    }

    /// Gets a configuration value at the specified path
    ///
    /// # Arguments
    ///
    /// * `path` - Array of keys representing the path (e.g., `&["lookup", "limit"]`)
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing the YAML value or an error if the path
    /// doesn't exist
    pub fn get_value(&self, path: &[&str]) -> Result<Value> {
        let data = self.data.lock().unwrap();
        Self::get_value_internal(&data, path)
    }

    fn get_value_internal(data: &Value, path: &[&str]) -> Result<Value> {
        let mut current = data;
        for (i, key) in path.iter().enumerate() {
            if let Value::Mapping(map) = current {
                let key = key.to_lowercase();

                if let Some(next) = map.get(&Value::String(key)) {
                    current = next;
                } else {
                    return Err(anyhow!("Path {} does not exist", path[..=i].join(".")));
                }
            } else {
                return Err(anyhow!("Path {} is not a Config", path[..i].join(".")));
            }
        }
        Ok(current.clone())
    }

    fn apply_env_overrides(config: &mut Value) {
        for (key, value) in env::vars() {
            if key.starts_with(ENV_PREFIX) {
                let key_path = key
                    .trim_start_matches(ENV_PREFIX)
                    .split("__")
                    .collect::<Vec<_>>();
                let yaml_value = Self::convert_env_value(&value);
                let _ = Self::set_value_internal(config, &key_path, yaml_value);
            }
        }
    }

    fn convert_env_value(value: &str) -> Value {
        if let Ok(parsed) = serde_yaml::from_str::<Value>(value) {
            return parsed;
        }
        Value::String(value.to_string())
    }

    fn lower_keys_value(value: Value) -> Value {
        match value {
            Value::Mapping(map) => {
                let mut new_map = Mapping::new();
                for (k, v) in map {
                    if let Value::String(s) = k {
                        let new_key = Value::String(s.to_lowercase());
                        new_map.insert(new_key, Self::lower_keys_value(v));
                    } else {
                        new_map.insert(k, Self::lower_keys_value(v));
                    }
                }
                Value::Mapping(new_map)
            }
            Value::Sequence(seq) => {
                Value::Sequence(seq.into_iter().map(Self::lower_keys_value).collect())
            }
            _ => value,
        }
    }

    /// Resolves a relative or absolute directory path and creates it if needed
    ///
    /// Relative paths are resolved against the configuration directory; this
    /// is how cache directories configured as bare names end up alongside the
    /// configuration file.
    pub fn resolve_and_create_dir(&self, dir_path: &str) -> Result<String> {
        let path = Path::new(dir_path);

        let absolute_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            Path::new(&self.config_dir).join(path)
        };

        if !absolute_path.exists() {
            fs::create_dir_all(&absolute_path)?;
            info!(directory = %absolute_path.display(), "Created directory");
        }

        Ok(absolute_path.to_string_lossy().to_string())
    }
}

/// Recursively merges `overlay` into `base`; overlay values win
fn merge_yaml(base: &mut Value, overlay: &Value) {
    if let (Value::Mapping(base_map), Value::Mapping(overlay_map)) = (&mut *base, overlay) {
        for (key, overlay_value) in overlay_map {
            if let Some(base_value) = base_map.get_mut(key) {
                merge_yaml(base_value, overlay_value);
            } else {
                base_map.insert(key.clone(), overlay_value.clone());
            }
        }
    } else {
        *base = overlay.clone();
    }
}

/// Returns the global configuration singleton
///
/// The first call loads and validates the configuration; later calls return
/// the same shared instance.
pub fn get_config() -> Arc<Config> {
    CONFIG.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn load_in_tempdir() -> (TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_config(dir.path().to_str().unwrap()).unwrap();
        (dir, config)
    }

    #[test]
    fn defaults_are_embedded() {
        let (_dir, config) = load_in_tempdir();

        let base_url = config.get_value(&["lookup", "base_url"]).unwrap();
        assert_eq!(
            base_url,
            Value::String("https://itunes.apple.com".to_string())
        );

        let ids = config.get_value(&["lookup", "artist_ids"]).unwrap();
        match ids {
            Value::Sequence(entries) => assert_eq!(entries.len(), 5),
            other => panic!("expected a sequence, got {other:?}"),
        }
    }

    #[test]
    fn missing_path_is_an_error() {
        let (_dir, config) = load_in_tempdir();
        assert!(config.get_value(&["lookup", "no_such_key"]).is_err());
    }

    #[test]
    fn set_value_roundtrips_and_persists() {
        let (dir, config) = load_in_tempdir();

        config
            .set_value(&["lookup", "limit"], Value::Number(10.into()))
            .unwrap();
        assert_eq!(
            config.get_value(&["lookup", "limit"]).unwrap(),
            Value::Number(10.into())
        );

        // A fresh load from the same directory sees the persisted value.
        let reloaded = Config::load_config(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(
            reloaded.get_value(&["lookup", "limit"]).unwrap(),
            Value::Number(10.into())
        );
    }

    #[test]
    fn partial_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "lookup:\n  limit: 9\n",
        )
        .unwrap();

        let config = Config::load_config(dir.path().to_str().unwrap()).unwrap();

        assert_eq!(
            config.get_value(&["lookup", "limit"]).unwrap(),
            Value::Number(9.into())
        );
        // Untouched keys keep their defaults.
        assert_eq!(
            config.get_value(&["lookup", "base_url"]).unwrap(),
            Value::String("https://itunes.apple.com".to_string())
        );
    }

    #[test]
    fn relative_dirs_resolve_against_the_config_dir() {
        let (dir, config) = load_in_tempdir();

        let resolved = config.resolve_and_create_dir("covers").unwrap();
        assert!(Path::new(&resolved).is_dir());
        assert!(resolved.starts_with(dir.path().to_str().unwrap()));
    }
}
