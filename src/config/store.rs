//! Global configuration store
//!
//! This module handles locating the ee configuration file, loading its
//! flat key-value contents, and persisting mutations back to disk.

use crate::error::{EeError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tabled::Tabled;
use tempfile::NamedTempFile;
use tracing::debug;

/// Installation root used when no config path override is given
pub const DEFAULT_ROOT_DIR: &str = "/opt/ee";

/// Ordered mapping of configuration keys to their scalar values
pub type ConfigMap = IndexMap<String, String>;

/// A single key-value pair, synthesized for listing output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct ConfigEntry {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

/// Default config file location under the installation root
pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT_DIR)
        .join("config")
        .join("config.yml")
}

/// Resolve the config file path from an optional override.
///
/// The override comes from the `--config` flag or the `EE_CONFIG_PATH`
/// environment variable, read once by the CLI bootstrap. An absent or
/// empty override falls back to the default location.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> PathBuf {
    match override_path {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => default_config_path(),
    }
}

/// Store for the flat key-value configuration file.
///
/// Every operation is a single load -> (mutate) -> rewrite transaction;
/// the file on disk is the only source of truth between invocations.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and parse the config file.
    ///
    /// A missing or blank file is an empty configuration, not an error.
    pub fn load(&self) -> Result<ConfigMap> {
        if !self.path.exists() {
            debug!("config file {} does not exist", self.path.display());
            return Ok(ConfigMap::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(ConfigMap::new());
        }

        let raw: IndexMap<String, serde_yaml::Value> = serde_yaml::from_str(&contents)?;

        let mut map = ConfigMap::with_capacity(raw.len());
        for (key, value) in raw {
            let value = scalar_to_string(&key, &value)?;
            map.insert(key, value);
        }

        debug!(
            "loaded {} config entries from {}",
            map.len(),
            self.path.display()
        );
        Ok(map)
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<String> {
        let map = self.load()?;
        map.get(key)
            .cloned()
            .ok_or_else(|| EeError::key_not_found(key))
    }

    /// Set `key` to `value`, inserting or overwriting.
    ///
    /// An overwrite keeps the entry's original position; a new key is
    /// appended at the end of the file.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.load()?;
        map.insert(key.to_string(), value.to_string());
        self.write(&map)
    }

    /// Remove the entry stored under `key`.
    pub fn unset(&self, key: &str) -> Result<()> {
        let mut map = self.load()?;
        if map.shift_remove(key).is_none() {
            return Err(EeError::key_not_found(key));
        }
        self.write(&map)
    }

    /// All entries in file order, for listing output.
    pub fn entries(&self) -> Result<Vec<ConfigEntry>> {
        let map = self.load()?;
        Ok(map
            .into_iter()
            .map(|(key, value)| ConfigEntry { key, value })
            .collect())
    }

    /// Serialize the full map and replace the config file atomically.
    ///
    /// The contents are written to a temporary file in the same directory
    /// and renamed over the target, so a failed write never truncates the
    /// existing file.
    fn write(&self, map: &ConfigMap) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent)?;

        let contents =
            serde_yaml::to_string(map).map_err(|e| EeError::serialization(e.to_string()))?;

        let mut tmp = NamedTempFile::new_in(&parent)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!(
            "wrote {} config entries to {}",
            map.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Render a YAML scalar to the string form the store exposes.
///
/// Values pass through unchanged; numeric and boolean scalars keep their
/// source representation and are never coerced. Nested structures are not
/// supported by the config surface.
fn scalar_to_string(key: &str, value: &serde_yaml::Value) -> Result<String> {
    use serde_yaml::Value;

    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => Err(EeError::config(format!(
            "config value for key '{key}' is not a scalar"
        ))),
    }
}
