//! JSON settings file.
//!
//! ```json
//! {
//!   "Values": {
//!     "aDatabase": "myDatabase",
//!     "CosmosDBConnectionString": "AccountEndpoint=https://...;AccountKey=...;"
//!   },
//!   "ConnectionStrings": {
//!     "LeaseConnectionString": "AccountEndpoint=https://...;AccountKey=...;",
//!     "Legacy": { "ConnectionString": "AccountEndpoint=...", "ProviderName": "..." }
//!   }
//! }
//! ```
//!
//! `Values` answers name resolution; `ConnectionStrings` is the
//! configuration store consulted when the name resolver has nothing.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::SettingsError;
use crate::source::{ConfigurationStore, NameResolver};

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ConnectionStringEntry {
  Plain(String),
  Detailed {
    #[serde(rename = "ConnectionString")]
    connection_string: String,
  },
}

impl ConnectionStringEntry {
  fn value(&self) -> &str {
    match self {
      Self::Plain(value) => value,
      Self::Detailed { connection_string } => connection_string,
    }
  }
}

/// Settings loaded from a JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsFile {
  #[serde(rename = "Values", default)]
  values: HashMap<String, String>,

  #[serde(rename = "ConnectionStrings", default)]
  connection_strings: HashMap<String, ConnectionStringEntry>,
}

impl SettingsFile {
  /// Load and parse a settings file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
      path: path.to_path_buf(),
      source,
    })?;

    let settings: Self = serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
      path: path.to_path_buf(),
      source,
    })?;

    debug!(
      path = %path.display(),
      values = settings.values.len(),
      connection_strings = settings.connection_strings.len(),
      "loaded settings file"
    );

    Ok(settings)
  }

  /// Parse settings from a JSON string.
  pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(json)
  }
}

impl NameResolver for SettingsFile {
  fn resolve(&self, name: &str) -> Option<String> {
    self.values.get(name).cloned()
  }
}

impl ConfigurationStore for SettingsFile {
  fn get(&self, key: &str) -> Option<String> {
    self
      .connection_strings
      .get(key)
      .map(|entry| entry.value().to_string())
  }
}
