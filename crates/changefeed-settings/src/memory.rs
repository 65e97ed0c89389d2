use std::collections::HashMap;

use crate::source::{ConfigurationStore, NameResolver};

/// Map-backed settings.
///
/// Serves as both a name resolver and a configuration store. Suitable for
/// embedding fixed settings or testing.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettings {
  values: HashMap<String, String>,
}

impl InMemorySettings {
  pub fn new() -> Self {
    Self::default()
  }

  /// Add a setting, builder style.
  pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.insert(key, value);
    self
  }

  pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
    self.values.insert(key.into(), value.into());
  }

  pub fn remove(&mut self, key: &str) -> Option<String> {
    self.values.remove(key)
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InMemorySettings {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self {
      values: iter
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect(),
    }
  }
}

impl NameResolver for InMemorySettings {
  fn resolve(&self, name: &str) -> Option<String> {
    self.values.get(name).cloned()
  }
}

impl ConfigurationStore for InMemorySettings {
  fn get(&self, key: &str) -> Option<String> {
    self.values.get(key).cloned()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_in_memory_settings() {
    let mut settings = InMemorySettings::new().with("aDatabase", "myDatabase");

    assert_eq!(settings.resolve("aDatabase"), Some("myDatabase".to_string()));
    assert_eq!(settings.resolve("missing"), None);

    settings.insert("aDatabase", "updated");
    assert_eq!(
      ConfigurationStore::get(&settings, "aDatabase"),
      Some("updated".to_string())
    );

    settings.remove("aDatabase");
    assert_eq!(settings.resolve("aDatabase"), None);
  }

  #[test]
  fn test_from_iterator() {
    let settings: InMemorySettings = [("a", "1"), ("b", "2")].into_iter().collect();
    assert_eq!(settings.resolve("b"), Some("2".to_string()));
  }
}
