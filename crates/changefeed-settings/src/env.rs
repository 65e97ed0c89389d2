use std::collections::HashMap;

use crate::source::NameResolver;

/// Snapshot of environment variables.
///
/// Taken once at construction so lookups do not race with changes to the
/// process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentSettings {
  vars: HashMap<String, String>,
}

impl EnvironmentSettings {
  /// Capture the current process environment.
  pub fn from_env() -> Self {
    Self::from_vars(std::env::vars())
  }

  /// Build from explicit variables.
  pub fn from_vars<I, K, V>(vars: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    Self {
      vars: vars
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect(),
    }
  }
}

impl NameResolver for EnvironmentSettings {
  fn resolve(&self, name: &str) -> Option<String> {
    self.vars.get(name).cloned()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_vars() {
    let env = EnvironmentSettings::from_vars([(
      "AzureWebJobsCosmosDBConnectionString",
      "AccountEndpoint=https://fromenv;AccountKey=k;",
    )]);

    assert_eq!(
      env.resolve("AzureWebJobsCosmosDBConnectionString").as_deref(),
      Some("AccountEndpoint=https://fromenv;AccountKey=k;")
    );
    assert_eq!(env.resolve("CosmosDBConnectionString"), None);
  }

  #[test]
  fn test_from_env_snapshot() {
    let env = EnvironmentSettings::from_env();
    for (key, value) in std::env::vars() {
      assert_eq!(env.resolve(&key), Some(value));
    }
  }
}
