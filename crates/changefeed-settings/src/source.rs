use std::sync::Arc;

/// Resolves setting names to values.
///
/// Supplied by the host. Callers strip `%` from placeholders before calling.
/// Implementations must be safe to call concurrently and are not assumed to
/// return the same value twice.
pub trait NameResolver: Send + Sync {
  /// Look up a setting by name.
  fn resolve(&self, name: &str) -> Option<String>;
}

/// Fallback store for connection-string settings.
pub trait ConfigurationStore: Send + Sync {
  /// Get a connection string by key.
  fn get(&self, key: &str) -> Option<String>;
}

impl<T: NameResolver + ?Sized> NameResolver for &T {
  fn resolve(&self, name: &str) -> Option<String> {
    (**self).resolve(name)
  }
}

impl<T: NameResolver + ?Sized> NameResolver for Arc<T> {
  fn resolve(&self, name: &str) -> Option<String> {
    (**self).resolve(name)
  }
}

impl<T: NameResolver + ?Sized> NameResolver for Box<T> {
  fn resolve(&self, name: &str) -> Option<String> {
    (**self).resolve(name)
  }
}

impl<T: ConfigurationStore + ?Sized> ConfigurationStore for &T {
  fn get(&self, key: &str) -> Option<String> {
    (**self).get(key)
  }
}

impl<T: ConfigurationStore + ?Sized> ConfigurationStore for Arc<T> {
  fn get(&self, key: &str) -> Option<String> {
    (**self).get(key)
  }
}

impl<T: ConfigurationStore + ?Sized> ConfigurationStore for Box<T> {
  fn get(&self, key: &str) -> Option<String> {
    (**self).get(key)
  }
}
