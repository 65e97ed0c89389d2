use tracing::trace;

use crate::source::NameResolver;

/// Chains name resolvers; the first layer with a value wins.
///
/// Layers are consulted in the order they were added, so push the
/// highest-precedence source (usually the environment) first.
#[derive(Default)]
pub struct LayeredNameResolver {
  layers: Vec<Box<dyn NameResolver>>,
}

impl LayeredNameResolver {
  pub fn new() -> Self {
    Self::default()
  }

  /// Add a lower-precedence layer, builder style.
  pub fn with(mut self, layer: impl NameResolver + 'static) -> Self {
    self.push(layer);
    self
  }

  pub fn push(&mut self, layer: impl NameResolver + 'static) {
    self.layers.push(Box::new(layer));
  }

  pub fn len(&self) -> usize {
    self.layers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.layers.is_empty()
  }
}

impl NameResolver for LayeredNameResolver {
  fn resolve(&self, name: &str) -> Option<String> {
    self.layers.iter().enumerate().find_map(|(index, layer)| {
      let value = layer.resolve(name);
      if value.is_some() {
        trace!(name, layer = index, "setting resolved");
      }
      value
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::InMemorySettings;

  #[test]
  fn test_first_layer_wins() {
    let resolver = LayeredNameResolver::new()
      .with(InMemorySettings::new().with("shared", "env"))
      .with(
        InMemorySettings::new()
          .with("shared", "file")
          .with("only_file", "file"),
      );

    assert_eq!(resolver.len(), 2);
    assert_eq!(resolver.resolve("shared"), Some("env".to_string()));
    assert_eq!(resolver.resolve("only_file"), Some("file".to_string()));
    assert_eq!(resolver.resolve("missing"), None);
  }

  #[test]
  fn test_empty_resolver() {
    let resolver = LayeredNameResolver::new();
    assert!(resolver.is_empty());
    assert_eq!(resolver.resolve("anything"), None);
  }
}
