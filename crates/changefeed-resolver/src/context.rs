use changefeed_config::{ChangeFeedAttribute, DEFAULT_CONNECTION_SETTING};
use changefeed_settings::{ConfigurationStore, NameResolver};

/// Everything a single resolution reads.
///
/// Borrowed for the duration of one resolution and then dropped. Two
/// contexts never share mutable state.
#[derive(Clone, Copy)]
pub struct ResolutionContext<'a> {
  pub attribute: &'a ChangeFeedAttribute,
  pub name_resolver: &'a dyn NameResolver,
  pub configuration: &'a dyn ConfigurationStore,
  /// Setting used when the attribute names no connection setting.
  pub default_connection_setting: &'a str,
}

impl<'a> ResolutionContext<'a> {
  pub fn new(
    attribute: &'a ChangeFeedAttribute,
    name_resolver: &'a dyn NameResolver,
    configuration: &'a dyn ConfigurationStore,
  ) -> Self {
    Self {
      attribute,
      name_resolver,
      configuration,
      default_connection_setting: DEFAULT_CONNECTION_SETTING,
    }
  }

  pub fn with_default_connection_setting(mut self, setting: &'a str) -> Self {
    self.default_connection_setting = setting;
    self
  }
}
