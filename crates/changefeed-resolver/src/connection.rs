//! Connection string lookup.
//!
//! The setting name (or the default when the attribute names none) is
//! looked up through the name resolver first. Only when that yields nothing
//! is the configuration store consulted under the same key.

use changefeed_config::strip_placeholder;
use changefeed_connection::ConnectionDescriptor;
use tracing::debug;

use crate::context::ResolutionContext;
use crate::error::BindingError;

/// Resolve and parse the connection string behind a setting.
///
/// `setting` may be wrapped in `%...%`; the wrapper is stripped before
/// lookup. Empty values count as missing.
pub fn resolve_connection(
  setting: Option<&str>,
  ctx: &ResolutionContext<'_>,
) -> Result<ConnectionDescriptor, BindingError> {
  let setting = setting
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .unwrap_or(ctx.default_connection_setting);
  let key = strip_placeholder(setting);

  let value = match non_empty(ctx.name_resolver.resolve(key)) {
    Some(value) => value,
    None => {
      debug!(setting = key, "setting not in name resolver, trying configuration store");
      non_empty(ctx.configuration.get(key)).ok_or_else(|| {
        BindingError::MissingConnectionString {
          setting: key.to_string(),
        }
      })?
    }
  };

  ConnectionDescriptor::parse(&value).map_err(|source| BindingError::InvalidConnectionString {
    setting: key.to_string(),
    source,
  })
}

fn non_empty(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;
  use changefeed_config::ChangeFeedAttribute;
  use changefeed_connection::ConnectionStringError;
  use changefeed_settings::InMemorySettings;

  const DEFAULT_CONNECTION: &str = "AccountEndpoint=https://default;AccountKey=default_key;";
  const APP_CONNECTION: &str = "AccountEndpoint=https://fromappsettings;AccountKey=app_key;";
  const STORE_CONNECTION: &str = "AccountEndpoint=https://fromstore;AccountKey=store_key;";

  fn resolve(
    setting: Option<&str>,
    resolver: &InMemorySettings,
    store: &InMemorySettings,
  ) -> Result<ConnectionDescriptor, BindingError> {
    let attribute = ChangeFeedAttribute::new("aDatabase", "aCollection");
    let ctx = ResolutionContext::new(&attribute, resolver, store);
    resolve_connection(setting, &ctx)
  }

  #[test]
  fn test_default_setting_when_absent() {
    let resolver =
      InMemorySettings::new().with("AzureWebJobsCosmosDBConnectionString", DEFAULT_CONNECTION);

    let descriptor = resolve(None, &resolver, &InMemorySettings::new()).unwrap();
    assert_eq!(descriptor.service_endpoint.as_str(), "https://default/");

    let descriptor = resolve(Some(""), &resolver, &InMemorySettings::new()).unwrap();
    assert_eq!(descriptor.service_endpoint.as_str(), "https://default/");
  }

  #[test]
  fn test_explicit_setting_wins_over_default() {
    let resolver = InMemorySettings::new()
      .with("AzureWebJobsCosmosDBConnectionString", DEFAULT_CONNECTION)
      .with("CosmosDBConnectionString", APP_CONNECTION);

    let descriptor = resolve(
      Some("CosmosDBConnectionString"),
      &resolver,
      &InMemorySettings::new(),
    )
    .unwrap();
    assert_eq!(descriptor.service_endpoint.as_str(), "https://fromappsettings/");
    assert_eq!(descriptor.account_key, "app_key");
  }

  #[test]
  fn test_placeholder_setting_name_is_stripped() {
    let resolver = InMemorySettings::new().with("CosmosDBConnectionString", APP_CONNECTION);

    let descriptor = resolve(
      Some("%CosmosDBConnectionString%"),
      &resolver,
      &InMemorySettings::new(),
    )
    .unwrap();
    assert_eq!(descriptor.account_key, "app_key");
  }

  #[test]
  fn test_name_resolver_before_store() {
    let resolver = InMemorySettings::new().with("CosmosDBConnectionString", APP_CONNECTION);
    let store = InMemorySettings::new().with("CosmosDBConnectionString", STORE_CONNECTION);

    let descriptor = resolve(Some("CosmosDBConnectionString"), &resolver, &store).unwrap();
    assert_eq!(descriptor.account_key, "app_key");
  }

  #[test]
  fn test_store_fallback() {
    let resolver = InMemorySettings::new().with("CosmosDBConnectionString", "  ");
    let store = InMemorySettings::new().with("CosmosDBConnectionString", STORE_CONNECTION);

    let descriptor = resolve(Some("CosmosDBConnectionString"), &resolver, &store).unwrap();
    assert_eq!(descriptor.account_key, "store_key");
  }

  #[test]
  fn test_missing_setting() {
    let result = resolve(
      Some("NotASetting"),
      &InMemorySettings::new(),
      &InMemorySettings::new(),
    );

    let error = result.unwrap_err();
    assert!(matches!(
      &error,
      BindingError::MissingConnectionString { setting } if setting == "NotASetting"
    ));
    assert_eq!(
      error.to_string(),
      "NotASetting connection string is missing or invalid"
    );
  }

  #[test]
  fn test_unparseable_setting() {
    let resolver = InMemorySettings::new().with("CosmosDBConnectionString", "some weird string");

    let result = resolve(
      Some("CosmosDBConnectionString"),
      &resolver,
      &InMemorySettings::new(),
    );
    assert!(matches!(
      result,
      Err(BindingError::InvalidConnectionString {
        source: ConnectionStringError::MissingEndpoint,
        ..
      })
    ));
  }
}
