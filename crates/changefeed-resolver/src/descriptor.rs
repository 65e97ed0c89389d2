use changefeed_config::TriggerValueType;
use serde::Serialize;

use crate::context::ResolutionContext;
use crate::error::BindingError;
use crate::location::{CollectionLocation, resolve_locations};
use crate::options::{ProcessorOptions, resolve_options};
use crate::validate::validate_locations;

/// Fully resolved change-feed trigger binding.
///
/// Created once per bound parameter and never modified. Owns both
/// locations by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerBindingDescriptor {
  monitored: CollectionLocation,
  lease: CollectionLocation,
  value_type: TriggerValueType,
  options: ProcessorOptions,
}

impl TriggerBindingDescriptor {
  /// The collection whose changes fire the trigger.
  pub fn monitored(&self) -> &CollectionLocation {
    &self.monitored
  }

  /// The collection holding checkpoints and ownership leases.
  pub fn lease(&self) -> &CollectionLocation {
    &self.lease
  }

  /// Shape of the value the trigger function receives.
  pub fn value_type(&self) -> TriggerValueType {
    self.value_type
  }

  pub fn options(&self) -> &ProcessorOptions {
    &self.options
  }
}

/// Resolve, validate, and assemble a binding descriptor.
///
/// Errors from resolution and validation are returned as-is. Nothing is
/// returned unless every step succeeds.
pub fn create_descriptor(
  ctx: &ResolutionContext<'_>,
  value_type: TriggerValueType,
) -> Result<TriggerBindingDescriptor, BindingError> {
  let (monitored, lease) = resolve_locations(ctx)?;
  let options = resolve_options(ctx)?;
  validate_locations(&monitored, &lease)?;

  Ok(TriggerBindingDescriptor {
    monitored,
    lease,
    value_type,
    options,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use changefeed_config::ChangeFeedAttribute;
  use changefeed_settings::InMemorySettings;

  fn settings() -> InMemorySettings {
    InMemorySettings::new().with(
      "AzureWebJobsCosmosDBConnectionString",
      "AccountEndpoint=https://someuri;AccountKey=some_key;",
    )
  }

  #[test]
  fn test_create_descriptor() {
    let attribute = ChangeFeedAttribute::new("aDatabase", "aCollection");
    let resolver = settings();
    let store = InMemorySettings::new();
    let ctx = ResolutionContext::new(&attribute, &resolver, &store);

    let descriptor = create_descriptor(&ctx, TriggerValueType::GenericArray).unwrap();

    assert_eq!(descriptor.monitored().collection_name, "aCollection");
    assert_eq!(descriptor.lease().collection_name, "leases");
    assert_eq!(descriptor.value_type(), TriggerValueType::GenericArray);
    assert_eq!(descriptor.options(), &ProcessorOptions::default());
  }

  #[test]
  fn test_create_descriptor_is_idempotent() {
    let attribute = ChangeFeedAttribute::new("aDatabase", "aCollection");
    let resolver = settings();
    let store = InMemorySettings::new();
    let ctx = ResolutionContext::new(&attribute, &resolver, &store);

    let first = create_descriptor(&ctx, TriggerValueType::DocumentList).unwrap();
    let second = create_descriptor(&ctx, TriggerValueType::DocumentList).unwrap();
    assert_eq!(first, second);
  }

  #[test]
  fn test_serialize_omits_account_keys() {
    let attribute = ChangeFeedAttribute::new("aDatabase", "aCollection");
    let resolver = settings();
    let store = InMemorySettings::new();
    let ctx = ResolutionContext::new(&attribute, &resolver, &store);

    let descriptor = create_descriptor(&ctx, TriggerValueType::DocumentList).unwrap();
    let json = serde_json::to_string(&descriptor).unwrap();

    assert!(json.contains("https://someuri/"));
    assert!(json.contains("\"value_type\":\"document_list\""));
    assert!(!json.contains("some_key"));
  }
}
