use serde::{Deserialize, Serialize};

/// Declaration of a change-feed trigger on a document collection.
///
/// Any string field may be a `%name%` placeholder. Optional fields fall back
/// to the monitored collection's settings, or to built-in defaults, during
/// resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeFeedAttribute {
  /// Database holding the monitored collection.
  pub database_name: String,

  /// Collection whose changes trigger the function.
  pub collection_name: String,

  /// Setting holding the monitored account's connection string.
  /// If not specified, the default connection setting is used.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub connection_string_setting: Option<String>,

  /// Setting holding the lease account's connection string.
  /// If not specified, the monitored collection's setting is reused.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub lease_connection_string_setting: Option<String>,

  /// If not specified, the monitored database is used.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub lease_database_name: Option<String>,

  /// If not specified, `leases` is used.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub lease_collection_name: Option<String>,

  /// Prefix for lease documents, so several triggers can share one lease collection.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub lease_collection_prefix: Option<String>,

  #[serde(default)]
  pub create_lease_collection_if_not_exists: bool,

  /// Throughput to provision when the lease collection is created.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub leases_collection_throughput: Option<u32>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub feed_poll_delay_ms: Option<u64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub lease_acquire_interval_ms: Option<u64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub lease_expiration_interval_ms: Option<u64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub lease_renew_interval_ms: Option<u64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub checkpoint_interval_ms: Option<u64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub checkpoint_document_count: Option<u32>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub max_items_per_invocation: Option<u32>,

  /// Read the change feed from the start of the collection's history
  /// instead of from now.
  #[serde(default)]
  pub start_from_beginning: bool,

  /// Comma-separated list of preferred regions, e.g. "East US,West US".
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub preferred_locations: Option<String>,
}

impl ChangeFeedAttribute {
  /// Create an attribute for a collection with every optional field unset.
  pub fn new(database_name: impl Into<String>, collection_name: impl Into<String>) -> Self {
    Self {
      database_name: database_name.into(),
      collection_name: collection_name.into(),
      ..Default::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_deserialize_minimal() {
    let json = r#"{ "databaseName": "aDatabase", "collectionName": "aCollection" }"#;
    let attribute: ChangeFeedAttribute = serde_json::from_str(json).unwrap();

    assert_eq!(attribute, ChangeFeedAttribute::new("aDatabase", "aCollection"));
    assert!(attribute.connection_string_setting.is_none());
    assert!(!attribute.start_from_beginning);
  }

  #[test]
  fn test_deserialize_lease_overrides() {
    let json = r#"{
      "databaseName": "%aDatabase%",
      "collectionName": "orders",
      "connectionStringSetting": "CosmosDBConnectionString",
      "leaseConnectionStringSetting": "LeaseConnectionString",
      "leaseDatabaseName": "leaseDb",
      "leaseCollectionName": "orderLeases",
      "feedPollDelayMs": 1000,
      "startFromBeginning": true
    }"#;
    let attribute: ChangeFeedAttribute = serde_json::from_str(json).unwrap();

    assert_eq!(attribute.database_name, "%aDatabase%");
    assert_eq!(
      attribute.lease_connection_string_setting.as_deref(),
      Some("LeaseConnectionString")
    );
    assert_eq!(attribute.lease_collection_name.as_deref(), Some("orderLeases"));
    assert_eq!(attribute.feed_poll_delay_ms, Some(1000));
    assert!(attribute.start_from_beginning);
  }

  #[test]
  fn test_serialize_skips_unset() {
    let attribute = ChangeFeedAttribute::new("db", "coll");
    let value = serde_json::to_value(&attribute).unwrap();

    assert_eq!(value["databaseName"], "db");
    assert!(value.get("leaseCollectionName").is_none());
  }
}
