use changefeed_config::{DEFAULT_LEASE_COLLECTION, is_placeholder, strip_placeholder};
use changefeed_connection::ConnectionDescriptor;
use serde::Serialize;
use tracing::debug;

use crate::connection::resolve_connection;
use crate::context::ResolutionContext;
use crate::error::BindingError;

/// One addressable collection: account connection plus database and
/// collection names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CollectionLocation {
  pub connection: ConnectionDescriptor,
  pub database_name: String,
  pub collection_name: String,
}

impl CollectionLocation {
  /// Whether both locations address the same physical collection.
  ///
  /// Compares endpoint, database and collection. The account key plays no
  /// part: two keys for one account still reach the same collection.
  pub fn same_collection(&self, other: &CollectionLocation) -> bool {
    self.connection.service_endpoint == other.connection.service_endpoint
      && self.database_name == other.database_name
      && self.collection_name == other.collection_name
  }
}

/// Resolve the monitored and lease locations for an attribute.
///
/// Returns `(monitored, lease)`. Lease fields the attribute leaves unset are
/// derived from the monitored collection: same connection setting, same
/// database, and a collection named `leases`.
pub fn resolve_locations(
  ctx: &ResolutionContext<'_>,
) -> Result<(CollectionLocation, CollectionLocation), BindingError> {
  let attribute = ctx.attribute;

  let monitored_setting = non_blank(attribute.connection_string_setting.as_deref());
  let monitored_connection = resolve_connection(monitored_setting, ctx)?;
  let database_name = resolve_required(ctx, "databaseName", &attribute.database_name)?;
  let collection_name = resolve_required(ctx, "collectionName", &attribute.collection_name)?;

  let lease_setting =
    non_blank(attribute.lease_connection_string_setting.as_deref()).or(monitored_setting);
  let lease_connection = resolve_connection(lease_setting, ctx)?;

  let lease_database_name =
    match resolve_optional(ctx, "leaseDatabaseName", attribute.lease_database_name.as_deref())? {
      Some(name) => name,
      None => database_name.clone(),
    };
  let lease_collection_name =
    resolve_optional(ctx, "leaseCollectionName", attribute.lease_collection_name.as_deref())?
      .unwrap_or_else(|| DEFAULT_LEASE_COLLECTION.to_string());

  debug!(
    database = %database_name,
    collection = %collection_name,
    lease_database = %lease_database_name,
    lease_collection = %lease_collection_name,
    "resolved collection locations"
  );

  Ok((
    CollectionLocation {
      connection: monitored_connection,
      database_name,
      collection_name,
    },
    CollectionLocation {
      connection: lease_connection,
      database_name: lease_database_name,
      collection_name: lease_collection_name,
    },
  ))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
  value.filter(|v| !v.trim().is_empty())
}

/// Substitute a `%name%` placeholder through the name resolver.
///
/// Literal values pass through unchanged.
pub(crate) fn resolve_value(
  ctx: &ResolutionContext<'_>,
  property: &str,
  raw: &str,
) -> Result<String, BindingError> {
  if !is_placeholder(raw) {
    return Ok(raw.to_string());
  }

  let setting = strip_placeholder(raw);
  ctx
    .name_resolver
    .resolve(setting)
    .ok_or_else(|| BindingError::UnresolvedPlaceholder {
      property: property.to_string(),
      setting: setting.to_string(),
    })
}

fn resolve_required(
  ctx: &ResolutionContext<'_>,
  property: &str,
  raw: &str,
) -> Result<String, BindingError> {
  let value = resolve_value(ctx, property, raw)?;
  if value.trim().is_empty() {
    return Err(BindingError::EmptyProperty {
      property: property.to_string(),
    });
  }
  Ok(value)
}

/// Unset and empty fields both mean "use the default".
pub(crate) fn resolve_optional(
  ctx: &ResolutionContext<'_>,
  property: &str,
  raw: Option<&str>,
) -> Result<Option<String>, BindingError> {
  match non_blank(raw) {
    Some(raw) => {
      let value = resolve_value(ctx, property, raw)?;
      Ok(Some(value).filter(|v| !v.trim().is_empty()))
    }
    None => Ok(None),
  }
}
