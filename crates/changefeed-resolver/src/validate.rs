use tracing::warn;

use crate::error::BindingError;
use crate::location::CollectionLocation;

/// Reject a lease collection that is the monitored collection.
///
/// The processor writes checkpoints to the lease collection continuously;
/// if it were also the monitored collection the trigger would fire on its
/// own bookkeeping. Must run on fully resolved locations, since defaults
/// alone can produce the collision.
pub fn validate_locations(
  monitored: &CollectionLocation,
  lease: &CollectionLocation,
) -> Result<(), BindingError> {
  if monitored.same_collection(lease) {
    warn!(
      endpoint = %monitored.connection.service_endpoint,
      database = %monitored.database_name,
      collection = %monitored.collection_name,
      "lease collection is the monitored collection"
    );
    return Err(BindingError::LeaseCollectionConflict {
      endpoint: monitored.connection.service_endpoint.to_string(),
      database: monitored.database_name.clone(),
      collection: monitored.collection_name.clone(),
    });
  }
  Ok(())
}
