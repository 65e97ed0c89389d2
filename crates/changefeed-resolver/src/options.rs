use std::time::Duration;

use serde::Serialize;

use crate::context::ResolutionContext;
use crate::error::BindingError;
use crate::location::resolve_optional;

const DEFAULT_FEED_POLL_DELAY_MS: u64 = 5_000;
const DEFAULT_LEASE_ACQUIRE_INTERVAL_MS: u64 = 13_000;
const DEFAULT_LEASE_EXPIRATION_INTERVAL_MS: u64 = 60_000;
const DEFAULT_LEASE_RENEW_INTERVAL_MS: u64 = 17_000;

/// Minimum provisioned throughput the database service accepts for a collection.
const MIN_LEASES_COLLECTION_THROUGHPUT: u32 = 400;

/// Resolved settings for the change-feed processor and its lease store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessorOptions {
  pub lease_collection_prefix: Option<String>,
  pub create_lease_collection_if_not_exists: bool,
  pub leases_collection_throughput: Option<u32>,
  pub feed_poll_delay_ms: u64,
  pub lease_acquire_interval_ms: u64,
  pub lease_expiration_interval_ms: u64,
  pub lease_renew_interval_ms: u64,
  pub checkpoint_interval_ms: Option<u64>,
  pub checkpoint_document_count: Option<u32>,
  pub max_items_per_invocation: Option<u32>,
  pub start_from_beginning: bool,
  pub preferred_locations: Vec<String>,
}

impl Default for ProcessorOptions {
  fn default() -> Self {
    Self {
      lease_collection_prefix: None,
      create_lease_collection_if_not_exists: false,
      leases_collection_throughput: None,
      feed_poll_delay_ms: DEFAULT_FEED_POLL_DELAY_MS,
      lease_acquire_interval_ms: DEFAULT_LEASE_ACQUIRE_INTERVAL_MS,
      lease_expiration_interval_ms: DEFAULT_LEASE_EXPIRATION_INTERVAL_MS,
      lease_renew_interval_ms: DEFAULT_LEASE_RENEW_INTERVAL_MS,
      checkpoint_interval_ms: None,
      checkpoint_document_count: None,
      max_items_per_invocation: None,
      start_from_beginning: false,
      preferred_locations: Vec::new(),
    }
  }
}

impl ProcessorOptions {
  pub fn feed_poll_delay(&self) -> Duration {
    Duration::from_millis(self.feed_poll_delay_ms)
  }

  pub fn lease_acquire_interval(&self) -> Duration {
    Duration::from_millis(self.lease_acquire_interval_ms)
  }

  pub fn lease_expiration_interval(&self) -> Duration {
    Duration::from_millis(self.lease_expiration_interval_ms)
  }

  pub fn lease_renew_interval(&self) -> Duration {
    Duration::from_millis(self.lease_renew_interval_ms)
  }

  pub fn checkpoint_interval(&self) -> Option<Duration> {
    self.checkpoint_interval_ms.map(Duration::from_millis)
  }
}

/// Resolve processor options from the attribute.
///
/// Unset intervals take their defaults. A lease must be renewed before it
/// expires, so the renew interval has to be shorter than the expiration
/// interval.
pub fn resolve_options(ctx: &ResolutionContext<'_>) -> Result<ProcessorOptions, BindingError> {
  let attribute = ctx.attribute;
  let defaults = ProcessorOptions::default();

  let lease_collection_prefix = resolve_optional(
    ctx,
    "leaseCollectionPrefix",
    attribute.lease_collection_prefix.as_deref(),
  )?;

  let preferred_locations: Vec<String> = resolve_optional(
    ctx,
    "preferredLocations",
    attribute.preferred_locations.as_deref(),
  )?
  .map(|locations| {
    locations
      .split(',')
      .map(str::trim)
      .filter(|l| !l.is_empty())
      .map(str::to_string)
      .collect()
  })
  .unwrap_or_default();

  let options = ProcessorOptions {
    lease_collection_prefix,
    create_lease_collection_if_not_exists: attribute.create_lease_collection_if_not_exists,
    leases_collection_throughput: attribute.leases_collection_throughput,
    feed_poll_delay_ms: non_zero_ms("feedPollDelay", attribute.feed_poll_delay_ms)?
      .unwrap_or(defaults.feed_poll_delay_ms),
    lease_acquire_interval_ms: non_zero_ms(
      "leaseAcquireInterval",
      attribute.lease_acquire_interval_ms,
    )?
    .unwrap_or(defaults.lease_acquire_interval_ms),
    lease_expiration_interval_ms: non_zero_ms(
      "leaseExpirationInterval",
      attribute.lease_expiration_interval_ms,
    )?
    .unwrap_or(defaults.lease_expiration_interval_ms),
    lease_renew_interval_ms: non_zero_ms("leaseRenewInterval", attribute.lease_renew_interval_ms)?
      .unwrap_or(defaults.lease_renew_interval_ms),
    checkpoint_interval_ms: non_zero_ms("checkpointInterval", attribute.checkpoint_interval_ms)?,
    checkpoint_document_count: non_zero_count(
      "checkpointDocumentCount",
      attribute.checkpoint_document_count,
    )?,
    max_items_per_invocation: non_zero_count(
      "maxItemsPerInvocation",
      attribute.max_items_per_invocation,
    )?,
    start_from_beginning: attribute.start_from_beginning,
    preferred_locations,
  };

  if let Some(throughput) = options.leases_collection_throughput {
    if throughput < MIN_LEASES_COLLECTION_THROUGHPUT {
      return Err(BindingError::invalid_option(
        "leasesCollectionThroughput",
        format!(
          "must be at least {}, got {}",
          MIN_LEASES_COLLECTION_THROUGHPUT, throughput
        ),
      ));
    }
  }

  if options.lease_renew_interval_ms >= options.lease_expiration_interval_ms {
    return Err(BindingError::invalid_option(
      "leaseRenewInterval",
      format!(
        "must be shorter than leaseExpirationInterval ({}ms >= {}ms)",
        options.lease_renew_interval_ms, options.lease_expiration_interval_ms
      ),
    ));
  }

  Ok(options)
}

fn non_zero_ms(option: &str, value: Option<u64>) -> Result<Option<u64>, BindingError> {
  match value {
    Some(0) => Err(BindingError::invalid_option(option, "must be greater than 0ms")),
    other => Ok(other),
  }
}

fn non_zero_count(option: &str, value: Option<u32>) -> Result<Option<u32>, BindingError> {
  match value {
    Some(0) => Err(BindingError::invalid_option(option, "must be greater than 0")),
    other => Ok(other),
  }
}
