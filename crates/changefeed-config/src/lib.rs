//! Changefeed Config
//!
//! This crate contains the serializable declaration of a change-feed trigger
//! binding. These types represent what a user wrote on a trigger parameter
//! before any setting lookup or placeholder substitution has happened.
//!
//! Attributes can be loaded from:
//! - JSON files (via CLI with `changefeed resolve attribute.json`)
//! - Host adapters that translate their own declaration syntax
//!
//! The resolver takes these types, looks up connection strings and
//! placeholders, and produces an immutable binding descriptor.

mod attribute;
mod enums;
mod placeholder;

pub use attribute::ChangeFeedAttribute;
pub use enums::TriggerValueType;
pub use placeholder::{is_placeholder, strip_placeholder};

/// Setting name used when an attribute does not name a connection setting.
pub const DEFAULT_CONNECTION_SETTING: &str = "AzureWebJobsCosmosDBConnectionString";

/// Lease collection name used when an attribute does not name one.
pub const DEFAULT_LEASE_COLLECTION: &str = "leases";
