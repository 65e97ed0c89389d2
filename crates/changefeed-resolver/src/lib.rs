//! Changefeed Resolver
//!
//! Turns a [`ChangeFeedAttribute`] into an immutable
//! [`TriggerBindingDescriptor`]:
//!
//! 1. Connection strings are looked up (name resolver first, configuration
//!    store second) and parsed for both the monitored and the lease account.
//! 2. Database and collection names are placeholder-substituted, and the
//!    lease collection identity is derived from the monitored one where the
//!    attribute leaves it unset.
//! 3. Processor options are defaulted and checked.
//! 4. The lease collection is checked not to be the monitored collection.
//!
//! Resolution is a pure function of its [`ResolutionContext`]; nothing is
//! cached between calls.

mod connection;
mod context;
mod descriptor;
mod error;
mod location;
mod options;
mod provider;
mod validate;

pub use changefeed_config::{ChangeFeedAttribute, TriggerValueType};
pub use connection::resolve_connection;
pub use context::ResolutionContext;
pub use descriptor::{TriggerBindingDescriptor, create_descriptor};
pub use error::{BindingError, ErrorKind};
pub use location::{CollectionLocation, resolve_locations};
pub use options::{ProcessorOptions, resolve_options};
pub use provider::{BindingRequest, StandardBindingProvider, TriggerBindingProvider};
pub use validate::validate_locations;
