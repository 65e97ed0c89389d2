//! Changefeed Connection
//!
//! Parses document account connection strings of the form
//! `AccountEndpoint=<uri>;AccountKey=<key>;` into a [`ConnectionDescriptor`].

mod descriptor;
mod error;

pub use descriptor::ConnectionDescriptor;
pub use error::ConnectionStringError;
