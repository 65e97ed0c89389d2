//! Changefeed Settings
//!
//! The two lookups a binding resolution depends on:
//! - [`NameResolver`] turns setting names (including the inside of `%name%`
//!   placeholders) into values.
//! - [`ConfigurationStore`] is the fallback for connection-string settings
//!   the name resolver does not know.
//!
//! Sources provided here: in-memory maps, a snapshot of the process
//! environment, and a JSON settings file with `Values` and
//! `ConnectionStrings` sections.

mod env;
mod error;
mod file;
mod layered;
mod memory;
mod source;

pub use env::EnvironmentSettings;
pub use error::SettingsError;
pub use file::SettingsFile;
pub use layered::LayeredNameResolver;
pub use memory::InMemorySettings;
pub use source::{ConfigurationStore, NameResolver};
