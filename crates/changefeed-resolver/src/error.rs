use std::fmt;

use changefeed_connection::ConnectionStringError;
use thiserror::Error;

/// Broad category of a binding failure.
///
/// Neither kind is retryable: both stop the trigger from registering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  /// A setting is missing, unparseable, or out of range.
  Configuration,
  /// The resolved settings describe a binding that would corrupt itself.
  InvalidOperation,
}

impl fmt::Display for ErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Configuration => f.write_str("configuration error"),
      Self::InvalidOperation => f.write_str("invalid operation"),
    }
  }
}

/// Errors that can occur while creating a trigger binding.
#[derive(Debug, Error)]
pub enum BindingError {
  /// Neither the name resolver nor the configuration store has the setting.
  #[error("{setting} connection string is missing or invalid")]
  MissingConnectionString { setting: String },

  /// The setting exists but does not parse.
  #[error("{setting} connection string is missing or invalid")]
  InvalidConnectionString {
    setting: String,
    #[source]
    source: ConnectionStringError,
  },

  /// A `%name%` placeholder has no value.
  #[error("unable to resolve app setting '{setting}' for property '{property}'")]
  UnresolvedPlaceholder { property: String, setting: String },

  /// A required property is empty after resolution.
  #[error("property '{property}' must not be empty")]
  EmptyProperty { property: String },

  /// A processor option is out of range.
  #[error("invalid value for '{option}': {message}")]
  InvalidOption { option: String, message: String },

  /// The lease collection resolved to the monitored collection.
  #[error(
    "the monitored collection cannot be the same as the collection storing the leases \
     (endpoint '{endpoint}', database '{database}', collection '{collection}')"
  )]
  LeaseCollectionConflict {
    endpoint: String,
    database: String,
    collection: String,
  },
}

impl BindingError {
  /// Create an invalid option error.
  pub fn invalid_option(option: impl Into<String>, message: impl Into<String>) -> Self {
    Self::InvalidOption {
      option: option.into(),
      message: message.into(),
    }
  }

  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::LeaseCollectionConflict { .. } => ErrorKind::InvalidOperation,
      _ => ErrorKind::Configuration,
    }
  }

  /// Setting name the failure is about, when there is one.
  pub fn setting(&self) -> Option<&str> {
    match self {
      Self::MissingConnectionString { setting }
      | Self::InvalidConnectionString { setting, .. }
      | Self::UnresolvedPlaceholder { setting, .. } => Some(setting.as_str()),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_connection_messages() {
    let missing = BindingError::MissingConnectionString {
      setting: "CosmosDBConnectionString".to_string(),
    };
    assert_eq!(
      missing.to_string(),
      "CosmosDBConnectionString connection string is missing or invalid"
    );
    assert_eq!(missing.kind(), ErrorKind::Configuration);
    assert_eq!(missing.setting(), Some("CosmosDBConnectionString"));

    let invalid = BindingError::InvalidConnectionString {
      setting: "CosmosDBConnectionString".to_string(),
      source: ConnectionStringError::MissingKey,
    };
    assert_eq!(invalid.to_string(), missing.to_string());
    assert!(std::error::Error::source(&invalid).is_some());
  }

  #[test]
  fn test_conflict_kind() {
    let error = BindingError::LeaseCollectionConflict {
      endpoint: "https://someuri/".to_string(),
      database: "aDatabase".to_string(),
      collection: "leases".to_string(),
    };
    assert_eq!(error.kind(), ErrorKind::InvalidOperation);
    assert_eq!(error.setting(), None);
    assert!(error.to_string().contains("'leases'"));
  }
}
