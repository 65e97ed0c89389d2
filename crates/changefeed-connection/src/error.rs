use thiserror::Error;

/// Errors that can occur while parsing a connection string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionStringError {
  /// No `AccountEndpoint` entry, or an empty one.
  #[error("connection string has no AccountEndpoint")]
  MissingEndpoint,

  /// No `AccountKey` entry, or an empty one.
  #[error("connection string has no AccountKey")]
  MissingKey,

  /// `AccountEndpoint` is not an absolute URI with a host.
  #[error("invalid AccountEndpoint '{endpoint}': {message}")]
  InvalidEndpoint { endpoint: String, message: String },
}
