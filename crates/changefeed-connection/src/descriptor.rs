use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use url::Url;

use crate::error::ConnectionStringError;

const ACCOUNT_ENDPOINT: &str = "AccountEndpoint";
const ACCOUNT_KEY: &str = "AccountKey";

/// A parsed document account connection.
///
/// The account key is a secret: it is never serialized and `Debug` prints
/// it redacted.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ConnectionDescriptor {
  /// Absolute URI of the account, e.g. `https://myaccount.documents.azure.com:443/`
  pub service_endpoint: Url,

  #[serde(skip_serializing)]
  pub account_key: String,
}

impl ConnectionDescriptor {
  /// Parse a `Key=Value;Key=Value` connection string.
  ///
  /// Keys are matched case-insensitively and unknown keys are ignored. A
  /// value may itself contain `=` (account keys are base64). When a key is
  /// repeated, the last occurrence wins.
  pub fn parse(connection_string: &str) -> Result<Self, ConnectionStringError> {
    let mut endpoint = None;
    let mut key = None;

    for segment in connection_string.split(';') {
      let Some((name, value)) = segment.split_once('=') else {
        continue;
      };
      let value = value.trim();
      match name.trim() {
        n if n.eq_ignore_ascii_case(ACCOUNT_ENDPOINT) => endpoint = Some(value),
        n if n.eq_ignore_ascii_case(ACCOUNT_KEY) => key = Some(value),
        _ => {}
      }
    }

    let endpoint = endpoint
      .filter(|v| !v.is_empty())
      .ok_or(ConnectionStringError::MissingEndpoint)?;
    let account_key = key
      .filter(|v| !v.is_empty())
      .ok_or(ConnectionStringError::MissingKey)?;

    let service_endpoint =
      Url::parse(endpoint).map_err(|e| ConnectionStringError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
      })?;

    if !service_endpoint.has_host() {
      return Err(ConnectionStringError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        message: "endpoint has no host".to_string(),
      });
    }

    Ok(Self {
      service_endpoint,
      account_key: account_key.to_string(),
    })
  }
}

impl FromStr for ConnectionDescriptor {
  type Err = ConnectionStringError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl fmt::Debug for ConnectionDescriptor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ConnectionDescriptor")
      .field("service_endpoint", &self.service_endpoint.as_str())
      .field("account_key", &"<redacted>")
      .finish()
  }
}
