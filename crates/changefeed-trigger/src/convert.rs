//! Payload conversion.
//!
//! Conversion failures are expected at runtime (a malformed payload is not a
//! configuration defect), so nothing here returns an error: failure is
//! `None`.
//!
//! # Flow
//! 1. [`try_convert`]: payload → [`DocumentList`]
//! 2. [`bind_value`]: [`DocumentList`] → [`TriggerValue`] for the declared
//!    [`TriggerValueType`]

use std::sync::Arc;

use changefeed_config::TriggerValueType;
use tracing::debug;

use crate::types::{Document, DocumentList, TriggerPayload, TriggerValue};

/// Convert a payload into a document list.
///
/// - `Null` and arbitrary values fail.
/// - A document list is returned as-is (same allocation).
/// - Text is parsed as a JSON array of objects, each with a string `id`.
pub fn try_convert(payload: &TriggerPayload) -> Option<DocumentList> {
  match payload {
    TriggerPayload::Null => None,
    TriggerPayload::Documents(documents) => Some(Arc::clone(documents)),
    TriggerPayload::Text(text) => match serde_json::from_str::<Vec<Document>>(text) {
      Ok(documents) => Some(Arc::new(documents)),
      Err(e) => {
        debug!(error = %e, "payload text is not a document array");
        None
      }
    },
    TriggerPayload::Value(_) => None,
  }
}

/// Shape a document list for the trigger function's declared type.
pub fn bind_value(value_type: TriggerValueType, documents: DocumentList) -> TriggerValue {
  match value_type {
    TriggerValueType::DocumentList => TriggerValue::Documents(documents),
    TriggerValueType::GenericArray => TriggerValue::Array(
      documents
        .iter()
        .filter_map(|document| serde_json::to_value(document).ok())
        .collect(),
    ),
  }
}

/// Render documents back to JSON text.
pub fn to_json_string(documents: &[Document]) -> Option<String> {
  serde_json::to_string(documents).ok()
}
