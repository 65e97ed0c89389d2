use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A structured document from the monitored collection.
///
/// `id` is the document's identity; every other property is kept as-is.
/// Serializes flat, with `id` alongside the other properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
  pub id: String,

  #[serde(flatten)]
  pub properties: serde_json::Map<String, serde_json::Value>,
}

impl Document {
  /// Create a document with no properties besides its id.
  pub fn new(id: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      properties: serde_json::Map::new(),
    }
  }

  pub fn get(&self, property: &str) -> Option<&serde_json::Value> {
    self.properties.get(property)
  }
}

/// Ordered batch of documents delivered in one invocation.
///
/// Shared rather than copied when a payload is already a document list.
pub type DocumentList = Arc<Vec<Document>>;

/// Payload delivered to a trigger invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerPayload {
  /// No payload.
  Null,
  /// Documents already in their internal form.
  Documents(DocumentList),
  /// JSON text, expected to be an array of documents.
  Text(String),
  /// Any other value.
  Value(serde_json::Value),
}

impl From<DocumentList> for TriggerPayload {
  fn from(documents: DocumentList) -> Self {
    Self::Documents(documents)
  }
}

impl From<String> for TriggerPayload {
  fn from(text: String) -> Self {
    Self::Text(text)
  }
}

impl From<&str> for TriggerPayload {
  fn from(text: &str) -> Self {
    Self::Text(text.to_string())
  }
}

impl From<serde_json::Value> for TriggerPayload {
  fn from(value: serde_json::Value) -> Self {
    match value {
      serde_json::Value::Null => Self::Null,
      serde_json::Value::String(text) => Self::Text(text),
      other => Self::Value(other),
    }
  }
}

impl<T: Into<TriggerPayload>> From<Option<T>> for TriggerPayload {
  fn from(value: Option<T>) -> Self {
    value.map_or(Self::Null, Into::into)
  }
}

/// Value handed to the trigger function, shaped by its declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerValue {
  Documents(DocumentList),
  Array(Vec<serde_json::Value>),
}

impl TriggerValue {
  pub fn len(&self) -> usize {
    match self {
      Self::Documents(documents) => documents.len(),
      Self::Array(items) => items.len(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Render as a JSON value regardless of shape.
  pub fn to_json(&self) -> serde_json::Value {
    match self {
      Self::Documents(documents) => serde_json::Value::Array(
        documents
          .iter()
          .map(|d| serde_json::to_value(d).unwrap_or(serde_json::Value::Null))
          .collect(),
      ),
      Self::Array(items) => serde_json::Value::Array(items.clone()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_document_serializes_flat() {
    let mut document = Document::new("123");
    document
      .properties
      .insert("name".to_string(), json!("widget"));

    let value = serde_json::to_value(&document).unwrap();
    assert_eq!(value, json!({ "id": "123", "name": "widget" }));
  }

  #[test]
  fn test_document_requires_string_id() {
    assert!(serde_json::from_value::<Document>(json!({ "name": "widget" })).is_err());
    assert!(serde_json::from_value::<Document>(json!({ "id": 123 })).is_err());

    let document: Document = serde_json::from_value(json!({ "id": "1", "n": 2 })).unwrap();
    assert_eq!(document.get("n"), Some(&json!(2)));
  }

  #[test]
  fn test_payload_from_json_value() {
    assert_eq!(TriggerPayload::from(serde_json::Value::Null), TriggerPayload::Null);
    assert_eq!(
      TriggerPayload::from(json!("text")),
      TriggerPayload::Text("text".to_string())
    );
    assert_eq!(
      TriggerPayload::from(json!(42)),
      TriggerPayload::Value(json!(42))
    );
    assert_eq!(TriggerPayload::from(None::<String>), TriggerPayload::Null);
  }
}
