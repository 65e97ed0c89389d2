use serde::{Deserialize, Serialize};

/// Shape of the value handed to the trigger function.
///
/// Decided once when the binding is created from the declared parameter
/// type, so conversion at invocation time never inspects types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerValueType {
  /// The parameter takes the document list directly.
  #[default]
  DocumentList,
  /// The parameter takes a generic JSON array of objects.
  GenericArray,
}

impl TriggerValueType {
  /// Map a declared parameter type name to its value type.
  ///
  /// Accepts the snake_case names used in JSON as well as the type names
  /// host adapters report for their parameters.
  pub fn from_type_name(name: &str) -> Option<Self> {
    match name.trim() {
      "document_list" | "DocumentList" | "IReadOnlyList<Document>" | "Vec<Document>" => {
        Some(Self::DocumentList)
      }
      "generic_array" | "GenericArray" | "JArray" | "Vec<Value>" => Some(Self::GenericArray),
      _ => None,
    }
  }
}

impl std::str::FromStr for TriggerValueType {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_type_name(s).ok_or_else(|| format!("unknown trigger value type: {}", s))
  }
}
