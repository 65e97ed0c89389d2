//! Changefeed Trigger
//!
//! Converts the payload delivered at invocation time into the document list
//! used internally, and from there into the value shape the trigger
//! function declared.

mod convert;
mod types;

pub use convert::{bind_value, to_json_string, try_convert};
pub use types::{Document, DocumentList, TriggerPayload, TriggerValue};
