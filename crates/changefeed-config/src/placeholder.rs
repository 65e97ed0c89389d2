//! `%name%` placeholder detection.
//!
//! A field wrapped in percent signs is an indirection: the text between the
//! signs is a setting name that the name resolver turns into the real value.
//!
//! ```text
//! "%MyDatabase%"  -> look up "MyDatabase"
//! "orders"        -> literal
//! "%"             -> literal (too short to wrap anything)
//! ```

/// Returns true if `value` is wrapped in `%...%` with a non-empty name inside.
pub fn is_placeholder(value: &str) -> bool {
  value.len() > 2 && value.starts_with('%') && value.ends_with('%')
}

/// Strip the surrounding `%` from a placeholder.
///
/// Values that are not placeholders are returned unchanged.
pub fn strip_placeholder(value: &str) -> &str {
  if is_placeholder(value) {
    &value[1..value.len() - 1]
  } else {
    value
  }
}
