//! Shape probes over untyped values.
//!
//! Each probe answers one question about a [`Value`] and hands back the
//! narrowed view when the answer is yes. Probes are independent and never
//! fail; callers combine them (see [`crate::Filter::from_value`]).

use regex::Regex;
use serde_json::{Map, Value};

use crate::filter::{Filter, KeyMatcher};

/// Returns the string slice when `value` is a string.
pub fn try_as_str(value: &Value) -> Option<&str> {
    value.as_str()
}

/// Returns the elements when `value` is an array.
pub fn try_as_array(value: &Value) -> Option<&[Value]> {
    value.as_array().map(Vec::as_slice)
}

/// Returns the elements of a non-empty array whose elements are all strings.
pub fn try_as_string_array(value: &Value) -> Option<Vec<&str>> {
    let items = try_as_array(value)?;
    if items.is_empty() {
        return None;
    }
    items.iter().map(try_as_str).collect()
}

/// Returns the entries when `value` is an object (not `null`, not an array).
pub fn try_as_object(value: &Value) -> Option<&Map<String, Value>> {
    value.as_object()
}

/// Returns a [`KeyMatcher`] when `value` owns a `pattern` string that compiles
/// and a `filters` array.
///
/// The `filters` array may be empty. Its elements are classified with
/// [`Filter::from_value`].
pub fn try_as_key_matcher(value: &Value) -> Option<KeyMatcher> {
    let object = try_as_object(value)?;
    let pattern = object.get("pattern").and_then(try_as_str)?;
    let filters = object.get("filters").and_then(try_as_array)?;
    let pattern = Regex::new(pattern).ok()?;
    Some(KeyMatcher::new(
        pattern,
        filters.iter().map(Filter::from_value).collect(),
    ))
}
