//! The recursive sifting algorithm.
//!
//! [`sift`] unions the partial results of each filter over one source object.
//! Name lists copy keys, object filters and key matchers recurse into
//! object-valued keys. Anything that does not fit (unknown filter shapes,
//! missing keys, non-object values under a recursing filter) contributes
//! nothing.

use std::slice;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    error::SiftError,
    filter::{any_all, Filter, KeyMatcher, ObjectFilter},
    probe::try_as_object,
};

/// Returns a new object holding the parts of `source` selected by `filters`.
///
/// - With [`Filter::All`] anywhere in `filters`, every key of `source` is
///   copied and the other filters are ignored.
/// - With no filters, the result is empty.
/// - Otherwise each filter is applied in order and its keys are merged into
///   the result; a later filter overwrites an earlier one's key wholesale.
///
/// ```rust
/// use serde_json::json;
/// use sift::{sift, Filter};
///
/// let source = json!({ "name": "John", "age": 30, "city": "NY" });
/// let result = sift(source.as_object().unwrap(), &[Filter::from(["name", "age"])]);
/// assert_eq!(serde_json::Value::Object(result), json!({ "name": "John", "age": 30 }));
/// ```
#[must_use]
pub fn sift(source: &Map<String, Value>, filters: &[Filter]) -> Map<String, Value> {
    if any_all(filters) {
        return source.clone();
    }

    let mut result = Map::new();
    for filter in filters {
        let partial = match filter {
            Filter::Names(names) if !names.is_empty() => sift_names(source, names),
            Filter::Matcher(matcher) => sift_matcher(source, matcher),
            Filter::Object(object) => sift_object(source, object),
            _ => continue,
        };
        result.extend(partial);
    }
    result
}

fn sift_names(source: &Map<String, Value>, names: &[String]) -> Map<String, Value> {
    let mut result = Map::new();
    for name in names {
        if let Some(value) = source.get(name) {
            result.insert(name.clone(), value.clone());
        }
    }
    result
}

fn sift_object(source: &Map<String, Value>, filter: &ObjectFilter) -> Map<String, Value> {
    let mut result = Map::new();
    for (key, nested) in filter.iter() {
        let Some(value) = source.get(key) else {
            continue;
        };
        // All needs no object check on the value.
        if nested.is_all() {
            result.insert(key.to_string(), value.clone());
            continue;
        }
        if let Some(object) = try_as_object(value) {
            let sifted = sift(object, slice::from_ref(nested));
            result.insert(key.to_string(), Value::Object(sifted));
        }
    }
    result
}

fn sift_matcher(source: &Map<String, Value>, matcher: &KeyMatcher) -> Map<String, Value> {
    let keep_whole = any_all(matcher.filters());
    let mut result = Map::new();
    for (key, value) in source {
        if !matcher.is_match(key) {
            continue;
        }
        if keep_whole {
            result.insert(key.clone(), value.clone());
            continue;
        }
        if let Some(object) = try_as_object(value) {
            let sifted = sift(object, matcher.filters());
            result.insert(key.clone(), Value::Object(sifted));
        }
    }
    result
}

/// Serializes `source` to JSON and sifts the resulting object.
///
/// Fails when serialization fails or when `source` does not serialize to an
/// object.
pub fn sift_serialize<T>(source: &T, filters: &[Filter]) -> Result<Map<String, Value>, SiftError>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(source)? {
        Value::Object(object) => Ok(sift(&object, filters)),
        other => Err(SiftError::NotAnObject {
            found: kind_name(&other),
        }),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Sifting for any serializable value.
///
/// Blanket-implemented for every [`Serialize`] type; `sifted` is
/// [`sift_serialize`] in method form.
pub trait Siftable: Serialize {
    /// Returns the parts of `self` selected by `filters`.
    fn sifted(&self, filters: &[Filter]) -> Result<Map<String, Value>, SiftError> {
        sift_serialize(self, filters)
    }
}

impl<T> Siftable for T where T: Serialize + ?Sized {}
