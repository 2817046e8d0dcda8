//! Adapters for emitting sifted values through `slog`.
//!
//! This module connects [`crate::Siftable`] with `slog` by providing a
//! `slog::Value` that serializes only the whitelisted fields of a value, as
//! structured JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is the sifted projection, never the
//!   original value.
//! - Avoiding fallible logging APIs: values that cannot be sifted are logged as
//!   a placeholder string rather than propagated as errors.
//!
//! It does not configure `slog` or decide which filters a call site should use.

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{engine::sift, filter::Filter, Siftable};

/// Placeholder logged when a value cannot be sifted.
pub const SIFT_FAILED_PLACEHOLDER: &str = "Failed to serialize sifted value";

/// A `slog::Value` that emits an owned sifted payload as structured JSON.
pub struct SiftedJson {
    value: JsonValue,
}

impl SiftedJson {
    /// Sifts an already-built source object.
    #[must_use]
    pub fn from_source(source: &Map<String, JsonValue>, filters: &[Filter]) -> Self {
        Self {
            value: JsonValue::Object(sift(source, filters)),
        }
    }

    /// The payload that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for SiftedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts values into a `slog::Value` that logs only their sifted fields.
///
/// ## Example
/// ```ignore
/// use sift::{slog::IntoSiftedJson, Filter};
///
/// info!(logger, "login"; "user" => user.into_sifted_json(&[Filter::names(["id", "email"])]));
/// ```
pub trait IntoSiftedJson: Serialize {
    /// Sifts `self` with `filters` and wraps the result for logging.
    ///
    /// If `self` does not serialize to a JSON object, the returned value holds
    /// [`SIFT_FAILED_PLACEHOLDER`] as a JSON string.
    fn into_sifted_json(&self, filters: &[Filter]) -> SiftedJson {
        let value = self.sifted(filters).map_or_else(
            |_| JsonValue::String(SIFT_FAILED_PLACEHOLDER.to_string()),
            JsonValue::Object,
        );
        SiftedJson { value }
    }
}

impl<T> IntoSiftedJson for T where T: Serialize + ?Sized {}
