//! Filter values and their constructors.
//!
//! [`Filter`] is the tagged form of a filter. Typed code builds it directly;
//! untyped data (configuration, request bodies) is classified into it by
//! [`Filter::from_value`], which applies the shape probes from
//! [`crate::probe`] in a fixed priority order.

use regex::Regex;
use serde::{
    de::{Deserialize, Deserializer},
    ser::{Serialize, SerializeMap, SerializeStruct, Serializer},
};
use serde_json::Value;

use crate::{
    error::SiftError,
    probe::{try_as_key_matcher, try_as_object, try_as_string_array},
};

/// A description of which keys of a source object to keep.
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    /// Keep the whole current subtree without looking inside it.
    ///
    /// Re-exported at the crate root as [`crate::All`].
    All,
    /// Keep the listed keys of the current object, whatever their values are.
    ///
    /// An empty list is not a valid name list and selects nothing.
    Names(Vec<String>),
    /// Descend into the named keys, filtering each with its own nested filter.
    Object(ObjectFilter),
    /// Keep keys whose name matches a pattern, filtering their values with
    /// the matcher's sub-filters.
    Matcher(KeyMatcher),
    /// Data that matched no filter shape.
    ///
    /// Selects nothing. Inside an [`ObjectFilter`] it still recurses into an
    /// object-valued key and leaves an empty object behind.
    Unrecognized,
}

impl Filter {
    /// Builds a [`Filter::Names`] from any sequence of key names.
    #[must_use]
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Names(names.into_iter().map(Into::into).collect())
    }

    /// Returns `true` for the [`Filter::All`] sentinel.
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Classifies untyped filter data.
    ///
    /// Shapes are tried in order:
    /// 1. `true` is [`Filter::All`];
    /// 2. a non-empty array of strings is [`Filter::Names`];
    /// 3. an object with a compilable `pattern` string and a `filters` array is
    ///    [`Filter::Matcher`];
    /// 4. any other object is [`Filter::Object`], its entries classified
    ///    recursively.
    ///
    /// Everything else, including `[]`, is [`Filter::Unrecognized`]. This never
    /// fails: a bad pattern simply stops the value from looking like a matcher.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        if matches!(value, Value::Bool(true)) {
            return Self::All;
        }
        if let Some(names) = try_as_string_array(value) {
            return Self::names(names);
        }
        if let Some(matcher) = try_as_key_matcher(value) {
            return Self::Matcher(matcher);
        }
        if let Some(object) = try_as_object(value) {
            return Self::Object(
                object
                    .iter()
                    .map(|(key, nested)| (key.clone(), Self::from_value(nested)))
                    .collect(),
            );
        }
        Self::Unrecognized
    }
}

pub(crate) fn any_all(filters: &[Filter]) -> bool {
    filters.iter().any(Filter::is_all)
}

impl<const N: usize> From<[&str; N]> for Filter {
    fn from(names: [&str; N]) -> Self {
        Self::names(names)
    }
}

impl From<&[&str]> for Filter {
    fn from(names: &[&str]) -> Self {
        Self::names(names.iter().copied())
    }
}

impl From<Vec<&str>> for Filter {
    fn from(names: Vec<&str>) -> Self {
        Self::names(names)
    }
}

impl From<Vec<String>> for Filter {
    fn from(names: Vec<String>) -> Self {
        Self::Names(names)
    }
}

impl From<ObjectFilter> for Filter {
    fn from(filter: ObjectFilter) -> Self {
        Self::Object(filter)
    }
}

impl From<KeyMatcher> for Filter {
    fn from(matcher: KeyMatcher) -> Self {
        Self::Matcher(matcher)
    }
}

/// An ordered mapping from key name to the filter applied beneath that key.
///
/// Keys are visited in insertion order. Inserting an existing key replaces its
/// filter without moving it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectFilter {
    fields: Vec<(String, Filter)>,
}

impl ObjectFilter {
    /// Creates an empty object filter. Applying it selects nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the filter for `key`.
    #[must_use]
    pub fn field<K, F>(mut self, key: K, filter: F) -> Self
    where
        K: Into<String>,
        F: Into<Filter>,
    {
        self.insert(key, filter);
        self
    }

    /// Sets the filter for `key`, returning the one it replaced.
    pub fn insert<K, F>(&mut self, key: K, filter: F) -> Option<Filter>
    where
        K: Into<String>,
        F: Into<Filter>,
    {
        let key = key.into();
        let filter = filter.into();
        if let Some((_, existing)) = self.fields.iter_mut().find(|(name, _)| *name == key) {
            return Some(std::mem::replace(existing, filter));
        }
        self.fields.push((key, filter));
        None
    }

    /// Returns the filter registered for `key`.
    pub fn get(&self, key: &str) -> Option<&Filter> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, filter)| filter)
    }

    /// Iterates over `(key, filter)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Filter)> {
        self.fields
            .iter()
            .map(|(name, filter)| (name.as_str(), filter))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, F> FromIterator<(K, F)> for ObjectFilter
where
    K: Into<String>,
    F: Into<Filter>,
{
    fn from_iter<I: IntoIterator<Item = (K, F)>>(iter: I) -> Self {
        let mut filter = Self::new();
        for (key, nested) in iter {
            filter.insert(key, nested);
        }
        filter
    }
}

/// Selects keys by name pattern and filters their values with sub-filters.
///
/// A matched key whose value is not an object is only kept when [`Filter::All`]
/// is among the sub-filters.
#[derive(Clone, Debug)]
pub struct KeyMatcher {
    pattern: Regex,
    filters: Vec<Filter>,
}

impl KeyMatcher {
    /// Pairs a compiled pattern with its sub-filters.
    #[must_use]
    pub fn new(pattern: Regex, filters: Vec<Filter>) -> Self {
        Self { pattern, filters }
    }

    /// Compiles `pattern` and pairs it with `filters`.
    pub fn from_pattern<I>(pattern: &str, filters: I) -> Result<Self, SiftError>
    where
        I: IntoIterator<Item = Filter>,
    {
        let compiled = Regex::new(pattern).map_err(|source| SiftError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self::new(compiled, filters.into_iter().collect()))
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Tests a key name against the pattern (unanchored search).
    pub fn is_match(&self, key: &str) -> bool {
        self.pattern.is_match(key)
    }
}

// `Regex` has no `PartialEq`; two matchers are equal when their source text is.
impl PartialEq for KeyMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.pattern.as_str() == other.pattern.as_str() && self.filters == other.filters
    }
}

/// Builds a [`KeyMatcher`] from a compiled pattern and its sub-filters.
///
/// ```rust
/// use regex::Regex;
/// use serde_json::json;
/// use sift::{matching, sift, Filter};
///
/// let source = json!({ "userName": "A", "userAge": 1, "other": 2 });
/// let source = source.as_object().unwrap();
/// let filter = Filter::from(matching(Regex::new("^user").unwrap(), [sift::All]));
///
/// let result = sift(source, &[filter]);
/// assert_eq!(serde_json::Value::Object(result), json!({ "userName": "A", "userAge": 1 }));
/// ```
#[must_use]
pub fn matching<I>(pattern: Regex, filters: I) -> KeyMatcher
where
    I: IntoIterator<Item = Filter>,
{
    KeyMatcher::new(pattern, filters.into_iter().collect())
}

impl Serialize for Filter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Filter::All => serializer.serialize_bool(true),
            Filter::Names(names) => names.serialize(serializer),
            Filter::Object(object) => object.serialize(serializer),
            Filter::Matcher(matcher) => matcher.serialize(serializer),
            Filter::Unrecognized => serializer.serialize_unit(),
        }
    }
}

impl Serialize for ObjectFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, filter) in &self.fields {
            map.serialize_entry(key, filter)?;
        }
        map.end()
    }
}

impl Serialize for KeyMatcher {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("KeyMatcher", 2)?;
        state.serialize_field("pattern", self.pattern.as_str())?;
        state.serialize_field("filters", &self.filters)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}
