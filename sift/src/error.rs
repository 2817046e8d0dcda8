//! Errors raised at the edges of the crate.
//!
//! Sifting itself is total: unknown filter shapes and missing or mistyped
//! source keys contribute nothing instead of failing. Errors only come from
//! compiling patterns and from turning arbitrary `Serialize` values into a
//! source object.

use thiserror::Error;

/// Errors returned by the fallible constructors and serialization helpers.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SiftError {
    /// A key pattern did not compile as a regular expression.
    #[error("invalid key pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern text as given.
        pattern: String,
        /// The underlying compile error.
        #[source]
        source: regex::Error,
    },

    /// The value could not be converted into JSON.
    #[error("failed to serialize source: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The value serialized to something other than an object.
    #[error("source serialized to {found}, expected an object")]
    NotAnObject {
        /// The JSON kind the value serialized to.
        found: &'static str,
    },
}
