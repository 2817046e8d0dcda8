//! Declarative key filtering for nested JSON-like data.
//!
//! Given a source object and one or more filters, [`sift`] builds a new object
//! holding only the fields the filters select, keeping the original nesting.
//! Use it to whitelist fields before serializing, logging, or returning data
//! from an API.
//!
//! A filter is one of:
//! - [`All`]: keep the current subtree as-is.
//! - a list of names (`["name", "age"]`): keep those keys of the current object.
//! - an [`ObjectFilter`]: descend into named keys with a nested filter each.
//! - a [`KeyMatcher`]: keep keys whose name matches a regular expression and
//!   filter their values with sub-filters.
//!
//! Several filters passed together are unioned; when two of them produce the
//! same key, the later one wins.
//!
//! Filters usually come from one of three places:
//! - built in code with [`ObjectFilter`], [`matching`], and the `From` impls,
//! - written with the `filter!` macro (feature `macros`, on by default),
//! - loaded as configuration data through `serde` (see [`Filter::from_value`]).
//!
//! What this crate does not do:
//! - descend into arrays (they are kept or dropped whole)
//! - validate sources against a schema
//! - perform I/O; the `slog` feature only adapts sifted values for a logger you
//!   configure yourself

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[cfg(feature = "macros")]
pub use sift_macros::filter;

#[allow(unused_extern_crates)]
extern crate self as sift;

// Module declarations
mod engine;
mod error;
mod filter;
pub mod probe;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use engine::{sift, sift_serialize, Siftable};
pub use error::SiftError;
pub use filter::{matching, Filter, KeyMatcher, ObjectFilter};
pub use filter::Filter::All;

/// Support code for `filter!` expansions. Not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use regex::Regex;

    /// Compiles a pattern that `filter!` already validated at compile time.
    pub fn compile_pattern(pattern: &str) -> Regex {
        Regex::new(pattern).expect("filter! validates patterns at compile time")
    }
}
