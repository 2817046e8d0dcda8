//! Procedural macros for `sift`.
//!
//! This crate implements the `filter!` DSL. It:
//! - parses a filter literal into a small syntax tree
//! - rejects malformed filters (bad patterns, duplicate keys) at compile time
//! - emits constructor calls against the `sift` crate
//!
//! It does **not** sift anything. Filtering happens at runtime in `sift`.

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
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::parse_macro_input;

mod expand;
mod parse;

use expand::expand;
use parse::FilterAst;

/// Builds a `sift::Filter` from a filter literal.
///
/// # Syntax
///
/// - `All` - keep the whole subtree.
/// - `["a", "b"]` - keep the listed keys.
/// - `{ key: <filter>, "quoted key": <filter> }` - descend into keys, each with
///   its own nested filter. Keys may be identifiers (including keywords) or
///   string literals.
/// - `match("regex", <filter>, ...)` - keep keys matching the pattern and
///   filter their values with the listed sub-filters.
/// - `(expr)` - any expression convertible into `sift::Filter`.
///
/// # Compile-time checks
///
/// - the pattern of every `match(...)` must compile as a regular expression
/// - object keys must be unique within one `{ ... }`
/// - name lists may only contain string literals
///
/// The `sift` crate path is resolved with `proc-macro-crate`, so renamed
/// dependencies (`my_sift = { package = "sift", ... }`) work.
#[proc_macro]
pub fn filter(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let ast = parse_macro_input!(input as FilterAst);
    expand(&ast, &crate_root()).into()
}

/// Returns the token stream to reference the sift crate root.
///
/// `sift` declares `extern crate self as sift`, so `::sift` also resolves
/// inside the crate itself.
fn crate_root() -> TokenStream {
    match crate_name("sift") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::sift },
    }
}
