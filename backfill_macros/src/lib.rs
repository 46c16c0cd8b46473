//! Procedural macros for `backfill`.
//!
//! `#[derive(Fill)]` implements `backfill::Reflect` and
//! `backfill::StructValue` for a struct, recording each member's
//! `#[fill(key = "text")]` annotations so the engine can read them at run
//! time.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `backfill::Reflect`.
///
/// Field attributes:
/// - `#[fill(key = "text", ...)]` records an annotation under each key. The
///   engine reads the key matching its configured tag name (`default` unless
///   changed).
/// - `#[fill(skip)]` hides the member from the engine and from the struct's
///   zero check.
///
/// Struct attributes:
/// - `#[fill(transparent)]` makes a single-field struct behave like its field
///   while keeping its own type identity.
/// - `#[fill(crate = "path")]` names the runtime crate when it is renamed.
#[proc_macro_derive(Fill, attributes(fill))]
pub fn derive_fill(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[cfg(test)]
mod tests;
