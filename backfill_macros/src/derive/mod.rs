//! Expansion of `#[derive(Fill)]`.

mod crate_path;
mod generate;
mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Parses `input` and emits the `Reflect` family of impls.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    let krate = crate_path::resolve(parsed.attrs.crate_path.as_ref());
    Ok(generate::fill_impls(&parsed, &krate))
}
