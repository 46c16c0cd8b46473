//! Literal parsing helpers for derive attributes.

use syn::{Lit, LitStr};

/// Parses a string literal following `key =` in a `#[fill(...)]` list.
pub(crate) fn lit_str(meta: &syn::meta::ParseNestedMeta, key: &str) -> Result<LitStr, syn::Error> {
    let literal = meta.value()?.parse::<Lit>()?;
    match literal {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(
            other.span(),
            format!("{key} must be a string literal"),
        )),
    }
}

/// Parses a string literal holding a Rust path.
pub(crate) fn lit_path(meta: &syn::meta::ParseNestedMeta, key: &str) -> Result<syn::Path, syn::Error> {
    let s = lit_str(meta, key)?;
    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))
}
