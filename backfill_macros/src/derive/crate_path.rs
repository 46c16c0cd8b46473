//! Runtime crate path used by generated impls.
//!
//! Generated code names `Reflect`, `Shape` and friends through a single
//! prefix so that a renamed dependency only needs `#[fill(crate = "...")]`.

use proc_macro2::TokenStream;
use quote::quote;

/// Prefix for runtime paths.
///
/// Without an override this is the absolute `::backfill`, which cannot be
/// captured by a local module of the same name.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::backfill }, |path| quote! { #path })
}
