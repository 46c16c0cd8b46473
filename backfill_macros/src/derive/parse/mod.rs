//! Parsing utilities for the `Fill` derive macro.

use syn::{Attribute, LitStr, Token};

mod input;
mod literals;

pub(crate) use input::{FieldSpec, FillInput, parse_input};
use literals::{lit_path, lit_str};

/// Struct-level `#[fill(...)]` attributes.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Delegate every `Reflect` method to the single field.
    pub transparent: bool,
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[fill(crate = "my_alias")]`, generated code references
    /// types through `my_alias::` instead of `::backfill::`.
    pub crate_path: Option<syn::Path>,
}

/// Field-level `#[fill(...)]` attributes.
///
/// - `key = "text"` records an annotation for the engine; any identifier
///   other than `skip` is accepted as a key.
/// - `skip` hides the member from the engine.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub annotations: Vec<(String, LitStr)>,
    pub skip: bool,
}

/// Iterate all `#[fill(...)]` attributes once and apply a callback.
fn parse_fill<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&syn::meta::ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("fill")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Extracts `#[fill(...)]` metadata applied to a struct.
///
/// Recognised keys are `transparent` and `crate`; anything else is an
/// error.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> Result<StructAttrs, syn::Error> {
    let mut out = StructAttrs::default();
    parse_fill(attrs, |meta| {
        if meta.path.is_ident("transparent") {
            out.transparent = true;
            Ok(())
        } else if meta.path.is_ident("crate") {
            out.crate_path = Some(lit_path(meta, "crate")?);
            Ok(())
        } else {
            Err(meta.error("unknown struct attribute; expected `transparent` or `crate`"))
        }
    })?;
    Ok(out)
}

/// Parses field-level `#[fill(...)]` attributes.
///
/// Each key may appear once per field, across every `#[fill]` attribute on
/// it.
pub(crate) fn parse_field_attrs(field: &syn::Field) -> Result<FieldAttrs, syn::Error> {
    let mut out = FieldAttrs::default();
    parse_fill(&field.attrs, |meta| {
        if meta.path.is_ident("skip") {
            out.skip = true;
            return Ok(());
        }
        let Some(ident) = meta.path.get_ident() else {
            return Err(meta.error("annotation keys must be plain identifiers"));
        };
        let key = ident.to_string();
        if !meta.input.peek(Token![=]) {
            return Err(meta.error(format!("expected `{key} = \"...\"`")));
        }
        if out.annotations.iter().any(|(existing, _)| *existing == key) {
            return Err(meta.error(format!("duplicate annotation `{key}`")));
        }
        let text = lit_str(meta, &key)?;
        out.annotations.push((key, text));
        Ok(())
    })?;
    Ok(out)
}
