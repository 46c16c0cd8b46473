//! Input parsing for the `Fill` derive macro.
//!
//! This module gathers the struct identifier, members, and attribute
//! metadata in one pass so expansion can fail fast with useful errors.

use syn::{Data, DeriveInput, Fields, GenericParam, Generics, Ident, Index, Member, Type};

use super::{FieldAttrs, StructAttrs, parse_field_attrs, parse_struct_attrs};

/// Everything the generator needs about the derived struct.
pub(crate) struct FillInput {
    pub ident: Ident,
    pub generics: Generics,
    pub attrs: StructAttrs,
    pub fields: Vec<FieldSpec>,
}

/// A member of the derived struct.
pub(crate) struct FieldSpec {
    /// Accessor used as `self.#member`.
    pub member: Member,
    /// Name reported to the engine; tuple members use their index.
    pub name: String,
    pub ty: Type,
    pub attrs: FieldAttrs,
}

/// Gathers information from the user-provided struct.
///
/// Enums, unions and structs with lifetime parameters are rejected, as is
/// `#[fill(transparent)]` on anything but a single-field struct.
pub(crate) fn parse_input(input: &DeriveInput) -> Result<FillInput, syn::Error> {
    let attrs = parse_struct_attrs(&input.attrs)?;
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Fill can only be derived for structs",
        ));
    };
    if let Some(lifetime) = input
        .generics
        .params
        .iter()
        .find(|param| matches!(param, GenericParam::Lifetime(_)))
    {
        return Err(syn::Error::new_spanned(
            lifetime,
            "Fill cannot be derived for structs with lifetime parameters",
        ));
    }

    let fields = match &data.fields {
        Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
        Fields::Unnamed(unnamed) => unnamed.unnamed.iter().collect::<Vec<_>>(),
        Fields::Unit => Vec::new(),
    };
    let mut specs = Vec::with_capacity(fields.len());
    for (index, field) in fields.into_iter().enumerate() {
        let (member, name) = match &field.ident {
            Some(ident) => (
                Member::Named(ident.clone()),
                ident.to_string().trim_start_matches("r#").to_owned(),
            ),
            None => (Member::Unnamed(Index::from(index)), index.to_string()),
        };
        specs.push(FieldSpec {
            member,
            name,
            ty: field.ty.clone(),
            attrs: parse_field_attrs(field)?,
        });
    }

    if attrs.transparent && specs.len() != 1 {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[fill(transparent)] requires exactly one field",
        ));
    }

    Ok(FillInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        attrs,
        fields: specs,
    })
}
