//! Token generation for `#[derive(Fill)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericParam, Generics, parse_quote};

use super::parse::{FieldSpec, FillInput};

/// Adds a `Reflect` bound to every type parameter.
fn add_reflect_bounds(generics: &Generics, krate: &TokenStream) -> Generics {
    let mut bounded = generics.clone();
    for param in &mut bounded.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(#krate::Reflect));
        }
    }
    bounded
}

/// Emits `Reflect` and, for ordinary structs, `StructValue`.
pub(crate) fn fill_impls(input: &FillInput, krate: &TokenStream) -> TokenStream {
    match (input.attrs.transparent, input.fields.as_slice()) {
        (true, [field]) => transparent_impl(input, field, krate),
        _ => struct_impls(input, krate),
    }
}

fn struct_impls(input: &FillInput, krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let generics = add_reflect_bounds(&input.generics, krate);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let visible: Vec<&FieldSpec> = input.fields.iter().filter(|f| !f.attrs.skip).collect();

    let zero_checks = visible.iter().map(|field| {
        let member = &field.member;
        quote! { && #krate::Reflect::is_zero(&self.#member) }
    });
    let visits = visible.iter().map(|field| {
        let member = &field.member;
        let name = &field.name;
        let annotations = field.attrs.annotations.iter().map(|(key, text)| {
            quote! { (#key, #text) }
        });
        quote! {
            visit(#krate::Member::new(#name, &[#(#annotations),*], &mut self.#member));
        }
    });
    let visit = if visible.is_empty() {
        quote! { _visit }
    } else {
        quote! { visit }
    };

    quote! {
        impl #impl_generics #krate::Reflect for #ident #ty_generics #where_clause {
            fn shape(&self) -> #krate::Shape {
                #krate::Shape::Struct
            }

            fn innermost(&self) -> ::core::option::Option<#krate::Shape> {
                ::core::option::Option::Some(#krate::Shape::Struct)
            }

            fn innermost_of() -> #krate::Shape {
                #krate::Shape::Struct
            }

            fn is_zero(&self) -> bool {
                true #(#zero_checks)*
            }

            fn reflect_mut(&mut self) -> #krate::ReflectMut<'_> {
                #krate::ReflectMut::Struct(self)
            }
        }

        impl #impl_generics #krate::StructValue for #ident #ty_generics #where_clause {
            fn walk(&mut self, #visit: &mut dyn ::core::ops::FnMut(#krate::Member<'_>)) {
                #(#visits)*
            }
        }
    }
}

fn transparent_impl(input: &FillInput, field: &FieldSpec, krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let generics = add_reflect_bounds(&input.generics, krate);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let member = &field.member;
    let ty = &field.ty;

    quote! {
        impl #impl_generics #krate::Reflect for #ident #ty_generics #where_clause {
            fn shape(&self) -> #krate::Shape {
                #krate::Reflect::shape(&self.#member)
            }

            fn innermost(&self) -> ::core::option::Option<#krate::Shape> {
                #krate::Reflect::innermost(&self.#member)
            }

            fn innermost_of() -> #krate::Shape {
                <#ty as #krate::Reflect>::innermost_of()
            }

            fn is_zero(&self) -> bool {
                #krate::Reflect::is_zero(&self.#member)
            }

            fn reflect_mut(&mut self) -> #krate::ReflectMut<'_> {
                #krate::Reflect::reflect_mut(&mut self.#member)
            }
        }
    }
}
