//! Unit tests for the `Fill` token generators.

use anyhow::{Result, ensure};
use quote::quote;
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

use crate::derive::expand;

fn expand_to_string(input: &DeriveInput) -> Result<String> {
    Ok(expand(input)?.to_string())
}

#[rstest]
fn struct_expansion_visits_each_visible_member() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Server {
            #[fill(default = "8080")]
            port: u16,
            #[fill(skip)]
            handle: Handle,
            name: String,
        }
    };
    let tokens = expand_to_string(&input)?;
    let port_visit = quote! {
        visit(::backfill::Member::new("port", &[("default", "8080")], &mut self.port));
    }
    .to_string();
    let name_visit = quote! {
        visit(::backfill::Member::new("name", &[], &mut self.name));
    }
    .to_string();
    ensure!(tokens.contains(&port_visit), "missing port visit: {tokens}");
    ensure!(tokens.contains(&name_visit), "missing name visit: {tokens}");
    ensure!(!tokens.contains("handle"), "skipped member leaked: {tokens}");
    Ok(())
}

#[rstest]
fn zero_check_covers_visible_members() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Flags {
            a: bool,
            #[fill(skip)]
            b: bool,
        }
    };
    let tokens = expand_to_string(&input)?;
    let expected = quote! {
        fn is_zero(&self) -> bool {
            true && ::backfill::Reflect::is_zero(&self.a)
        }
    }
    .to_string();
    ensure!(tokens.contains(&expected), "unexpected zero check: {tokens}");
    Ok(())
}

#[rstest]
fn unit_structs_ignore_the_visitor() -> Result<()> {
    let input: DeriveInput = parse_quote! { struct Marker; };
    let tokens = expand_to_string(&input)?;
    ensure!(tokens.contains("_visit"), "visitor should be unused: {tokens}");
    Ok(())
}

#[rstest]
fn transparent_expansion_delegates_to_the_field() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[fill(transparent)]
        struct Port(u16);
    };
    let tokens = expand_to_string(&input)?;
    let delegated = quote! { ::backfill::Reflect::reflect_mut(&mut self.0) }.to_string();
    ensure!(tokens.contains(&delegated), "missing delegation: {tokens}");
    ensure!(!tokens.contains("StructValue"), "unexpected walker: {tokens}");
    Ok(())
}

#[rstest]
fn generics_gain_reflect_bounds() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Wrapper<T> {
            inner: T,
        }
    };
    let tokens = expand_to_string(&input)?;
    let header = quote! {
        impl<T: ::backfill::Reflect> ::backfill::Reflect for Wrapper<T>
    }
    .to_string();
    ensure!(tokens.contains(&header), "missing bound: {tokens}");
    Ok(())
}

#[rstest]
fn crate_override_replaces_runtime_paths() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[fill(crate = "deps::backfill")]
        struct Aliased {
            value: u8,
        }
    };
    let tokens = expand_to_string(&input)?;
    ensure!(
        tokens.contains("deps :: backfill :: Reflect"),
        "alias not applied: {tokens}"
    );
    ensure!(
        tokens.matches(":: backfill").count() == tokens.matches("deps :: backfill").count(),
        "default path leaked: {tokens}"
    );
    Ok(())
}
