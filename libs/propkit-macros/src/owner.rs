//! Proc-macro implementation for the `#[owner]` attribute.
//!
//! The attribute declares the owner key and the `Owner` impl, then rewrites
//! every field carrying a `#[property(...)]` helper attribute into a
//! `::propkit::Property` whose policy is derived from the flags.

use std::collections::HashSet;

use proc_macro_error2::abort;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Field, Ident, Meta, Token, Type, parse_quote};

const PROPERTY_ATTR: &str = "property";

const ALLOWED_FLAGS: &[&str] = &["get", "set"];

/// Arguments of `#[owner(...)]`.
#[derive(Default)]
pub struct OwnerArgs {
    key: Option<Ident>,
}

impl Parse for OwnerArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = OwnerArgs::default();

        while !input.is_empty() {
            let name: Ident = input.parse()?;
            if name != "key" {
                return Err(syn::Error::new_spanned(
                    &name,
                    format!("unknown owner argument '{name}'; expected: key"),
                ));
            }
            if args.key.is_some() {
                return Err(syn::Error::new_spanned(&name, "duplicate owner argument 'key'"));
            }

            input.parse::<Token![=]>()?;
            args.key = Some(input.parse()?);

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(args)
    }
}

/// Policy selected by a field's `#[property(...)]` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Policy {
    PrivateGetSet,
    PublicGet,
    PublicGetSet,
}

impl Policy {
    fn ident(self) -> Ident {
        match self {
            Policy::PrivateGetSet => format_ident!("PrivateGetSet"),
            Policy::PublicGet => format_ident!("PublicGet"),
            Policy::PublicGetSet => format_ident!("PublicGetSet"),
        }
    }
}

/// Expands `#[owner]` on `input`.
pub fn expand_owner(args: &OwnerArgs, mut input: DeriveInput) -> TokenStream {
    let name = input.ident.clone();
    let vis = input.vis.clone();
    let generics = input.generics.clone();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let key = args
        .key
        .clone()
        .unwrap_or_else(|| format_ident!("{}OwnerKey", name));
    let owner_ty: Type = parse_quote!(#name #ty_generics);

    let Data::Struct(data) = &mut input.data else {
        abort!(name.span(), "#[owner] can only be applied to structs");
    };

    for field in &mut data.fields {
        if let Err(err) = rewrite_field(field, &owner_ty) {
            return err.to_compile_error();
        }
    }

    let key_doc = format!(
        "Owner key of [`{name}`]. Only code in the module declaring `{name}` can construct it."
    );

    quote! {
        #input

        #[doc = #key_doc]
        #[allow(dead_code)]
        #vis struct #key {
            _seal: (),
        }

        impl #impl_generics ::propkit::Owner for #name #ty_generics #where_clause {
            type Key = #key;
        }

        impl #impl_generics #name #ty_generics #where_clause {
            #[allow(dead_code)]
            const OWNER_KEY: &'static #key = &#key { _seal: () };
        }
    }
}

/// Replaces the type of a `#[property]` field with the matching `Property`
/// and strips the helper attribute. Other fields are left untouched.
fn rewrite_field(field: &mut Field, owner_ty: &Type) -> syn::Result<()> {
    let mut property_attrs = field
        .attrs
        .iter()
        .filter(|attr| attr.path().is_ident(PROPERTY_ATTR));

    let Some(attr) = property_attrs.next() else {
        return Ok(());
    };
    if let Some(extra) = property_attrs.next() {
        return Err(syn::Error::new_spanned(
            extra,
            "duplicate #[property] attribute on field",
        ));
    }

    let policy = parse_policy(attr)?;
    let policy_ident = policy.ident();
    let value_ty = &field.ty;
    field.ty = parse_quote!(::propkit::Property<#owner_ty, #value_ty, ::propkit::#policy_ident>);
    field.attrs.retain(|attr| !attr.path().is_ident(PROPERTY_ATTR));

    Ok(())
}

/// Maps `#[property]`, `#[property(get)]` and `#[property(get, set)]` to a
/// policy.
fn parse_policy(attr: &Attribute) -> syn::Result<Policy> {
    let flags = match &attr.meta {
        Meta::Path(_) => Punctuated::new(),
        Meta::List(list) => {
            list.parse_args_with(Punctuated::<Ident, Token![,]>::parse_terminated)?
        }
        Meta::NameValue(nv) => {
            return Err(syn::Error::new_spanned(
                nv,
                "expected #[property], #[property(get)] or #[property(get, set)]",
            ));
        }
    };

    validate_flags(&flags)?;

    let get = flags.iter().any(|id| id == "get");
    let set = flags.iter().any(|id| id == "set");

    match (get, set) {
        (false, false) => Ok(Policy::PrivateGetSet),
        (true, false) => Ok(Policy::PublicGet),
        (true, true) => Ok(Policy::PublicGetSet),
        (false, true) => Err(syn::Error::new(
            attr.span(),
            "a public setter requires a public getter; use #[property(get, set)]",
        )),
    }
}

/// Rejects unknown and duplicate flags.
fn validate_flags(flags: &Punctuated<Ident, Token![,]>) -> syn::Result<()> {
    let mut seen_flags = HashSet::new();

    for ident in flags {
        let flag_str = ident.to_string();

        if !ALLOWED_FLAGS.contains(&flag_str.as_str()) {
            return Err(syn::Error::new_spanned(
                ident,
                format!(
                    "unknown property flag '{flag_str}'; expected one of: {}",
                    ALLOWED_FLAGS.join(", ")
                ),
            ));
        }

        if !seen_flags.insert(flag_str.clone()) {
            return Err(syn::Error::new_spanned(
                ident,
                format!("duplicate property flag '{flag_str}'"),
            ));
        }
    }

    Ok(())
}
