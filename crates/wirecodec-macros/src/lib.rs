//! wirecodec-macros - Procedural macros for wirecodec
//!
//! This crate provides:
//! - `#[derive(WireEnum)]` - Wire names and ordinals for fieldless enums, plus
//!   serde impls that follow the active codec's enum handling

use darling::ast::Data;
use darling::{FromDeriveInput, FromMeta, FromVariant};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use std::collections::HashMap;
use syn::{DeriveInput, parse_macro_input};

/// Case conversion applied to variant names without an explicit rename
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenameRule {
    SnakeCase,
    ScreamingSnakeCase,
    Lowercase,
}

impl RenameRule {
    fn apply(self, name: &str) -> String {
        match self {
            RenameRule::SnakeCase => to_snake_case(name),
            RenameRule::ScreamingSnakeCase => to_snake_case(name).to_ascii_uppercase(),
            RenameRule::Lowercase => name.to_ascii_lowercase(),
        }
    }
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "snake_case" => Ok(RenameRule::SnakeCase),
            "SCREAMING_SNAKE_CASE" => Ok(RenameRule::ScreamingSnakeCase),
            "lowercase" => Ok(RenameRule::Lowercase),
            other => Err(darling::Error::unknown_value(other)),
        }
    }
}

#[derive(Debug, FromVariant)]
#[darling(attributes(wire_enum))]
struct WireVariantOpts {
    ident: syn::Ident,

    /// Explicit wire name for this variant
    #[darling(default)]
    rename: Option<String>,
}

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(wire_enum), supports(enum_unit))]
struct WireEnumOpts {
    ident: syn::Ident,
    generics: syn::Generics,
    data: Data<WireVariantOpts, ()>,

    /// Case conversion for variant names (e.g., "snake_case")
    #[darling(default)]
    rename_all: Option<RenameRule>,

    /// Path to the crate exporting `WireEnum` (e.g., "wirecodec")
    #[darling(default, rename = "crate")]
    crate_path: Option<syn::Path>,
}

/// Derive macro for enumerated wire values
///
/// Implements `wirecodec_core::WireEnum` and serde's `Serialize`/`Deserialize`
/// so the enum is written by name or by ordinal depending on the codec
/// settings. Ordinals are the variant discriminants.
///
/// Generated code refers to `::wirecodec_core`; crates depending only on the
/// `wirecodec` facade add `#[wire_enum(crate = "wirecodec")]`.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, WireEnum)]
/// enum BrokerRequest {
///     Subscribe = 10,
///     Unsubscribe = 20,
///     #[wire_enum(rename = "publish")]
///     Publish = 40,
/// }
/// ```
#[proc_macro_derive(WireEnum, attributes(wire_enum))]
pub fn derive_wire_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match WireEnumOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return TokenStream::from(e.write_errors()),
    };

    if !opts.generics.params.is_empty() {
        return syn::Error::new_spanned(&opts.generics, "WireEnum does not support generic enums")
            .to_compile_error()
            .into();
    }

    let name = &opts.ident;
    let type_name = name.to_string();
    let variants = match &opts.data {
        Data::Enum(variants) => variants,
        Data::Struct(_) => {
            return syn::Error::new_spanned(name, "WireEnum can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };

    let idents: Vec<_> = variants.iter().map(|v| &v.ident).collect();
    let wire_names: Vec<String> = variants
        .iter()
        .map(|v| wire_name(v, opts.rename_all))
        .collect();

    if let Err(e) = check_unique_wire_names(variants, &wire_names) {
        return e.to_compile_error().into();
    }

    let krate = crate_tokens(opts.crate_path.as_ref());

    let expanded = quote! {
        impl #krate::WireEnum for #name {
            const TYPE_NAME: &'static str = #type_name;

            fn name(&self) -> &'static str {
                match self {
                    #( Self::#idents => #wire_names, )*
                }
            }

            fn ordinal(&self) -> i64 {
                match self {
                    #( Self::#idents => Self::#idents as i64, )*
                }
            }

            fn from_name(name: &str) -> ::std::option::Option<Self> {
                match name {
                    #( #wire_names => ::std::option::Option::Some(Self::#idents), )*
                    _ => ::std::option::Option::None,
                }
            }

            fn from_ordinal(ordinal: i64) -> ::std::option::Option<Self> {
                #(
                    if ordinal == Self::#idents as i64 {
                        return ::std::option::Option::Some(Self::#idents);
                    }
                )*
                ::std::option::Option::None
            }
        }

        impl #krate::__private::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: #krate::__private::serde::Serializer,
            {
                #krate::wire_enum::serialize(self, serializer)
            }
        }

        impl<'de> #krate::__private::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: #krate::__private::serde::Deserializer<'de>,
            {
                #krate::wire_enum::deserialize(deserializer)
            }
        }
    };

    TokenStream::from(expanded)
}

/// Tokens naming the crate that exports the runtime support
fn crate_tokens(path: Option<&syn::Path>) -> TokenStream2 {
    match path {
        Some(path) => quote!(#path),
        None => quote!(::wirecodec_core),
    }
}

/// Wire name of a variant: explicit rename, then the enum-wide rule, then the ident
fn wire_name(variant: &WireVariantOpts, rule: Option<RenameRule>) -> String {
    if let Some(rename) = &variant.rename {
        return rename.clone();
    }
    let ident = variant.ident.to_string();
    match rule {
        Some(rule) => rule.apply(&ident),
        None => ident,
    }
}

/// Reject variants that end up sharing a wire name
///
/// Discriminants need no check here; rustc already rejects duplicates.
fn check_unique_wire_names(variants: &[WireVariantOpts], wire_names: &[String]) -> syn::Result<()> {
    let mut seen: HashMap<&str, &syn::Ident> = HashMap::new();
    let mut errors = Vec::new();
    for (variant, wire_name) in variants.iter().zip(wire_names) {
        match seen.get(wire_name.as_str()) {
            Some(first) => errors.push(syn::Error::new_spanned(
                &variant.ident,
                format!("wire name `{wire_name}` is already used by variant `{first}`"),
            )),
            None => {
                seen.insert(wire_name, &variant.ident);
            }
        }
    }

    let mut errors = errors.into_iter();
    let Some(mut combined) = errors.next() else {
        return Ok(());
    };
    combined.extend(errors);
    Err(combined)
}

/// Convert a PascalCase string to snake_case
fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}
