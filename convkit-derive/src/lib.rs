//! Derive macro implementation used by `convkit-core`.
//!
//! The `Unit` derive expands in terms of `crate::Unit` and `crate::Quantity`, so it is only meant to be used inside
//! `convkit-core`, where those items live at the crate root.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit`
//! - `core::fmt::Display for crate::Quantity<MyUnit>` (formats as `<value> <symbol>`)
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "m"`: displayed unit symbol
//! - `name = "meters"`: long plural name, used in validation error messages
//! - `dimension = Distance`: dimension marker type

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token,
};

/// Derive `crate::Unit` and a `Display` impl for `crate::Quantity<ThisUnit>`.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `name`, and `dimension`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let name = &unit_attr.name;
    let dimension = &unit_attr.dimension;

    Ok(quote! {
        impl crate::Unit for #ident {
            type Dim = #dimension;
            const SYMBOL: &'static str = #symbol;
            const NAME: &'static str = #name;
        }

        impl ::core::fmt::Display for crate::Quantity<#ident> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{} {}", self.value(), <#ident as crate::Unit>::SYMBOL)
            }
        }
    })
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    name: LitStr,
    dimension: Expr,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut name: Option<LitStr> = None;
        let mut dimension: Option<Expr> = None;

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            let duplicate = match key.to_string().as_str() {
                "symbol" => symbol.replace(input.parse()?).is_some(),
                "name" => name.replace(input.parse()?).is_some(),
                "dimension" => dimension.replace(input.parse()?).is_some(),
                other => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            };
            if duplicate {
                return Err(syn::Error::new(
                    key.span(),
                    format!("duplicate attribute `{}`", key),
                ));
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let name =
            name.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `name`"))?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;

        Ok(UnitAttribute {
            symbol,
            name,
            dimension,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident("unit"))
        .map(|attr| attr.parse_args::<UnitAttribute>())
        .unwrap_or_else(|| {
            Err(syn::Error::new(
                proc_macro2::Span::call_site(),
                "missing #[unit(...)] attribute",
            ))
        })
}
