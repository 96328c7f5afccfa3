use proc_macro::TokenStream;
use quote::quote;
use std::collections::HashSet;
use syn::{parse_macro_input, Data, DeriveInput, Expr, ExprLit, ExprUnary, Fields, Lit, UnOp};

use crate::utils::{get_attr_string, snake_case};

/// Read an integer literal discriminant (optionally negated)
fn literal_code(expr: &Expr) -> syn::Result<i64> {
    match expr {
        Expr::Lit(ExprLit { lit: Lit::Int(int), .. }) => int.base10_parse::<i64>(),
        Expr::Unary(ExprUnary { op: UnOp::Neg(_), expr, .. }) => literal_code(expr).map(|code| -code),
        other => Err(syn::Error::new_spanned(
            other,
            "EnumDefinition requires integer literal discriminants",
        )),
    }
}

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(name, "EnumDefinition can only be derived for enums")
            .to_compile_error()
            .into();
    };

    if data_enum.variants.is_empty() {
        return syn::Error::new_spanned(name, "EnumDefinition requires at least one variant")
            .to_compile_error()
            .into();
    }

    let mut pairs = Vec::new();
    let mut key_arms = Vec::new();
    let mut from_arms = Vec::new();
    let mut seen_keys = HashSet::new();
    let mut next_code: i64 = 0;

    for variant in data_enum.variants.iter() {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new_spanned(variant, "EnumDefinition variants cannot carry data")
                .to_compile_error()
                .into();
        }

        let code = match &variant.discriminant {
            Some((_, expr)) => match literal_code(expr) {
                Ok(code) => code,
                Err(e) => return e.to_compile_error().into(),
            },
            None => next_code,
        };
        next_code = code + 1;

        let key = variant
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident("enum_ext"))
            .find_map(|attr| get_attr_string(attr, "rename"))
            .unwrap_or_else(|| snake_case(&variant.ident.to_string()));

        if !seen_keys.insert(key.clone()) {
            return syn::Error::new_spanned(variant, format!("duplicate enum key '{}'", key))
                .to_compile_error()
                .into();
        }

        let ident = &variant.ident;
        pairs.push(quote! { (#key, #code) });
        key_arms.push(quote! { Self::#ident => #key });
        from_arms.push(quote! { #key => Some(Self::#ident) });
    }

    let expanded = quote! {
        impl ::enum_ext::HasEnumDefinition for #name {
            fn enum_definition() -> ::enum_ext::EnumDefinition {
                ::enum_ext::EnumDefinition::from_static(&[#(#pairs),*])
            }

            fn as_key(&self) -> &'static str {
                match self {
                    #(#key_arms,)*
                }
            }

            fn from_key(key: &str) -> Option<Self> {
                match key {
                    #(#from_arms,)*
                    _ => None,
                }
            }
        }
    };

    TokenStream::from(expanded)
}
