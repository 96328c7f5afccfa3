use proc_macro::TokenStream;

mod enum_definition;
mod utils;

/// Derive `enum_ext::HasEnumDefinition` for a fieldless enum.
///
/// Keys are the snake_cased variant names unless renamed with
/// `#[enum_ext(rename = "...")]`. Codes follow the explicit discriminants,
/// counting up from the previous one where a variant has none.
#[proc_macro_derive(EnumDefinition, attributes(enum_ext))]
pub fn enum_definition_derive(input: TokenStream) -> TokenStream {
    enum_definition::derive(input)
}
