//! Procedural macros for `dsl_doc`.
//!
//! `#[dsl_methods]` marks an `impl` block or trait whose methods may carry a
//! `#[dsl_method_doc(...)]` marker. Each marker becomes a link-time
//! registration that `dsl_doc::MethodDocRegistry::from_inventory` collects.
//! Markers accept `plugin`, `example_xml`, `available_since_version` and
//! `deprecated_since_version` (camelCase spellings are accepted as well).

use proc_macro::TokenStream;
use syn::{Item, parse_macro_input};

mod expand;
mod parse;
mod signature;

/// Registers documentation markers found on the methods of an `impl` block
/// or trait definition.
///
/// The owner is the self type or trait, qualified with the block's module.
/// Options: `owner = "Name"` records `Name` verbatim instead, `extends =
/// "Parent"` makes the owner inherit every method of `Parent`, and `crate =
/// "path"` points generated code at a renamed `dsl_doc`. An `impl Trait for
/// Type` block inherits from the trait without options.
#[proc_macro_attribute]
pub fn dsl_methods(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut block_args = parse::BlockArgs::default();
    let parser = syn::meta::parser(|meta| block_args.parse(&meta));
    parse_macro_input!(args with parser);
    let item = parse_macro_input!(input as Item);
    expand::expand(&block_args, item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Documentation marker for a DSL method.
///
/// Only meaningful inside a `#[dsl_methods]` block, which strips it. Applied
/// anywhere else it reports a compile error.
#[proc_macro_attribute]
pub fn dsl_method_doc(_args: TokenStream, input: TokenStream) -> TokenStream {
    let item = proc_macro2::TokenStream::from(input);
    let span = item
        .clone()
        .into_iter()
        .next()
        .map_or_else(proc_macro2::Span::call_site, |token| token.span());
    let error = syn::Error::new(
        span,
        "#[dsl_method_doc] must be placed on a method inside a #[dsl_methods] impl block or trait",
    )
    .into_compile_error();
    quote::quote!(#error #item).into()
}
