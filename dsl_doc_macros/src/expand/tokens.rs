//! Token builders for the registrations emitted next to a block.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::LitStr;

use crate::parse::MethodDocAttrs;

/// How generated code names an owner.
pub(crate) enum OwnerRef {
    /// Verbatim, from `owner = "..."`.
    Exact(LitStr),
    /// A path as written, qualified at run time with `module_path!()`.
    Relative(String),
}

impl OwnerRef {
    fn tokens(&self, krate: &TokenStream) -> TokenStream {
        match self {
            Self::Exact(owner) => quote! { #krate::registry::OwnerPath::Exact(#owner) },
            Self::Relative(written) => {
                let path = LitStr::new(written, Span::call_site());
                quote! {
                    #krate::registry::OwnerPath::Relative {
                        module: ::core::module_path!(),
                        path: #path,
                    }
                }
            }
        }
    }
}

/// Identity parts of one method inside the block being expanded.
pub(crate) struct MethodRef<'a> {
    pub owner: &'a OwnerRef,
    pub name: String,
    pub signature: String,
}

fn option_tokens(value: Option<&LitStr>) -> TokenStream {
    value.map_or_else(
        || quote! { ::core::option::Option::None },
        |lit| quote! { ::core::option::Option::Some(#lit) },
    )
}

/// Submits a `Declaration` for `method`.
pub(crate) fn declaration_tokens(
    krate: &TokenStream,
    method: &MethodRef<'_>,
    values: &MethodDocAttrs,
) -> TokenStream {
    let owner = method.owner.tokens(krate);
    let name = LitStr::new(&method.name, Span::call_site());
    let signature = LitStr::new(&method.signature, Span::call_site());
    let plugin = option_tokens(values.plugin.as_ref());
    let example_xml = option_tokens(values.example_xml.as_ref());
    let available = option_tokens(values.available_since_version.as_ref());
    let deprecated = option_tokens(values.deprecated_since_version.as_ref());
    quote! {
        #krate::__private::inventory::submit! {
            #krate::registry::Declaration {
                method: #krate::registry::StaticMethodId::new(#owner, #name, #signature),
                plugin: #plugin,
                example_xml: #example_xml,
                available_since_version: #available,
                deprecated_since_version: #deprecated,
                location: ::core::concat!(::core::file!(), ":", ::core::line!()),
            }
        }
    }
}

/// Submits the `OwnerDeclaration` for a block, linking it to `parent` when
/// the block implements a trait or names one with `extends`.
pub(crate) fn owner_tokens(
    krate: &TokenStream,
    owner: &OwnerRef,
    parent: Option<&OwnerRef>,
) -> TokenStream {
    let owner_path = owner.tokens(krate);
    let parent_path = parent.map_or_else(
        || quote! { ::core::option::Option::None },
        |inherited| {
            let inherited = inherited.tokens(krate);
            quote! { ::core::option::Option::Some(#inherited) }
        },
    );
    quote! {
        #krate::__private::inventory::submit! {
            #krate::registry::OwnerDeclaration {
                owner: #owner_path,
                parent: #parent_path,
            }
        }
    }
}
