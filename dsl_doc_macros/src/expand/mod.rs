//! Expansion of `#[dsl_methods]` blocks.
//!
//! The annotated `impl` or `trait` item is re-emitted with its markers
//! stripped, followed by one `inventory::submit!` for the block's owner and
//! one per documented method.

mod tokens;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, ImplItem, Item, ItemImpl, ItemTrait, Path, Signature, TraitItem, Type};

use crate::parse::{BlockArgs, take_method_doc};
use crate::signature;

use tokens::{MethodRef, OwnerRef, declaration_tokens, owner_tokens};

/// Expands a `#[dsl_methods]` item.
pub(crate) fn expand(args: &BlockArgs, item: Item) -> syn::Result<TokenStream> {
    match item {
        Item::Impl(block) => expand_impl(args, block),
        Item::Trait(block) => expand_trait(args, block),
        other => Err(syn::Error::new_spanned(
            other,
            "#[dsl_methods] applies to impl blocks and trait definitions",
        )),
    }
}

fn expand_impl(args: &BlockArgs, mut block: ItemImpl) -> syn::Result<TokenStream> {
    let krate = args.krate();
    let owner = match &args.owner {
        Some(owner) => OwnerRef::Exact(owner.clone()),
        None => OwnerRef::Relative(type_path(&block.self_ty)?),
    };
    let implemented_trait = block.trait_.as_ref().map(|(_, path, _)| path_text(path));
    let parent = match (implemented_trait, &args.extends) {
        (Some(_), Some(extends)) => {
            return Err(syn::Error::new_spanned(
                extends,
                "extends cannot be combined with a trait impl; the trait is the ancestor",
            ));
        }
        (Some(trait_path), None) => Some(OwnerRef::Relative(trait_path)),
        (None, Some(extends)) => Some(OwnerRef::Relative(extends.value())),
        (None, None) => None,
    };

    let methods = block.items.iter_mut().filter_map(|item| match item {
        ImplItem::Fn(method) => Some((&mut method.attrs, &method.sig)),
        _ => None,
    });
    let mut submissions = registrations(&krate, &owner, methods)?;
    submissions.push(owner_tokens(&krate, &owner, parent.as_ref()));
    Ok(quote! {
        #block
        #( #submissions )*
    })
}

fn expand_trait(args: &BlockArgs, mut block: ItemTrait) -> syn::Result<TokenStream> {
    let krate = args.krate();
    let owner = match &args.owner {
        Some(owner) => OwnerRef::Exact(owner.clone()),
        None => OwnerRef::Relative(block.ident.to_string()),
    };
    let parent = args
        .extends
        .as_ref()
        .map(|extends| OwnerRef::Relative(extends.value()));

    let methods = block.items.iter_mut().filter_map(|item| match item {
        TraitItem::Fn(method) => Some((&mut method.attrs, &method.sig)),
        _ => None,
    });
    let mut submissions = registrations(&krate, &owner, methods)?;
    submissions.push(owner_tokens(&krate, &owner, parent.as_ref()));
    Ok(quote! {
        #block
        #( #submissions )*
    })
}

/// Strips markers from `methods` and builds their registrations.
///
/// Every marker error in the block is reported, not only the first.
fn registrations<'a>(
    krate: &TokenStream,
    owner: &OwnerRef,
    methods: impl Iterator<Item = (&'a mut Vec<Attribute>, &'a Signature)>,
) -> syn::Result<Vec<TokenStream>> {
    let mut submissions = Vec::new();
    let mut errors: Option<syn::Error> = None;
    for (attrs, sig) in methods {
        let method_ref = MethodRef {
            owner,
            name: sig.ident.to_string(),
            signature: signature::render(sig),
        };
        match take_method_doc(attrs) {
            Ok(Some(values)) => submissions.push(declaration_tokens(krate, &method_ref, &values)),
            Ok(None) => {}
            Err(err) => push_error(&mut errors, err),
        }
    }
    errors.map_or(Ok(submissions), Err)
}

fn push_error(errors: &mut Option<syn::Error>, err: syn::Error) {
    match errors {
        Some(existing) => existing.combine(err),
        None => *errors = Some(err),
    }
}

/// Path of an impl's self type as written, without generic arguments.
fn type_path(ty: &Type) -> syn::Result<String> {
    match ty {
        Type::Path(path) if path.qself.is_none() => Ok(path_text(&path.path)),
        Type::Group(group) => type_path(&group.elem),
        Type::Paren(paren) => type_path(&paren.elem),
        other => Err(syn::Error::new_spanned(
            other,
            "cannot name this type; pass #[dsl_methods(owner = \"...\")]",
        )),
    }
}

fn path_text(path: &Path) -> String {
    let segments = path
        .segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect::<Vec<_>>()
        .join("::");
    if path.leading_colon.is_some() {
        format!("::{segments}")
    } else {
        segments
    }
}
