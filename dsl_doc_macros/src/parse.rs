//! Attribute parsing for `#[dsl_methods]` and `#[dsl_method_doc]`.

use heck::ToSnakeCase;
use proc_macro2::TokenStream;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Lit, LitStr, Meta};

/// Name of the method-level marker.
pub(crate) const MARKER: &str = "dsl_method_doc";

/// Keys accepted by the marker, in snake case.
pub(crate) const FIELD_KEYS: [&str; 4] = [
    "plugin",
    "example_xml",
    "available_since_version",
    "deprecated_since_version",
];

/// Options given to `#[dsl_methods(...)]`.
#[derive(Default)]
pub(crate) struct BlockArgs {
    pub owner: Option<LitStr>,
    pub extends: Option<LitStr>,
    pub crate_path: Option<syn::Path>,
}

impl BlockArgs {
    /// Prefix for `dsl_doc` paths in generated code; `crate = "..."` lets a
    /// renamed dependency still resolve.
    pub(crate) fn krate(&self) -> TokenStream {
        self.crate_path
            .as_ref()
            .map_or_else(|| quote! { ::dsl_doc }, |path| quote! { #path })
    }

    /// Applies one `key = value` pair.
    pub(crate) fn parse(&mut self, meta: &ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("owner") {
            set_once(&mut self.owner, lit_str(meta, "owner")?, meta, "owner")
        } else if meta.path.is_ident("extends") {
            set_once(&mut self.extends, lit_str(meta, "extends")?, meta, "extends")
        } else if meta.path.is_ident("crate") {
            let path = lit_str(meta, "crate")?.parse::<syn::Path>()?;
            set_once(&mut self.crate_path, path, meta, "crate")
        } else {
            Err(meta.error("unknown dsl_methods option; expected owner, extends or crate"))
        }
    }
}

/// Values captured from one `#[dsl_method_doc(...)]` marker.
#[derive(Default)]
pub(crate) struct MethodDocAttrs {
    pub plugin: Option<LitStr>,
    pub example_xml: Option<LitStr>,
    pub available_since_version: Option<LitStr>,
    pub deprecated_since_version: Option<LitStr>,
}

impl MethodDocAttrs {
    /// Parses a marker. Both `example_xml` and `exampleXml` spellings are
    /// accepted; unknown and repeated keys are errors.
    pub(crate) fn from_attribute(attr: &Attribute) -> syn::Result<Self> {
        let mut out = Self::default();
        if let Meta::Path(_) = attr.meta {
            return Ok(out);
        }
        attr.parse_nested_meta(|meta| {
            let Some(ident) = meta.path.get_ident() else {
                return Err(meta.error("expected a field name"));
            };
            let key = ident.to_string().to_snake_case();
            let slot = match key.as_str() {
                "plugin" => &mut out.plugin,
                "example_xml" => &mut out.example_xml,
                "available_since_version" => &mut out.available_since_version,
                "deprecated_since_version" => &mut out.deprecated_since_version,
                _ => {
                    return Err(meta.error(format!(
                        "unknown key `{ident}`; expected one of {}",
                        FIELD_KEYS.join(", ")
                    )));
                }
            };
            let value = lit_str(&meta, &key)?;
            set_once(slot, value, &meta, &key)
        })?;
        Ok(out)
    }
}

/// Removes every marker from `attrs`, returning the parsed values.
///
/// A second marker on the same method is rejected so that a method never
/// carries more than one record.
pub(crate) fn take_method_doc(attrs: &mut Vec<Attribute>) -> syn::Result<Option<MethodDocAttrs>> {
    let mut found: Option<MethodDocAttrs> = None;
    let mut seen = 0_usize;
    let mut error: Option<syn::Error> = None;
    attrs.retain(|attr| {
        if !is_marker(attr) {
            return true;
        }
        seen += 1;
        let parsed = if seen > 1 {
            Err(syn::Error::new_spanned(
                attr,
                "a method can carry only one #[dsl_method_doc] marker",
            ))
        } else {
            MethodDocAttrs::from_attribute(attr)
        };
        match parsed {
            Ok(values) => found = Some(values),
            Err(err) => match error.as_mut() {
                Some(existing) => existing.combine(err),
                None => error = Some(err),
            },
        }
        false
    });
    error.map_or(Ok(found), Err)
}

/// Matches `#[dsl_method_doc]` however it is qualified, such as
/// `#[dsl_doc::dsl_method_doc]`.
fn is_marker(attr: &Attribute) -> bool {
    attr.path()
        .segments
        .last()
        .is_some_and(|segment| segment.ident == MARKER)
}

fn set_once<T>(
    slot: &mut Option<T>,
    value: T,
    meta: &ParseNestedMeta,
    key: &str,
) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("`{key}` is set more than once")));
    }
    *slot = Some(value);
    Ok(())
}

fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    let lit = meta.value()?.parse::<Lit>()?;
    match lit {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(
            other.span(),
            format!("{key} must be a string"),
        )),
    }
}
