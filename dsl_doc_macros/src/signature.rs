//! Rendering of method signatures into identity strings.
//!
//! Only the receiver and the parameter types take part; parameter names are
//! left out so that an override with renamed arguments keeps the identity of
//! the method it overrides. `dsl_doc` canonicalises the whitespace.

use quote::ToTokens;
use syn::{FnArg, Receiver, Signature};

/// Renders the parameter list of `sig`, e.g. `& mut self , & str`.
pub(crate) fn render(sig: &Signature) -> String {
    sig.inputs
        .iter()
        .map(|arg| match arg {
            FnArg::Receiver(receiver) => render_receiver(receiver),
            FnArg::Typed(typed) => typed.ty.to_token_stream().to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_receiver(receiver: &Receiver) -> String {
    if receiver.colon_token.is_some() {
        return format!("self: {}", receiver.ty.to_token_stream());
    }
    match (&receiver.reference, receiver.mutability) {
        (Some((_, Some(lifetime))), Some(_)) => format!("&{lifetime} mut self"),
        (Some((_, Some(lifetime))), None) => format!("&{lifetime} self"),
        (Some((_, None)), Some(_)) => String::from("&mut self"),
        (Some((_, None)), None) => String::from("&self"),
        // `mut self` binds mutably but still takes `self` by value.
        (None, _) => String::from("self"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use syn::parse_quote;

    #[rstest]
    #[case::shared(parse_quote!(fn f(&self)), "&self")]
    #[case::exclusive(parse_quote!(fn f(&mut self, url: &str)), "&mut self, & str")]
    #[case::by_value(parse_quote!(fn f(mut self)), "self")]
    #[case::boxed(parse_quote!(fn f(self: Box<Self>)), "self: Box < Self >")]
    #[case::lifetime(parse_quote!(fn f(&'a mut self)), "&'a mut self")]
    #[case::static_fn(parse_quote!(fn f(name: String, count: u8)), "String, u8")]
    #[case::closure(parse_quote!(fn f(&mut self, body: impl FnOnce(&mut StepContext))), "&mut self, impl FnOnce (& mut StepContext)")]
    fn renders_types_only(#[case] sig: Signature, #[case] expected: &str) {
        assert_eq!(squash(&render(&sig)), squash(expected));
    }

    // Token spacing is an implementation detail of `proc_macro2`.
    fn squash(text: &str) -> String {
        text.split_whitespace().collect()
    }

    #[rstest]
    fn renamed_parameters_render_identically() {
        let a: Signature = parse_quote!(fn f(&mut self, url: &str));
        let b: Signature = parse_quote!(fn f(&mut self, remote: &str));
        assert_eq!(render(&a), render(&b));
    }
}
