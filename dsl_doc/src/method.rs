//! Stable identities for DSL methods.
//!
//! A [`MethodId`] combines the owning type or trait, the method name, and a
//! canonical rendering of the parameter list. The attribute macros emit the
//! same three parts, so identities built by hand compare equal to the ones
//! registered at compile time.

use std::fmt;

use serde::Serialize;

/// Identity of a method carrying documentation metadata.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MethodId {
    owner: String,
    name: String,
    signature: String,
}

impl MethodId {
    /// Builds an identity, canonicalising `signature`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsl_doc::MethodId;
    ///
    /// let a = MethodId::new("ScmContext", "git", "& mut self , & str");
    /// let b = MethodId::new("ScmContext", "git", "&mut self, &str");
    /// assert_eq!(a, b);
    /// assert_eq!(a.to_string(), "ScmContext::git(&mut self,&str)");
    /// ```
    #[must_use]
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        signature: impl AsRef<str>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            signature: canonical_signature(signature.as_ref()),
        }
    }

    /// Type or trait that declares the method, module-qualified when
    /// recorded by `#[dsl_methods]`.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Method name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical parameter list.
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Identity of the same-named, same-signature method on `owner`.
    ///
    /// Used to address the method this one overrides.
    #[must_use]
    pub fn with_owner(&self, owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: self.name.clone(),
            signature: self.signature.clone(),
        }
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}({})", self.owner, self.name, self.signature)
    }
}

/// Canonicalises a rendered parameter list.
///
/// Whitespace is dropped unless it separates two identifier characters, so
/// token-stream renderings such as `Vec < String >` and hand-written
/// `Vec<String>` agree. Lifetimes keep their separating space
/// (`&'a mut str`).
///
/// # Examples
///
/// ```
/// use dsl_doc::method::canonical_signature;
///
/// assert_eq!(canonical_signature("& mut self , Vec < String >"), "&mut self,Vec<String>");
/// assert_eq!(canonical_signature("&'a mut str"), "&'a mut str");
/// ```
#[must_use]
pub fn canonical_signature(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && out.chars().next_back().is_some_and(is_ident_char) && is_ident_char(ch)
        {
            out.push(' ');
        }
        pending_space = false;
        out.push(ch);
    }
    out
}

const fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
