//! Link-time declarations submitted by the attribute macros.
//!
//! `#[dsl_methods]` submits one [`OwnerDeclaration`] per annotated block and
//! one [`Declaration`] per `#[dsl_method_doc(...)]` marker through
//! [`inventory::submit!`]. Both are plain `'static` data so they can be
//! built in constant context. Owners are stored as written, next to the
//! `module_path!()` of the block, and qualified when the registry is built.

use std::collections::BTreeSet;

use crate::metadata::DocFields;
use crate::method::MethodId;

/// Owner of a method as the macro saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerPath {
    /// Recorded verbatim, from `#[dsl_methods(owner = "...")]`.
    Exact(&'static str),
    /// A type or trait path written inside `module`.
    Relative {
        /// `module_path!()` of the annotated block.
        module: &'static str,
        /// Path as written, generic arguments removed.
        path: &'static str,
    },
}

impl OwnerPath {
    /// Module-qualified owner name.
    ///
    /// `crate::`, `self::` and `super::` prefixes are applied to the block's
    /// module; any other path is taken relative to it.
    ///
    /// ```
    /// use dsl_doc::registry::OwnerPath;
    ///
    /// let trait_ref = OwnerPath::Relative { module: "jobs::maven", path: "super::Context" };
    /// assert_eq!(trait_ref.qualified(), "jobs::Context");
    /// let inherent = OwnerPath::Relative { module: "jobs::maven", path: "MavenJob" };
    /// assert_eq!(inherent.qualified(), "jobs::maven::MavenJob");
    /// ```
    #[must_use]
    pub fn qualified(&self) -> String {
        match *self {
            Self::Exact(owner) => owner.to_owned(),
            Self::Relative { module, path } => qualify(module, path),
        }
    }

    /// Resolves a parent reference against the owners of every annotated
    /// block.
    ///
    /// The lexical qualification wins when it names a known owner. Otherwise
    /// the path is tried as an absolute owner, then by its last segment
    /// when exactly one known owner ends with it, which covers traits
    /// brought in with `use`. Failing all three, the lexical form is kept.
    #[must_use]
    pub fn resolve_among(&self, known: &BTreeSet<String>) -> String {
        let Self::Relative { path, .. } = *self else {
            return self.qualified();
        };
        let lexical = self.qualified();
        if known.contains(&lexical) {
            return lexical;
        }
        let written = path.trim().trim_start_matches("::");
        if known.contains(written) {
            return written.to_owned();
        }
        let name = last_segment(written);
        let mut candidates = known.iter().filter(|owner| last_segment(owner) == name);
        match (candidates.next(), candidates.next()) {
            (Some(only), None) => only.clone(),
            _ => lexical,
        }
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path).trim()
}

fn qualify(module: &str, path: &str) -> String {
    let written = path.trim();
    if let Some(absolute) = written.strip_prefix("::") {
        return absolute.to_owned();
    }
    let mut base: Vec<&str> = module.split("::").collect();
    let mut segments = written.split("::").map(str::trim).peekable();
    match segments.peek() {
        Some(&"crate") => {
            base.truncate(1);
            segments.next();
        }
        Some(&"self") => {
            segments.next();
        }
        _ => {}
    }
    while segments.next_if_eq(&"super").is_some() {
        if base.len() > 1 {
            base.pop();
        }
    }
    base.extend(segments);
    base.join("::")
}

/// Method identity in constant form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticMethodId {
    /// Owning type or trait.
    pub owner: OwnerPath,
    /// Method name.
    pub name: &'static str,
    /// Parameter list as rendered by the macro; canonicalised on conversion.
    pub signature: &'static str,
}

impl StaticMethodId {
    /// Creates a constant identity.
    #[must_use]
    pub const fn new(owner: OwnerPath, name: &'static str, signature: &'static str) -> Self {
        Self {
            owner,
            name,
            signature,
        }
    }

    /// Converts into an owned, canonical [`MethodId`] with a qualified owner.
    #[must_use]
    pub fn to_method_id(&self) -> MethodId {
        MethodId::new(self.owner.qualified(), self.name, self.signature)
    }
}

/// A `#[dsl_method_doc(...)]` marker captured at compile time.
#[derive(Debug, Clone, Copy)]
pub struct Declaration {
    /// Annotated method.
    pub method: StaticMethodId,
    /// `plugin` value, if given.
    pub plugin: Option<&'static str>,
    /// `example_xml` value, if given.
    pub example_xml: Option<&'static str>,
    /// `available_since_version` value, if given.
    pub available_since_version: Option<&'static str>,
    /// `deprecated_since_version` value, if given.
    pub deprecated_since_version: Option<&'static str>,
    /// `file:line` of the enclosing `#[dsl_methods]` block.
    pub location: &'static str,
}

impl Declaration {
    /// The declared values as a partial field set.
    #[must_use]
    pub fn fields(&self) -> DocFields {
        let mut fields = DocFields::new();
        if let Some(value) = self.plugin {
            fields = fields.plugin(value);
        }
        if let Some(value) = self.example_xml {
            fields = fields.example_xml(value);
        }
        if let Some(value) = self.available_since_version {
            fields = fields.available_since_version(value);
        }
        if let Some(value) = self.deprecated_since_version {
            fields = fields.deprecated_since_version(value);
        }
        fields
    }
}

/// One `#[dsl_methods]` block: its owner and, for trait impls and
/// `extends`, the owner it inherits from.
#[derive(Debug, Clone, Copy)]
pub struct OwnerDeclaration {
    /// Owner of the block's methods.
    pub owner: OwnerPath,
    /// Implemented trait or `extends` parent.
    pub parent: Option<OwnerPath>,
}

inventory::collect!(Declaration);
inventory::collect!(OwnerDeclaration);
