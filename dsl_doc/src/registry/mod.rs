//! The method documentation registry.
//!
//! Registries are assembled by a [`RegistryBuilder`] during declaration time
//! and are immutable afterwards. Inherited records are resolved when the
//! builder finishes, so [`MethodDocRegistry::lookup`] is two map reads and
//! never walks an override chain.

mod builder;
pub mod declaration;
mod global;

use std::collections::{BTreeMap, BTreeSet};

pub use builder::RegistryBuilder;
pub use declaration::{Declaration, OwnerDeclaration, OwnerPath, StaticMethodId};
pub use global::global;

use crate::error::DocError;
use crate::metadata::MethodDocMetadata;
use crate::method::MethodId;
use crate::schema::SchemaVariant;

/// Read-only mapping from method identity to its effective documentation.
#[derive(Debug, Clone)]
pub struct MethodDocRegistry {
    schema: SchemaVariant,
    records: BTreeMap<MethodId, MethodDocMetadata>,
    // Every documented method mapped to the method whose record it uses.
    effective: BTreeMap<MethodId, MethodId>,
}

impl MethodDocRegistry {
    /// Starts declaration time for a new registry.
    #[must_use]
    pub const fn builder(schema: SchemaVariant) -> RegistryBuilder {
        RegistryBuilder::new(schema)
    }

    /// Builds a registry from every marker compiled into the program.
    ///
    /// Owners are qualified with the module of their `#[dsl_methods]` block,
    /// so same-named types in different modules stay distinct. Trait impls
    /// and `extends` parents become owner relations.
    ///
    /// # Errors
    ///
    /// Returns a [`DocError`] when a method is documented twice or sets a
    /// field the schema does not recognise. Inheritance cycles are rejected
    /// as well.
    pub fn from_inventory(schema: SchemaVariant) -> Result<Self, DocError> {
        let mut builder = RegistryBuilder::new(schema);
        for declaration in inventory::iter::<Declaration> {
            tracing::trace!(location = declaration.location, "collecting declaration");
            builder.declare(declaration.method.to_method_id(), declaration.fields())?;
        }
        let known: BTreeSet<String> = inventory::iter::<OwnerDeclaration>
            .into_iter()
            .map(|block| block.owner.qualified())
            .collect();
        for block in inventory::iter::<OwnerDeclaration> {
            let Some(written) = block.parent else {
                continue;
            };
            let parent = written.resolve_among(&known);
            if !known.contains(&parent) {
                tracing::debug!(parent = %parent, "parent owner has no #[dsl_methods] block");
            }
            builder.extend_owner(block.owner.qualified(), parent)?;
        }
        builder.build()
    }

    /// Schema the registry was built with.
    #[must_use]
    pub const fn schema(&self) -> SchemaVariant {
        self.schema
    }

    /// Documentation in effect for `method`, or `None` when absent.
    ///
    /// Under the full schema a method without its own record yields the
    /// record of the nearest ancestor that declares one.
    #[must_use]
    pub fn lookup(&self, method: &MethodId) -> Option<&MethodDocMetadata> {
        self.effective
            .get(method)
            .and_then(|origin| self.records.get(origin))
    }

    /// Method whose record [`Self::lookup`] returns for `method`.
    #[must_use]
    pub fn declaring_method(&self, method: &MethodId) -> Option<&MethodId> {
        self.effective.get(method)
    }

    /// Documented methods and their effective records, ordered by identity.
    pub fn iter(&self) -> impl Iterator<Item = (&MethodId, &MethodDocMetadata)> + '_ {
        self.effective
            .iter()
            .filter_map(|(method, origin)| self.records.get(origin).map(|meta| (method, meta)))
    }

    /// Documented methods belonging to `owner`, a qualified owner name.
    ///
    /// Under the full schema this includes methods the owner inherits from a
    /// trait or `extends` parent without restating them. A parent method
    /// with no record anywhere in its chain is not listed.
    pub fn methods_of<'a>(
        &'a self,
        owner: &'a str,
    ) -> impl Iterator<Item = (&'a MethodId, &'a MethodDocMetadata)> + 'a {
        self.iter().filter(move |(method, _)| method.owner() == owner)
    }

    /// Number of documented methods, inherited ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.effective.len()
    }

    /// Whether no method is documented.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effective.is_empty()
    }
}
