//! Declaration-time construction of a [`MethodDocRegistry`].

use std::collections::{BTreeMap, BTreeSet};

use crate::error::DocError;
use crate::metadata::{DocFields, MethodDocMetadata};
use crate::method::MethodId;
use crate::schema::SchemaVariant;

use super::MethodDocRegistry;

/// Collects declarations and override relations, then freezes them.
///
/// Relations come in two granularities. [`Self::inherit`] ties one method to
/// the method it overrides. [`Self::extend_owner`] ties a whole owner to a
/// parent, so every documented method of the parent is also a method of the
/// owner, restated or not.
///
/// # Examples
///
/// ```
/// use dsl_doc::{DocFields, MethodId, RegistryBuilder, SchemaVariant};
///
/// # fn main() -> Result<(), dsl_doc::DocError> {
/// let scm = MethodId::new("JobParent", "scm", "&mut self");
/// let mut builder = RegistryBuilder::new(SchemaVariant::Full);
/// builder
///     .declare(scm.clone(), DocFields::new().plugin("git"))?
///     .extend_owner("MavenJob", "JobParent")?;
/// let registry = builder.build()?;
/// let inherited = scm.with_owner("MavenJob");
/// assert_eq!(registry.lookup(&inherited).map(|m| m.plugin.as_str()), Some("git"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    schema: SchemaVariant,
    declared: BTreeMap<MethodId, MethodDocMetadata>,
    ancestors: BTreeMap<MethodId, MethodId>,
    parents: BTreeMap<String, BTreeSet<String>>,
}

impl RegistryBuilder {
    /// Starts declaration time for `schema`.
    #[must_use]
    pub const fn new(schema: SchemaVariant) -> Self {
        Self {
            schema,
            declared: BTreeMap::new(),
            ancestors: BTreeMap::new(),
            parents: BTreeMap::new(),
        }
    }

    /// Schema the declarations are checked against.
    #[must_use]
    pub const fn schema(&self) -> SchemaVariant {
        self.schema
    }

    /// Attaches `fields` to `method`.
    ///
    /// Field contents are never inspected; unset fields become empty.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::DuplicateDeclaration`] if `method` already has a
    /// record and [`DocError::UnsupportedField`] if `fields` sets a key the
    /// schema does not recognise.
    pub fn declare(&mut self, method: MethodId, fields: DocFields) -> Result<&mut Self, DocError> {
        if let Some(field) = fields.set_fields().find(|f| !self.schema.supports(*f)) {
            return Err(DocError::UnsupportedField {
                method,
                field,
                schema: self.schema,
            });
        }
        if self.declared.contains_key(&method) {
            return Err(DocError::DuplicateDeclaration { method });
        }
        tracing::debug!(method = %method, "declared method documentation");
        self.declared.insert(method, fields.into_metadata());
        Ok(self)
    }

    /// Records that `method` overrides `ancestor`.
    ///
    /// Repeating an existing relation is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::ConflictingOverride`] if `method` already
    /// overrides a different ancestor, or [`DocError::CyclicOverride`] if
    /// `method` and `ancestor` are the same.
    pub fn inherit(&mut self, method: MethodId, ancestor: MethodId) -> Result<&mut Self, DocError> {
        if method == ancestor {
            return Err(DocError::CyclicOverride {
                cycle: format!("{method} -> {ancestor}"),
            });
        }
        match self.ancestors.get(&method).cloned() {
            Some(existing) if existing == ancestor => Ok(self),
            Some(existing) => Err(DocError::ConflictingOverride {
                method,
                existing,
                conflicting: ancestor,
            }),
            None => {
                self.ancestors.insert(method, ancestor);
                Ok(self)
            }
        }
    }

    /// Records that `owner` inherits every method of `parent`.
    ///
    /// An owner may have several parents, as a type may implement several
    /// traits. When more than one parent documents the same method, the
    /// parent that sorts first supplies the record.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::CyclicOverride`] if `owner` and `parent` are the
    /// same.
    pub fn extend_owner(
        &mut self,
        owner: impl Into<String>,
        parent: impl Into<String>,
    ) -> Result<&mut Self, DocError> {
        let (child, ancestor) = (owner.into(), parent.into());
        if child == ancestor {
            return Err(DocError::CyclicOverride {
                cycle: format!("{child} -> {ancestor}"),
            });
        }
        self.parents.entry(child).or_default().insert(ancestor);
        Ok(self)
    }

    /// Ends declaration time.
    ///
    /// Under an inheriting schema every override chain is resolved here, so
    /// lookups never walk ancestors. Methods an owner gains from a parent
    /// without restating them are materialised under the owner.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::CyclicOverride`] if a method chain or the owner
    /// graph loops.
    pub fn build(self) -> Result<MethodDocRegistry, DocError> {
        let mut effective: BTreeMap<MethodId, MethodId> = self
            .declared
            .keys()
            .map(|method| (method.clone(), method.clone()))
            .collect();

        if self.schema.inherits() {
            for method in self.ancestors.keys() {
                self.check_chain(method)?;
            }
            for (owner, members) in self.surfaces()? {
                for (name, signature) in members {
                    let method = MethodId::new(owner, name, signature);
                    if effective.contains_key(&method) {
                        continue;
                    }
                    if let Some(origin) = self.resolve(&method, &mut Vec::new())? {
                        effective.insert(method, origin);
                    }
                }
            }
        } else if !self.ancestors.is_empty() || !self.parents.is_empty() {
            tracing::debug!(
                schema = %self.schema,
                relations = self.ancestors.len(),
                owners = self.parents.len(),
                "schema does not inherit; override relations ignored"
            );
        }

        tracing::info!(
            schema = %self.schema,
            declared = self.declared.len(),
            documented = effective.len(),
            "built method documentation registry"
        );
        Ok(MethodDocRegistry {
            schema: self.schema,
            records: self.declared,
            effective,
        })
    }

    /// Walks the whole chain above `method` so a loop is reported even when
    /// a declared ancestor would end resolution before reaching it.
    fn check_chain(&self, method: &MethodId) -> Result<(), DocError> {
        let mut path = vec![method];
        let mut seen: BTreeSet<&MethodId> = BTreeSet::from([method]);
        let mut current = method;
        while let Some(parent) = self.ancestors.get(current) {
            if !seen.insert(parent) {
                let start = path.iter().position(|m| *m == parent).unwrap_or_default();
                return Err(cycle_error(path.iter().skip(start).copied(), parent));
            }
            path.push(parent);
            current = parent;
        }
        Ok(())
    }

    /// Method names and signatures each owner answers to, its parents'
    /// included.
    fn surfaces(&self) -> Result<BTreeMap<&str, BTreeSet<(&str, &str)>>, DocError> {
        let mut surfaces: BTreeMap<&str, BTreeSet<(&str, &str)>> = BTreeMap::new();
        for method in self.declared.keys().chain(self.ancestors.keys()) {
            surfaces
                .entry(method.owner())
                .or_default()
                .insert((method.name(), method.signature()));
        }
        for owner in self.owners_parents_first()? {
            let inherited: Vec<(&str, &str)> = self
                .parents_of(owner)
                .filter_map(|parent| surfaces.get(parent))
                .flatten()
                .copied()
                .collect();
            surfaces.entry(owner).or_default().extend(inherited);
        }
        Ok(surfaces)
    }

    fn parents_of<'a>(&'a self, owner: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.parents
            .get(owner)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    fn owners_parents_first(&self) -> Result<Vec<&str>, DocError> {
        let mut order = Vec::new();
        let mut done = BTreeSet::new();
        for owner in self.parents.keys() {
            self.visit_owner(owner, &mut Vec::new(), &mut done, &mut order)?;
        }
        Ok(order)
    }

    fn visit_owner<'a>(
        &'a self,
        owner: &'a str,
        path: &mut Vec<&'a str>,
        done: &mut BTreeSet<&'a str>,
        order: &mut Vec<&'a str>,
    ) -> Result<(), DocError> {
        if done.contains(owner) {
            return Ok(());
        }
        if let Some(start) = path.iter().position(|o| *o == owner) {
            return Err(cycle_error(path.iter().skip(start), &owner));
        }
        path.push(owner);
        for parent in self.parents_of(owner) {
            self.visit_owner(parent, path, done, order)?;
        }
        path.pop();
        done.insert(owner);
        order.push(owner);
        Ok(())
    }

    /// Nearest method with a record that `method` draws on: itself, then its
    /// override chain, then the same method on each parent owner.
    fn resolve(
        &self,
        method: &MethodId,
        visiting: &mut Vec<MethodId>,
    ) -> Result<Option<MethodId>, DocError> {
        if self.declared.contains_key(method) {
            return Ok(Some(method.clone()));
        }
        if let Some(start) = visiting.iter().position(|m| m == method) {
            return Err(cycle_error(visiting.iter().skip(start), method));
        }
        visiting.push(method.clone());
        let mut found = match self.ancestors.get(method) {
            Some(ancestor) => self.resolve(ancestor, visiting)?,
            None => None,
        };
        for parent in self.parents_of(method.owner()) {
            if found.is_some() {
                break;
            }
            found = self.resolve(&method.with_owner(parent), visiting)?;
        }
        visiting.pop();
        Ok(found)
    }
}

fn cycle_error<T: std::fmt::Display>(
    path: impl Iterator<Item = T>,
    back_to: impl std::fmt::Display,
) -> DocError {
    let cycle = path
        .map(|step| step.to_string())
        .chain(std::iter::once(back_to.to_string()))
        .collect::<Vec<_>>()
        .join(" -> ");
    DocError::CyclicOverride { cycle }
}
