//! Intermediate representation (IR) types for method documentation.
//!
//! These structures are produced from a [`MethodDocRegistry`] and consumed by
//! external documentation generators.

use serde::Serialize;

use crate::metadata::MethodDocMetadata;
use crate::method::MethodId;
use crate::registry::MethodDocRegistry;
use crate::schema::{DocField, SchemaVariant};

use super::DSL_DOCS_IR_VERSION;

/// Top-level documentation payload for a registry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocsIr {
    /// IR schema version, see [`DSL_DOCS_IR_VERSION`].
    pub ir_version: String,
    /// Metadata shape the registry enforced.
    pub schema: SchemaVariant,
    /// Documented methods ordered by identity.
    pub methods: Vec<MethodDocEntry>,
}

/// Documentation for a single method.
///
/// Empty fields are omitted so renderers only see values worth printing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MethodDocEntry {
    /// Display form of the method identity.
    pub method: String,
    /// Owning type or trait.
    pub owner: String,
    /// Method name.
    pub name: String,
    /// Canonical parameter list.
    pub signature: String,
    /// Plugin the method belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,
    /// Example XML snippet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_xml: Option<String>,
    /// Version that introduced the method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_since: Option<String>,
    /// Version that deprecated the method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated_since: Option<String>,
    /// Ancestor whose record this entry reuses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<String>,
}

impl MethodDocEntry {
    fn new(
        method: &MethodId,
        metadata: &MethodDocMetadata,
        origin: Option<&MethodId>,
        schema: SchemaVariant,
    ) -> Self {
        let versioned = schema.supports(DocField::AvailableSinceVersion);
        Self {
            method: method.to_string(),
            owner: method.owner().to_owned(),
            name: method.name().to_owned(),
            signature: method.signature().to_owned(),
            plugin: non_empty(&metadata.plugin),
            example_xml: non_empty(&metadata.example_xml),
            available_since: non_empty(&metadata.available_since_version).filter(|_| versioned),
            deprecated_since: non_empty(&metadata.deprecated_since_version)
                .filter(|_| versioned),
            inherited_from: origin.filter(|o| *o != method).map(ToString::to_string),
        }
    }

    /// Whether the method carries a deprecation version.
    #[must_use]
    pub const fn is_deprecated(&self) -> bool {
        self.deprecated_since.is_some()
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

impl DocsIr {
    /// Snapshots every documented method in `registry`.
    #[must_use]
    pub fn from_registry(registry: &MethodDocRegistry) -> Self {
        let schema = registry.schema();
        let methods = registry
            .iter()
            .map(|(method, metadata)| {
                MethodDocEntry::new(method, metadata, registry.declaring_method(method), schema)
            })
            .collect();
        Self {
            ir_version: DSL_DOCS_IR_VERSION.to_owned(),
            schema,
            methods,
        }
    }
}
