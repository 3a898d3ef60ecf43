//! Method documentation records and the partial field sets they are built
//! from.

use serde::{Deserialize, Serialize};

use crate::schema::{DocField, SchemaVariant};

/// Documentation metadata attached to a method.
///
/// Every field is a plain string; a field that was never declared is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDocMetadata {
    /// Plugin or extension the method belongs to.
    pub plugin: String,
    /// Example XML snippet demonstrating usage.
    pub example_xml: String,
    /// Version that introduced the method.
    pub available_since_version: String,
    /// Version that deprecated the method.
    pub deprecated_since_version: String,
}

impl MethodDocMetadata {
    /// Value of `field`, empty when undeclared.
    #[must_use]
    pub fn get(&self, field: DocField) -> &str {
        match field {
            DocField::Plugin => &self.plugin,
            DocField::ExampleXml => &self.example_xml,
            DocField::AvailableSinceVersion => &self.available_since_version,
            DocField::DeprecatedSinceVersion => &self.deprecated_since_version,
        }
    }

    /// Non-empty fields recognised by `schema`, in declaration order.
    ///
    /// Renderers use this to decide which rows to emit.
    pub fn present_fields(
        &self,
        schema: SchemaVariant,
    ) -> impl Iterator<Item = (DocField, &str)> + '_ {
        schema
            .fields()
            .iter()
            .map(|field| (*field, self.get(*field)))
            .filter(|(_, value)| !value.is_empty())
    }

    /// Whether the method was marked deprecated.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        !self.deprecated_since_version.is_empty()
    }
}

/// A partial mapping over the documentation fields.
///
/// This is the argument to [`crate::RegistryBuilder::declare`]. Fields left
/// unset become empty strings in the resulting [`MethodDocMetadata`].
///
/// # Examples
///
/// ```
/// use dsl_doc::{DocFields, DocField};
///
/// let fields = DocFields::new().plugin("git").example_xml("<scm class='GitSCM'/>");
/// assert!(fields.is_set(DocField::Plugin));
/// assert!(!fields.is_set(DocField::AvailableSinceVersion));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocFields {
    plugin: Option<String>,
    example_xml: Option<String>,
    available_since_version: Option<String>,
    deprecated_since_version: Option<String>,
}

impl DocFields {
    /// An empty field set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `plugin`.
    #[must_use]
    pub fn plugin(mut self, value: impl Into<String>) -> Self {
        self.plugin = Some(value.into());
        self
    }

    /// Sets `exampleXml`. The text is stored uninterpreted.
    #[must_use]
    pub fn example_xml(mut self, value: impl Into<String>) -> Self {
        self.example_xml = Some(value.into());
        self
    }

    /// Sets `availableSinceVersion`.
    #[must_use]
    pub fn available_since_version(mut self, value: impl Into<String>) -> Self {
        self.available_since_version = Some(value.into());
        self
    }

    /// Sets `deprecatedSinceVersion`.
    #[must_use]
    pub fn deprecated_since_version(mut self, value: impl Into<String>) -> Self {
        self.deprecated_since_version = Some(value.into());
        self
    }

    /// Whether `field` was given a value, including an explicit empty one.
    #[must_use]
    pub const fn is_set(&self, field: DocField) -> bool {
        match field {
            DocField::Plugin => self.plugin.is_some(),
            DocField::ExampleXml => self.example_xml.is_some(),
            DocField::AvailableSinceVersion => self.available_since_version.is_some(),
            DocField::DeprecatedSinceVersion => self.deprecated_since_version.is_some(),
        }
    }

    /// Fields given a value, in declaration order.
    pub fn set_fields(&self) -> impl Iterator<Item = DocField> + '_ {
        DocField::ALL.into_iter().filter(|field| self.is_set(*field))
    }

    /// Converts into a record, defaulting unset fields to empty strings.
    #[must_use]
    pub fn into_metadata(self) -> MethodDocMetadata {
        MethodDocMetadata {
            plugin: self.plugin.unwrap_or_default(),
            example_xml: self.example_xml.unwrap_or_default(),
            available_since_version: self.available_since_version.unwrap_or_default(),
            deprecated_since_version: self.deprecated_since_version.unwrap_or_default(),
        }
    }
}
