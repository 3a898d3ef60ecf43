//! Schema shapes and the fields they recognise.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A documentation field attachable to a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocField {
    /// Plugin or extension the method belongs to.
    Plugin,
    /// Example XML snippet demonstrating usage.
    ExampleXml,
    /// Version that introduced the method.
    AvailableSinceVersion,
    /// Version that deprecated the method.
    DeprecatedSinceVersion,
}

impl DocField {
    /// All fields, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Plugin,
        Self::ExampleXml,
        Self::AvailableSinceVersion,
        Self::DeprecatedSinceVersion,
    ];

    /// External key used by documentation consumers.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Plugin => "plugin",
            Self::ExampleXml => "exampleXml",
            Self::AvailableSinceVersion => "availableSinceVersion",
            Self::DeprecatedSinceVersion => "deprecatedSinceVersion",
        }
    }
}

impl fmt::Display for DocField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which metadata shape a registry enforces.
///
/// The `full` shape carries all four fields and is inherited by overriding
/// methods. The `reduced` shape carries only `plugin` and `exampleXml` and
/// every method must declare its own record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVariant {
    /// Four fields, inherited by overriding methods.
    #[default]
    Full,
    /// Two fields, never inherited.
    Reduced,
}

impl SchemaVariant {
    /// Fields recognised by this shape.
    #[must_use]
    pub fn fields(self) -> &'static [DocField] {
        match self {
            Self::Full => &DocField::ALL,
            Self::Reduced => &DocField::ALL[..2],
        }
    }

    /// Whether `field` is part of this shape.
    #[must_use]
    pub fn supports(self, field: DocField) -> bool {
        self.fields().contains(&field)
    }

    /// Whether overriding methods inherit their ancestor's record.
    #[must_use]
    pub const fn inherits(self) -> bool {
        matches!(self, Self::Full)
    }
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Full => "full",
            Self::Reduced => "reduced",
        })
    }
}
