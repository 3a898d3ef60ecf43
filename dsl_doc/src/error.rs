//! Errors raised while declaring metadata or loading configuration.
//!
//! Lookups never fail; everything here happens before a registry is
//! published.

use figment::Error as FigmentError;
use thiserror::Error;

use crate::method::MethodId;
use crate::schema::{DocField, SchemaVariant};

/// Errors produced at declaration time.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum DocError {
    /// A method was given a second metadata record.
    #[error("method '{method}' already declares documentation metadata")]
    DuplicateDeclaration {
        /// Method that was declared twice.
        method: MethodId,
    },

    /// A declaration used a field the active schema does not recognise.
    #[error("method '{method}' declares '{field}', which the {schema} schema does not recognise")]
    UnsupportedField {
        /// Method carrying the declaration.
        method: MethodId,
        /// Offending field.
        field: DocField,
        /// Schema in force when the declaration was recorded.
        schema: SchemaVariant,
    },

    /// A method was registered as overriding two different ancestors.
    #[error("method '{method}' overrides both '{existing}' and '{conflicting}'")]
    ConflictingOverride {
        /// Overriding method.
        method: MethodId,
        /// Ancestor recorded first.
        existing: MethodId,
        /// Ancestor that clashed with it.
        conflicting: MethodId,
    },

    /// An override chain or the owner graph loops back on itself.
    #[error("cyclic override chain detected: {cycle}")]
    CyclicOverride {
        /// Methods or owners participating in the cycle, joined by `->`.
        cycle: String,
    },

    /// Registry configuration could not be gathered.
    #[error("failed to load registry configuration: {0}")]
    Config(#[from] Box<FigmentError>),
}

impl From<FigmentError> for DocError {
    fn from(err: FigmentError) -> Self {
        Self::Config(Box::new(err))
    }
}
