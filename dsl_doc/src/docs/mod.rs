//! Documentation export for method metadata.
//!
//! This module defines the IR handed to documentation generators. Rendering
//! is left to those generators.

mod ir;

pub use ir::{DocsIr, MethodDocEntry};

use crate::registry::MethodDocRegistry;

/// Current IR schema version.
pub const DSL_DOCS_IR_VERSION: &str = "1.0";

/// Implemented by sources that can emit the documentation IR.
pub trait MethodDocs {
    /// Returns the documentation IR for every documented method.
    fn doc_ir(&self) -> DocsIr;

    /// Serialises [`Self::doc_ir`] as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialisation fails.
    #[cfg(feature = "serde_json")]
    fn doc_ir_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.doc_ir())
    }
}

impl MethodDocs for MethodDocRegistry {
    fn doc_ir(&self) -> DocsIr {
        DocsIr::from_registry(self)
    }
}
