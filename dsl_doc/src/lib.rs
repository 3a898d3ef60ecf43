//! Documentation metadata for job-definition DSL methods.
//!
//! Methods of a DSL are tagged with a plugin name, an example XML snippet and
//! version markers. A documentation generator later reads the values back
//! through a [`MethodDocRegistry`] and renders reference pages.
//!
//! Declarations usually come from the attribute macros in the companion
//! `dsl_doc_macros` crate:
//!
//! ```
//! use dsl_doc::{MethodDocRegistry, MethodId, SchemaVariant, dsl_methods};
//!
//! pub struct ScmContext;
//!
//! #[dsl_methods]
//! impl ScmContext {
//!     #[dsl_method_doc(plugin = "git", example_xml = "<scm class='GitSCM'/>")]
//!     pub fn git(&mut self, url: &str) {
//!         let _ = url;
//!     }
//! }
//!
//! # fn main() -> Result<(), dsl_doc::DocError> {
//! let registry = MethodDocRegistry::from_inventory(SchemaVariant::Full)?;
//! // Owners are qualified with the module the block sits in.
//! let owner = format!("{}::ScmContext", module_path!());
//! let git = MethodId::new(owner, "git", "&mut self, &str");
//! assert_eq!(registry.lookup(&git).map(|m| m.plugin.as_str()), Some("git"));
//! # Ok(())
//! # }
//! ```

pub use dsl_doc_macros::{dsl_method_doc, dsl_methods};

mod config;
pub mod docs;
mod error;
mod metadata;
pub mod method;
pub mod registry;
mod schema;

pub use config::{DEFAULT_CONFIG_FILE, ENV_PREFIX, RegistryConfig};
pub use error::DocError;
pub use metadata::{DocFields, MethodDocMetadata};
pub use method::MethodId;
pub use registry::{MethodDocRegistry, RegistryBuilder, global};
pub use schema::{DocField, SchemaVariant};

#[doc(hidden)]
pub mod __private {
    pub use inventory;
}
