//! Process-wide registry built once from compiled declarations.

use std::sync::OnceLock;

use crate::config::RegistryConfig;
use crate::error::DocError;

use super::MethodDocRegistry;

static GLOBAL: OnceLock<Result<MethodDocRegistry, DocError>> = OnceLock::new();

/// Returns the process-wide registry, building it on first use.
///
/// The schema comes from [`RegistryConfig::load`]. The outcome of the first
/// call, success or failure, is cached for the life of the process.
///
/// # Errors
///
/// Returns the [`DocError`] raised by configuration loading or by
/// [`MethodDocRegistry::from_inventory`].
pub fn global() -> Result<&'static MethodDocRegistry, DocError> {
    GLOBAL
        .get_or_init(|| {
            RegistryConfig::load()
                .and_then(|config| MethodDocRegistry::from_inventory(config.schema))
        })
        .as_ref()
        .map_err(Clone::clone)
}
