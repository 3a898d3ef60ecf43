//! Registry configuration.
//!
//! Values are layered with `figment` in increasing precedence: built-in
//! defaults, an optional TOML file, then `DSL_DOC_*` environment variables.

use camino::Utf8Path;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::DocError;
use crate::schema::SchemaVariant;

/// File consulted by [`RegistryConfig::load`].
pub const DEFAULT_CONFIG_FILE: &str = "dsl-doc.toml";

/// Prefix for environment overrides, e.g. `DSL_DOC_SCHEMA=reduced`.
pub const ENV_PREFIX: &str = "DSL_DOC_";

/// Settings applied when building a registry from compiled declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Schema shape in force.
    pub schema: SchemaVariant,
}

impl RegistryConfig {
    /// Loads configuration from `dsl-doc.toml` in the working directory and
    /// the environment.
    ///
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::Config`] when a source holds an invalid value.
    pub fn load() -> Result<Self, DocError> {
        Self::load_from(Utf8Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Loads configuration, reading the TOML layer from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::Config`] when a source holds an invalid value.
    pub fn load_from(path: &Utf8Path) -> Result<Self, DocError> {
        let config: Self = Self::figment(path).extract()?;
        tracing::debug!(schema = %config.schema, path = %path, "loaded registry configuration");
        Ok(config)
    }

    /// The layered providers, exposed for callers that merge extra sources.
    #[must_use]
    pub fn figment(path: &Utf8Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}
