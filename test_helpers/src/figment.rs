//! `figment::Jail` wrappers for configuration tests.
//!
//! A jail gives each test a scratch working directory and a private view of
//! the environment, the two inputs `RegistryConfig::load` reads.

use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;
use figment::Jail;

/// Runs `body` in a fresh jail and hands back what it produced.
///
/// # Errors
///
/// Fails when the jail cannot be set up or `body` returns an error.
pub fn with_jail<T>(body: impl FnOnce(&mut Jail) -> figment::error::Result<T>) -> Result<T> {
    let mut produced = None;
    Jail::try_with(|jail| body(jail).map(|value| produced = Some(value)))
        .map_err(|err| anyhow!("jail failed: {err}"))?;
    produced.context("jail body produced no value")
}

/// Creates `file_name` in the jail with a single `schema` key and returns its
/// absolute path.
///
/// # Errors
///
/// Fails when the file cannot be created or the jail lives on a non-UTF-8
/// path.
pub fn write_schema_file(
    jail: &mut Jail,
    file_name: &str,
    schema: &str,
) -> figment::error::Result<Utf8PathBuf> {
    jail.create_file(file_name, &format!("schema = {schema:?}\n"))?;
    let root = Utf8PathBuf::try_from(jail.directory().to_path_buf())
        .map_err(|err| jail_error(&err))?;
    Ok(root.join(file_name))
}

/// Wraps a foreign error so it can leave a jail body.
pub fn jail_error(err: &impl ToString) -> figment::Error {
    figment::Error::from(err.to_string())
}
