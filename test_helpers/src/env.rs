//! Environment overrides for tests that read `DSL_DOC_SCHEMA`.
//!
//! A [`SchemaGuard`] holds a process-wide re-entrant lock for as long as it
//! lives, so tests that pin the schema variable never observe each other.
//! Dropping the guard puts the previous value back.
//!
//! ```
//! use test_helpers::env::{self, SCHEMA_VAR};
//!
//! {
//!     let _pinned = env::pin_schema("reduced");
//!     assert_eq!(std::env::var(SCHEMA_VAR).as_deref(), Ok("reduced"));
//! }
//! ```

use std::ffi::OsString;
use std::sync::LazyLock;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

/// Variable that selects the registry schema.
pub const SCHEMA_VAR: &str = "DSL_DOC_SCHEMA";

static LOCK: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// Keeps `DSL_DOC_SCHEMA` pinned until dropped.
#[must_use = "the previous value is restored when the guard drops"]
pub struct SchemaGuard {
    previous: Option<OsString>,
    _lock: ReentrantMutexGuard<'static, ()>,
}

impl std::fmt::Debug for SchemaGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaGuard")
            .field("previous", &self.previous)
            .finish_non_exhaustive()
    }
}

fn replace_schema(value: Option<&str>) -> SchemaGuard {
    let lock = LOCK.lock();
    let previous = std::env::var_os(SCHEMA_VAR);
    write_schema(value.map(OsString::from));
    SchemaGuard {
        previous,
        _lock: lock,
    }
}

fn write_schema(value: Option<OsString>) {
    match value {
        // SAFETY: callers hold `LOCK`, and every writer in this crate takes it.
        Some(value) => unsafe { std::env::set_var(SCHEMA_VAR, value) },
        // SAFETY: as above.
        None => unsafe { std::env::remove_var(SCHEMA_VAR) },
    }
}

/// Sets `DSL_DOC_SCHEMA` to `schema` for the guard's lifetime.
pub fn pin_schema(schema: &str) -> SchemaGuard {
    replace_schema(Some(schema))
}

/// Unsets `DSL_DOC_SCHEMA` so the configured default applies.
pub fn clear_schema() -> SchemaGuard {
    replace_schema(None)
}

impl Drop for SchemaGuard {
    fn drop(&mut self) {
        write_schema(self.previous.take());
    }
}
