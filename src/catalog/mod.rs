//! Store catalog and its process-wide instance
//!
//! The catalog is loaded once at startup and only read afterwards, so it
//! can be shared by reference across request handlers and threads.

pub mod shelves;

pub use shelves::Catalog;

use crate::core::error::{AssistError, Result};
use std::sync::OnceLock;

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Install the process-wide catalog (can only be done once)
pub fn install(catalog: Catalog) -> Result<&'static Catalog> {
    CATALOG
        .set(catalog)
        .map_err(|_| AssistError::InvalidCatalog("a catalog is already installed".into()))?;
    installed().ok_or_else(|| AssistError::InvalidCatalog("catalog install failed".into()))
}

/// The process-wide catalog, if one has been installed
pub fn installed() -> Option<&'static Catalog> {
    CATALOG.get()
}
