//! # Publication Sources
//!
//! Publications can be refreshed from an external bibliographic source. The
//! engine only sees the capability below: fetch the full list, or fail. How the
//! list is obtained (a remote registry keyed by a researcher id, a file, a fixed
//! fallback) is the implementor's business.
//!
//! The sync contract toward the store lives in [`crate::commands::sync`]: a
//! successful fetch replaces the store wholesale, a failed one leaves it alone.

use std::path::{Path, PathBuf};

use crate::error::{FolioError, Result};
use crate::model::Publication;
use crate::store::{file, seed};

/// Anything that can produce a complete publication list.
pub trait PublicationSource {
    /// Short human-readable name for messages and logs.
    fn name(&self) -> String;

    fn fetch_publications(&self) -> Result<Vec<Publication>>;
}

/// Always returns the built-in fallback list.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackSource;

impl PublicationSource for FallbackSource {
    fn name(&self) -> String {
        "built-in publications".to_string()
    }

    fn fetch_publications(&self) -> Result<Vec<Publication>> {
        Ok(seed::fallback_publications())
    }
}

/// Reads publications from a JSON file (an export of the remote registry).
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PublicationSource for JsonFileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_publications(&self) -> Result<Vec<Publication>> {
        file::load_records(&self.path).map_err(|e| {
            FolioError::Sync(format!("could not read {}: {}", self.path.display(), e))
        })
    }
}
