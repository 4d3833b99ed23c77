//! Catalog store
//!
//! Loads the destination catalog from its source once and serves the cached
//! copy to every later query.

use std::sync::OnceLock;
use tracing::{debug, info};

use super::{Catalog, CatalogSource, CsvCatalogParser, FileSource};
use crate::Result;

/// Loads the catalog at most once and hands out the cached copy
pub struct CatalogStore<S: CatalogSource = FileSource> {
    source: S,
    catalog: OnceLock<Catalog>,
}

impl CatalogStore<FileSource> {
    /// Store backed by a CSV file on disk
    #[must_use]
    pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> Self {
        Self::new(FileSource::new(path))
    }
}

impl<S: CatalogSource> CatalogStore<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            catalog: OnceLock::new(),
        }
    }

    /// Return the catalog, reading the source only on the first successful call
    ///
    /// A failed load is not cached; the next call reads the source again.
    #[tracing::instrument(name = "load_catalog", level = "debug", skip(self), fields(source = %self.source.name()))]
    pub fn load(&self) -> Result<&Catalog> {
        if let Some(catalog) = self.catalog.get() {
            debug!("Serving cached catalog");
            return Ok(catalog);
        }

        let name = self.source.name();
        let text = self.source.read()?;
        let catalog = CsvCatalogParser::parse(&name, &text)?;
        info!(
            "Loaded catalog from {} with {} destinations at {}",
            name,
            catalog.len(),
            catalog.loaded_at()
        );

        Ok(self.catalog.get_or_init(|| catalog))
    }

    /// Whether the catalog has been loaded
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.catalog.get().is_some()
    }

    /// Distinct regions in first-seen order
    pub fn list_regions(&self) -> Result<Vec<String>> {
        Ok(self.load()?.regions())
    }

    /// Distinct interests in first-seen order
    pub fn list_interests(&self) -> Result<Vec<String>> {
        Ok(self.load()?.interests())
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }
}
