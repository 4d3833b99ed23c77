//! Backing sources for the destination catalog

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{Result, TravelGenieError};

/// Something the raw catalog text can be read from
pub trait CatalogSource {
    /// Human readable name used in logs and error messages
    fn name(&self) -> String;

    /// Read the full CSV text of the catalog
    fn read(&self) -> Result<String>;
}

/// CSV file on the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<String> {
        debug!("Reading catalog file: {}", self.path.display());
        fs::read_to_string(&self.path)
            .map_err(|e| TravelGenieError::source_unavailable(self.name(), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_source_reads_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "destination,region,interest,cost").unwrap();

        let source = FileSource::new(file.path());
        assert_eq!(source.path(), file.path());
        let text = source.read().unwrap();
        assert!(text.starts_with("destination,region"));
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let source = FileSource::new("/definitely/not/here/destinations.csv");
        let err = source.read().unwrap_err();
        assert!(matches!(err, TravelGenieError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("destinations.csv"));
    }
}
