use std::path::PathBuf;

use crate::LoadError;

/// Catalog document compiled into the binary.
pub const BUNDLED_CATALOG: &str = include_str!("../data/movies.json");

#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human readable name used in diagnostics.
    fn name(&self) -> String;

    async fn read(&self) -> Result<Vec<u8>, LoadError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

#[async_trait::async_trait]
impl CatalogSource for BundledSource {
    fn name(&self) -> String {
        "bundled catalog".to_string()
    }

    async fn read(&self) -> Result<Vec<u8>, LoadError> {
        Ok(BUNDLED_CATALOG.as_bytes().to_vec())
    }
}

/// Reads the catalog document from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl CatalogSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    async fn read(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|err| LoadError::Read {
                source_name: self.name(),
                message: err.to_string(),
            })
    }
}
