use std::sync::Arc;
use std::time::Duration;

use catalog_logging::{catalog_info, catalog_warn};
use movies_core::Movie;
use tokio_util::sync::CancellationToken;

use crate::{decode_catalog, CatalogSource, LoadError};

/// Simulated round trip before the catalog becomes available.
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSettings {
    pub delay: Duration,
}

impl Default for LoadSettings {
    fn default() -> Self {
        Self {
            delay: DEFAULT_LOAD_DELAY,
        }
    }
}

#[derive(Clone)]
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
    settings: LoadSettings,
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn CatalogSource>, settings: LoadSettings) -> Self {
        Self { source, settings }
    }

    pub fn settings(&self) -> &LoadSettings {
        &self.settings
    }

    /// Waits out the simulated delay, then reads and decodes the whole catalog.
    ///
    /// Either every movie is returned or an error is; there is no partial result.
    pub async fn load(&self, cancel: &CancellationToken) -> Result<Vec<Movie>, LoadError> {
        catalog_info!(
            "Loading catalog from {} after {:?}",
            self.source.name(),
            self.settings.delay
        );
        let result = tokio::select! {
            _ = cancel.cancelled() => Err(LoadError::Cancelled),
            result = self.delayed_read() => result,
        };
        match &result {
            Ok(movies) => catalog_info!("Decoded {} movies", movies.len()),
            Err(err) => catalog_warn!("Catalog load from {} failed: {}", self.source.name(), err),
        }
        result
    }

    async fn delayed_read(&self) -> Result<Vec<Movie>, LoadError> {
        tokio::time::sleep(self.settings.delay).await;
        let bytes = self.source.read().await?;
        decode_catalog(&bytes)
    }
}
