//! Catalog loader.

use std::{fmt, sync::Arc};

use sweetcart::catalog::{Catalog, CatalogError};
use thiserror::Error;
use tracing::{error, info};

use crate::catalog::source::{CatalogSource, CatalogSourceError, source_for};

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The catalog document could not be retrieved.
    #[error(transparent)]
    Source(#[from] CatalogSourceError),

    /// The catalog document could not be parsed.
    #[error(transparent)]
    Parse(#[from] CatalogError),
}

/// Loads the session catalog once at startup.
#[derive(Clone)]
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
}

impl CatalogLoader {
    /// Create a loader reading from `source`.
    #[must_use]
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Create a loader for a configured location (URL or file path).
    #[must_use]
    pub fn from_location(location: &str) -> Self {
        Self::new(source_for(location))
    }

    /// Retrieve and parse the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error when the document cannot be retrieved or parsed.
    pub async fn try_load(&self) -> Result<Catalog<'static>, CatalogLoadError> {
        let document = self.source.fetch().await?;

        Ok(Catalog::from_json(&document)?)
    }

    /// Load the catalog, substituting the fallback products on any failure.
    pub async fn load(&self) -> Catalog<'static> {
        match self.try_load().await {
            Ok(catalog) => {
                info!(
                    location = %self.source.location(),
                    products = catalog.len(),
                    "loaded catalog"
                );

                catalog
            }
            Err(error) => {
                error!(
                    location = %self.source.location(),
                    %error,
                    "failed to load catalog, using fallback products"
                );

                Catalog::fallback()
            }
        }
    }
}

impl fmt::Debug for CatalogLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogLoader")
            .field("location", &self.source.location())
            .finish()
    }
}
