//! Catalog sources.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode};
use thiserror::Error;

/// Errors that can occur while retrieving a catalog document.
#[derive(Debug, Error)]
pub enum CatalogSourceError {
    /// An HTTP transport error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("catalog request failed with status {0}")]
    UnexpectedStatus(StatusCode),

    /// The catalog file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that was read
        path: PathBuf,

        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// HTTP catalog source.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    url: String,
    http: Client,
}

impl HttpCatalogSource {
    /// Create a source reading the catalog from `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, Client::new())
    }

    /// Create a source reading the catalog from `url` with a preconfigured client.
    #[must_use]
    pub fn with_client(url: impl Into<String>, http: Client) -> Self {
        Self {
            url: url.into(),
            http,
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<String, CatalogSourceError> {
        let response = self.http.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogSourceError::UnexpectedStatus(response.status()));
        }

        Ok(response.text().await?)
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// Local file catalog source.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    /// Create a source reading the catalog from the file at `path`.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<String, CatalogSourceError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogSourceError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick a source for a configured location: `http://` and `https://` URLs are
/// fetched over HTTP, anything else is read as a file path.
pub fn source_for(location: &str) -> Arc<dyn CatalogSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Arc::new(HttpCatalogSource::new(location))
    } else {
        Arc::new(FileCatalogSource::new(location))
    }
}

/// Where the product catalog document comes from.
///
/// The loader fetches once per session; implementations only retrieve the raw
/// document and leave parsing to [`sweetcart::catalog::Catalog::from_json`].
#[automock]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Retrieve the raw catalog document.
    async fn fetch(&self) -> Result<String, CatalogSourceError>;

    /// Where the catalog is read from, for logging.
    fn location(&self) -> String;
}
