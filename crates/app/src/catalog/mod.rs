//! Catalog loading
//!
//! Retrieves the catalog document from a [`CatalogSource`] and falls back to
//! the built-in products when retrieval or parsing fails.

mod loader;
mod source;

pub use loader::{CatalogLoadError, CatalogLoader};
pub use source::{
    CatalogSource, CatalogSourceError, FileCatalogSource, HttpCatalogSource, MockCatalogSource,
    source_for,
};
