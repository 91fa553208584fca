//! Catalog Config

use clap::Args;

/// Catalog source settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Catalog location: an `http(s)://` URL or a local file path
    #[arg(
        long = "catalog",
        env = "SWEETCART_CATALOG",
        default_value = "./data.json"
    )]
    pub location: String,
}
