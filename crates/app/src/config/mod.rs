//! Application configuration module

use clap::Parser;
use sweetcart::commands::CartCommand;

use crate::config::{catalog::CatalogConfig, logging::LoggingConfig};

pub mod catalog;
pub mod logging;

/// Sweetcart CLI configuration
#[derive(Debug, Parser)]
#[command(name = "sweetcart", about = "Sweetcart shopping cart", long_about = None)]
pub struct AppConfig {
    /// Catalog source settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Print the order summary, then start a new order
    #[arg(long)]
    pub confirm: bool,

    /// Cart commands to apply in order (e.g. `add:0`, `inc:0`, `dec:2`, `clear`).
    /// Read one per line from stdin when omitted.
    #[arg(value_name = "COMMANDS")]
    pub commands: Vec<CartCommand>,
}

impl AppConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
