//! Sweetcart CLI

use std::{io, process};

use sweetcart::commands::CartCommand;
use sweetcart_app::{
    catalog::CatalogLoader,
    config::AppConfig,
    observability,
    session::{self, LoggingObserver},
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

/// Sweetcart CLI entry point
#[tokio::main]
pub async fn main() {
    let config = AppConfig::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = observability::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for setup errors"
        )]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }

    let loader = CatalogLoader::from_location(&config.catalog.location);
    let catalog = loader.load().await;

    let commands = if config.commands.is_empty() {
        info!("reading cart commands from stdin");

        match read_commands().await {
            Ok(commands) => commands,
            Err(source) => {
                error!("failed to read commands: {source}");

                process::exit(1);
            }
        }
    } else {
        config.commands
    };

    let stdout = io::stdout();

    if let Err(source) = session::run(
        &catalog,
        LoggingObserver,
        commands,
        config.confirm,
        stdout.lock(),
    ) {
        error!("{source}");

        process::exit(1);
    }
}

/// Read one command per line from stdin until EOF, skipping blank and
/// malformed lines.
async fn read_commands() -> io::Result<Vec<CartCommand>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut commands = Vec::new();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        match line.parse() {
            Ok(command) => commands.push(command),
            Err(source) => warn!(line = %line, "skipping command: {source}"),
        }
    }

    Ok(commands)
}
