//! Logging settings for the cart CLI
//!
//! Log records go to stderr so that cart output on stdout stays clean.

use clap::{Args, ValueEnum};

/// How log records written to stderr are formatted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One line per record, for reading in a terminal.
    Compact,

    /// One JSON object per record, for log collectors.
    Json,
}

/// Verbosity and format of the CLI's own logs.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Filter directive for cart and catalog logs (e.g. `info`, `sweetcart=debug`)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Record format on stderr (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
