//! Cart commands
//!
//! The operations an external UI layer can invoke on a cart, addressed by
//! product identifier. Commands parse from short text forms such as
//! `add 3`, `inc:3`, `dec 3` or `clear`.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::products::ProductId;

/// A cart operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartCommand {
    /// Add one unit of a catalog product.
    Add(ProductId),

    /// Add one to the quantity of a line already in the cart.
    Increase(ProductId),

    /// Remove one from the quantity of a line, removing it at zero.
    Decrease(ProductId),

    /// Empty the cart and start a new order.
    Clear,
}

/// Errors raised parsing a [`CartCommand`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    /// The input was blank.
    #[error("empty command")]
    Empty,

    /// The verb is not a known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The command needs a product id but none was given.
    #[error("command {0} requires a product id")]
    MissingProductId(String),

    /// The product id is not a non-negative integer.
    #[error("invalid product id: {0}")]
    InvalidProductId(String),

    /// More arguments were given than the command accepts.
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

impl FromStr for CartCommand {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s
            .split(|c: char| c.is_whitespace() || c == ':')
            .filter(|part| !part.is_empty());

        let verb = parts
            .next()
            .ok_or(CommandParseError::Empty)?
            .to_ascii_lowercase();

        let command = match verb.as_str() {
            "clear" | "new-order" => CartCommand::Clear,
            "add" => CartCommand::Add(product_id(&verb, parts.next())?),
            "inc" | "increase" => CartCommand::Increase(product_id(&verb, parts.next())?),
            "dec" | "decrease" => CartCommand::Decrease(product_id(&verb, parts.next())?),
            _ => return Err(CommandParseError::UnknownCommand(verb)),
        };

        if let Some(extra) = parts.next() {
            return Err(CommandParseError::UnexpectedArgument(extra.to_string()));
        }

        Ok(command)
    }
}

fn product_id(verb: &str, arg: Option<&str>) -> Result<ProductId, CommandParseError> {
    let arg = arg.ok_or_else(|| CommandParseError::MissingProductId(verb.to_string()))?;

    arg.parse()
        .map_err(|_err| CommandParseError::InvalidProductId(arg.to_string()))
}

impl fmt::Display for CartCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartCommand::Add(product) => write!(f, "add {product}"),
            CartCommand::Increase(product) => write!(f, "inc {product}"),
            CartCommand::Decrease(product) => write!(f, "dec {product}"),
            CartCommand::Clear => f.write_str("clear"),
        }
    }
}
