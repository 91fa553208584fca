//! Cart session
//!
//! Drives one cart over a loaded catalog: applies commands in order, then
//! writes the cart (or the confirmed order) to the output.

use std::io;

use sweetcart::{
    cart::{CartError, CartStore},
    catalog::Catalog,
    commands::CartCommand,
    events::{CartEvent, CartObserver},
    summary::SummaryError,
};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while running a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Cart totals could not be computed.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The summary could not be written.
    #[error(transparent)]
    Summary(#[from] SummaryError),

    /// Writing to the output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Observer that logs every cart event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl CartObserver for LoggingObserver {
    fn on_event(&mut self, event: &CartEvent) {
        match *event {
            CartEvent::ItemAdded { product, quantity } => {
                info!(%product, quantity, "added to cart");
            }
            CartEvent::QuantityChanged { product, quantity } => {
                info!(%product, quantity, "cart quantity changed");
            }
            CartEvent::ItemRemoved { product } => {
                info!(%product, "removed from cart");
            }
            CartEvent::Cleared { removed } => {
                info!(removed, "started new order");
            }
        }
    }
}

/// Apply `commands` to a fresh cart and write the result to `out`.
///
/// With `confirm`, a non-empty cart is written as a confirmed order and a new
/// order is started afterwards. An empty cart has nothing to confirm and is
/// written as a plain cart view.
///
/// # Errors
///
/// Returns a [`SessionError`] if totals overflow or the output cannot be written.
pub fn run<O: CartObserver>(
    catalog: &Catalog<'_>,
    observer: O,
    commands: impl IntoIterator<Item = CartCommand>,
    confirm: bool,
    mut out: impl io::Write,
) -> Result<(), SessionError> {
    let mut cart = CartStore::with_observer(catalog, observer);

    for command in commands {
        cart.apply(command);
    }

    let summary = cart.summary()?;

    if confirm && !summary.is_empty() {
        writeln!(out, "Order Confirmed")?;
        writeln!(out, "We hope you enjoy your food!")?;
        summary.write_to(&mut out)?;

        cart.start_new_order();
    } else {
        writeln!(out, "Your Cart ({})", cart.total_item_count())?;
        summary.write_to(&mut out)?;
    }

    Ok(())
}
