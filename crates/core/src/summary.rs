//! Order summary

use std::io;

use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{cart::CartError, items::LineItem, products::ProductId};

/// Message shown in place of the table when there is nothing in the cart.
pub const EMPTY_CART_MESSAGE: &str = "Your added items will appear here";

/// Errors that can occur when writing a summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Wrapper for cart total errors.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Writing to the output failed.
    #[error("failed to write summary: {0}")]
    Io(#[from] io::Error),
}

/// A line of an order summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine<'a> {
    /// Product the line refers to
    pub product: ProductId,

    /// Product name
    pub name: String,

    /// Quantity ordered
    pub quantity: u32,

    /// Unit price
    pub unit_price: Money<'a, Currency>,

    /// Unit price multiplied by quantity
    pub subtotal: Money<'a, Currency>,
}

/// Snapshot of a cart shown when the order is confirmed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary<'a> {
    lines: Vec<SummaryLine<'a>>,
    item_count: u64,
    total: Money<'a, Currency>,
}

impl<'a> OrderSummary<'a> {
    /// Build a summary from cart lines.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if a line subtotal or the total overflows.
    pub fn from_items(
        items: &[LineItem<'a>],
        currency: &'a Currency,
    ) -> Result<Self, CartError> {
        let mut lines = Vec::with_capacity(items.len());
        let mut item_count = 0_u64;
        let mut total = 0_i64;

        for item in items {
            let subtotal = item.subtotal_minor_units()?;

            total = total.checked_add(subtotal).ok_or(CartError::Overflow)?;
            item_count += u64::from(item.quantity());

            lines.push(SummaryLine {
                product: item.product(),
                name: item.name().to_string(),
                quantity: item.quantity(),
                unit_price: *item.price(),
                subtotal: Money::from_minor(subtotal, currency),
            });
        }

        Ok(Self {
            lines,
            item_count,
            total: Money::from_minor(total, currency),
        })
    }

    /// Summary lines, in cart order.
    pub fn lines(&self) -> &[SummaryLine<'a>] {
        &self.lines
    }

    /// Total number of units ordered.
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Amount due for the order.
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Check if the summary has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Writes the summary as a table followed by the order total.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Io`] if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), SummaryError> {
        if self.is_empty() {
            writeln!(out, "{EMPTY_CART_MESSAGE}")?;

            return Ok(());
        }

        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Qty", "Price", "Subtotal"]);

        for (idx, line) in self.lines.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.name.clone(),
                format!("{}x", line.quantity),
                format!("{}", line.unit_price),
                format!("{}", line.subtotal),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..5), Alignment::right());

        writeln!(out, "{table}")?;
        writeln!(out, " Items: {}", self.item_count)?;
        writeln!(out, " Order Total: {}", self.total)?;

        Ok(())
    }
}
