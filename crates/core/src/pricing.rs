//! Pricing
//!
//! All money arithmetic is done in integer minor units (cents). Catalog prices
//! arrive as JSON numbers and are converted here.

use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Number of decimal places in catalog prices.
pub const MINOR_UNIT_SCALE: u32 = 2;

/// Errors raised converting a price into minor units.
#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    /// The price is negative.
    #[error("price {0} is negative")]
    Negative(f64),

    /// The price cannot be represented as a whole number of minor units.
    #[error("price {0} is not representable")]
    Unrepresentable(f64),
}

/// Convert a decimal price (e.g. `6.5`) into minor units (`650`).
///
/// Fractions of a cent are rounded half away from zero.
///
/// # Errors
///
/// - [`PriceError::Negative`]: the price is below zero.
/// - [`PriceError::Unrepresentable`]: the price is not finite or overflows.
pub fn minor_units_from_f64(price: f64) -> Result<i64, PriceError> {
    let amount = Decimal::from_f64(price).ok_or(PriceError::Unrepresentable(price))?;

    if amount < Decimal::ZERO {
        return Err(PriceError::Negative(price));
    }

    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| {
            value
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
        })
        .ok_or(PriceError::Unrepresentable(price))
}

/// Amount of `money` as a two decimal place [`Decimal`], e.g. `6.50`.
pub fn to_decimal(money: &Money<'_, Currency>) -> Decimal {
    let mut amount = *money.amount();
    amount.rescale(MINOR_UNIT_SCALE);

    amount
}
