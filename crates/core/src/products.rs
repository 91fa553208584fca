//! Products

use std::{fmt, num::ParseIntError, str::FromStr};

use rusty_money::{Money, iso::Currency};

/// Product identifier: the product's position within its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(usize);

impl ProductId {
    /// Create an identifier for the product at `index`.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Catalog index of the product.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for ProductId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<usize>().map(Self)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product name
    pub name: String,

    /// Product category
    pub category: String,

    /// Unit price
    pub price: Money<'a, Currency>,

    /// Thumbnail image reference
    pub thumbnail: String,
}
