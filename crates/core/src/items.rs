//! Line items

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};

use crate::{
    cart::CartError,
    products::{Product, ProductId},
};

/// One product's aggregated quantity within a cart.
///
/// Name, price and thumbnail are copied from the product when the line is
/// created. The quantity is never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem<'a> {
    product: ProductId,
    name: String,
    price: Money<'a, Currency>,
    thumbnail: String,
    quantity: NonZeroU32,
}

impl<'a> LineItem<'a> {
    /// Creates a line with a quantity of one for the given product.
    pub fn new(id: ProductId, product: &Product<'a>) -> Self {
        Self {
            product: id,
            name: product.name.clone(),
            price: product.price,
            thumbnail: product.thumbnail.clone(),
            quantity: NonZeroU32::MIN,
        }
    }

    /// Returns the product this line refers to
    pub fn product(&self) -> ProductId {
        self.product
    }

    /// Returns the product name captured when the line was created
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price captured when the line was created
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }

    /// Returns the thumbnail reference captured when the line was created
    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    /// Returns the quantity of the line
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Unit price multiplied by quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Overflow`] if the amount does not fit in minor units.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, CartError> {
        Ok(Money::from_minor(
            self.subtotal_minor_units()?,
            self.price.currency(),
        ))
    }

    /// Unit price multiplied by quantity, in minor units.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Overflow`] if the amount does not fit in an `i64`.
    pub fn subtotal_minor_units(&self) -> Result<i64, CartError> {
        self.price
            .try_to_minor_units()
            .ok()
            .and_then(|unit| unit.checked_mul(i64::from(self.quantity.get())))
            .ok_or(CartError::Overflow)
    }

    /// Add one to the quantity, returning the new quantity.
    pub(crate) fn increment(&mut self) -> u32 {
        self.quantity = self.quantity.saturating_add(1);
        self.quantity.get()
    }

    /// Remove one from the quantity.
    ///
    /// Returns `None`, leaving the line untouched, when the quantity would
    /// reach zero.
    pub(crate) fn decrement(&mut self) -> Option<u32> {
        let quantity = NonZeroU32::new(self.quantity.get() - 1)?;
        self.quantity = quantity;

        Some(quantity.get())
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;

    fn macaron<'a>() -> Product<'a> {
        Product {
            name: "Macaron Mix of Five".to_string(),
            category: "Macaron".to_string(),
            price: Money::from_minor(800, iso::USD),
            thumbnail: "./assets/images/image-macaron-thumbnail.jpg".to_string(),
        }
    }

    #[test]
    fn new_copies_product_details() {
        let product = macaron();
        let item = LineItem::new(ProductId::new(2), &product);

        assert_eq!(item.product(), ProductId::new(2));
        assert_eq!(item.name(), "Macaron Mix of Five");
        assert_eq!(item.price(), &Money::from_minor(800, iso::USD));
        assert_eq!(
            item.thumbnail(),
            "./assets/images/image-macaron-thumbnail.jpg"
        );
        assert_eq!(item.quantity(), 1);
    }

    #[test]
    fn increment_then_decrement() {
        let mut item = LineItem::new(ProductId::new(2), &macaron());

        assert_eq!(item.increment(), 2);
        assert_eq!(item.increment(), 3);
        assert_eq!(item.decrement(), Some(2));
        assert_eq!(item.decrement(), Some(1));
        assert_eq!(item.decrement(), None);
        assert_eq!(item.quantity(), 1);
    }

    #[test]
    fn increment_saturates() {
        let mut item = LineItem::new(ProductId::new(2), &macaron());
        item.quantity = NonZeroU32::MAX;

        assert_eq!(item.increment(), u32::MAX);
    }

    #[test]
    fn subtotal_multiplies_price_by_quantity() -> TestResult {
        let mut item = LineItem::new(ProductId::new(2), &macaron());
        item.increment();
        item.increment();

        assert_eq!(item.subtotal()?, Money::from_minor(2400, iso::USD));

        Ok(())
    }

    #[test]
    fn subtotal_overflow_errors() {
        let product = Product {
            price: Money::from_minor(i64::MAX, iso::USD),
            ..macaron()
        };
        let mut item = LineItem::new(ProductId::new(0), &product);
        item.increment();

        assert!(matches!(item.subtotal(), Err(CartError::Overflow)));
    }
}
