//! Cart
//!
//! [`CartStore`] owns the line items of one session's cart and borrows the
//! catalog they are priced from. Every mutation runs to completion on
//! `&mut self`; unknown product identifiers are ignored.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    catalog::Catalog,
    commands::CartCommand,
    events::{CartEvent, CartObserver, NoopObserver},
    items::LineItem,
    products::ProductId,
    summary::OrderSummary,
};

/// Errors related to cart totals.
#[derive(Debug, Error)]
pub enum CartError {
    /// A total does not fit in minor units.
    #[error("cart total overflowed")]
    Overflow,
}

/// Cart Store
#[derive(Debug)]
pub struct CartStore<'a, O: CartObserver = NoopObserver> {
    catalog: &'a Catalog<'a>,
    items: Vec<LineItem<'a>>,
    observer: O,
}

impl<'a> CartStore<'a> {
    /// Create an empty cart over the given catalog.
    pub fn new(catalog: &'a Catalog<'a>) -> Self {
        CartStore::with_observer(catalog, NoopObserver)
    }
}

impl<'a, O: CartObserver> CartStore<'a, O> {
    /// Create an empty cart that reports mutations to `observer`.
    pub fn with_observer(catalog: &'a Catalog<'a>, observer: O) -> Self {
        CartStore {
            catalog,
            items: Vec::new(),
            observer,
        }
    }

    /// Add one unit of a catalog product.
    ///
    /// Increments the existing line for the product, or appends a new line
    /// with a quantity of one. Identifiers outside the catalog are ignored.
    pub fn add_item(&mut self, product: ProductId) {
        if let Some(item) = self.find_mut(product) {
            let quantity = item.increment();

            debug!(%product, quantity, "incremented cart line");

            self.observer
                .on_event(&CartEvent::ItemAdded { product, quantity });

            return;
        }

        let catalog = self.catalog;

        let Some(details) = catalog.get(product) else {
            warn!(
                %product,
                catalog_len = catalog.len(),
                "ignoring add of product outside the catalog"
            );

            return;
        };

        self.items.push(LineItem::new(product, details));

        debug!(%product, name = %details.name, "added cart line");

        self.observer.on_event(&CartEvent::ItemAdded {
            product,
            quantity: 1,
        });
    }

    /// Add one to the quantity of an existing line. No-op if the product is not in the cart.
    pub fn increase_quantity(&mut self, product: ProductId) {
        let Some(item) = self.find_mut(product) else {
            debug!(%product, "ignoring increase of product not in cart");

            return;
        };

        let quantity = item.increment();

        debug!(%product, quantity, "increased cart line");

        self.observer
            .on_event(&CartEvent::QuantityChanged { product, quantity });
    }

    /// Remove one from the quantity of an existing line.
    ///
    /// The line is removed once its quantity reaches zero. No-op if the
    /// product is not in the cart.
    pub fn decrease_quantity(&mut self, product: ProductId) {
        let Some(index) = self.position(product) else {
            debug!(%product, "ignoring decrease of product not in cart");

            return;
        };

        let Some(item) = self.items.get_mut(index) else {
            return;
        };

        if let Some(quantity) = item.decrement() {
            debug!(%product, quantity, "decreased cart line");

            self.observer
                .on_event(&CartEvent::QuantityChanged { product, quantity });
        } else {
            self.items.remove(index);

            debug!(%product, "removed cart line");

            self.observer.on_event(&CartEvent::ItemRemoved { product });
        }
    }

    /// Remove every line from the cart. No-op if the cart is already empty.
    pub fn clear_cart(&mut self) {
        if self.items.is_empty() {
            return;
        }

        let removed = self.items.len();

        self.items.clear();

        debug!(removed, "cleared cart");

        self.observer.on_event(&CartEvent::Cleared { removed });
    }

    /// Discard the confirmed order and start again with an empty cart.
    pub fn start_new_order(&mut self) {
        self.clear_cart();
    }

    /// Apply a command to the cart.
    pub fn apply(&mut self, command: CartCommand) {
        match command {
            CartCommand::Add(product) => self.add_item(product),
            CartCommand::Increase(product) => self.increase_quantity(product),
            CartCommand::Decrease(product) => self.decrease_quantity(product),
            CartCommand::Clear => self.clear_cart(),
        }
    }

    /// Sum of the quantities of all lines.
    pub fn total_item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity()))
            .sum()
    }

    /// Sum of price multiplied by quantity over all lines.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Overflow`] if a line subtotal or the total does not
    /// fit in minor units.
    pub fn total_price(&self) -> Result<Money<'a, Currency>, CartError> {
        let minor_units = self
            .items
            .iter()
            .try_fold(0_i64, |total, item| -> Result<i64, CartError> {
                total
                    .checked_add(item.subtotal_minor_units()?)
                    .ok_or(CartError::Overflow)
            })?;

        Ok(Money::from_minor(minor_units, self.currency()))
    }

    /// Snapshot of the current lines and totals, as shown on order confirmation.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if a line subtotal or the total overflows.
    pub fn summary(&self) -> Result<OrderSummary<'a>, CartError> {
        OrderSummary::from_items(&self.items, self.currency())
    }

    /// Lines in the order they were first added.
    pub fn items(&self) -> &[LineItem<'a>] {
        &self.items
    }

    /// Iterate over lines in the order they were first added.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem<'a>> {
        self.items.iter()
    }

    /// The line for a product, if it is in the cart.
    pub fn item(&self, product: ProductId) -> Option<&LineItem<'a>> {
        self.items.iter().find(|item| item.product() == product)
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The catalog the cart is priced from.
    pub fn catalog(&self) -> &'a Catalog<'a> {
        self.catalog
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.catalog.currency()
    }

    /// The observer receiving cart events.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consume the cart, returning its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    fn position(&self, product: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.product() == product)
    }

    fn find_mut(&mut self, product: ProductId) -> Option<&mut LineItem<'a>> {
        self.items.iter_mut().find(|item| item.product() == product)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;

    const WAFFLE: ProductId = ProductId::new(0);
    const CREME_BRULEE: ProductId = ProductId::new(1);
    const MACARON: ProductId = ProductId::new(2);

    #[test]
    fn new_cart_is_empty() -> TestResult {
        let catalog = Catalog::fallback();
        let cart = CartStore::new(&catalog);

        assert!(cart.is_empty());
        assert_eq!(cart.total_item_count(), 0);
        assert_eq!(cart.total_price()?, Money::from_minor(0, iso::USD));

        Ok(())
    }

    #[test]
    fn add_item_appends_new_line() {
        let catalog = Catalog::fallback();
        let mut cart = CartStore::new(&catalog);

        cart.add_item(MACARON);

        assert_eq!(cart.len(), 1);

        let item = cart.item(MACARON);

        assert_eq!(item.map(LineItem::quantity), Some(1));
        assert_eq!(item.map(LineItem::name), Some("Macaron Mix of Five"));
    }

    #[test]
    fn add_item_twice_increments_existing_line() {
        let catalog = Catalog::fallback();
        let mut cart = CartStore::new(&catalog);

        cart.add_item(WAFFLE);
        cart.add_item(WAFFLE);
        cart.add_item(CREME_BRULEE);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.item(WAFFLE).map(LineItem::quantity), Some(2));
        assert_eq!(cart.total_item_count(), 3);
    }

    #[test]
    fn add_item_keeps_first_added_order() {
        let catalog = Catalog::fallback();
        let mut cart = CartStore::new(&catalog);

        cart.add_item(MACARON);
        cart.add_item(WAFFLE);
        cart.add_item(MACARON);

        let order: Vec<ProductId> = cart.iter().map(LineItem::product).collect();

        assert_eq!(order, [MACARON, WAFFLE]);
    }

    #[test]
    fn add_item_outside_catalog_is_ignored() {
        let catalog = Catalog::fallback();
        let mut events = Vec::new();
        let mut cart = CartStore::with_observer(&catalog, &mut events);

        cart.add_item(ProductId::new(99));

        assert!(cart.is_empty());
        assert!(events.is_empty());
    }

    #[test]
    fn increase_quantity_of_missing_line_is_noop() {
        let catalog = Catalog::fallback();
        let mut cart = CartStore::new(&catalog);

        cart.increase_quantity(WAFFLE);

        assert!(cart.is_empty());
    }

    #[test]
    fn increase_quantity_increments() {
        let catalog = Catalog::fallback();
        let mut cart = CartStore::new(&catalog);

        cart.add_item(WAFFLE);
        cart.increase_quantity(WAFFLE);
        cart.increase_quantity(WAFFLE);

        assert_eq!(cart.item(WAFFLE).map(LineItem::quantity), Some(3));
    }

    #[test]
    fn decrease_quantity_to_zero_removes_line() -> TestResult {
        let catalog = Catalog::fallback();
        let mut cart = CartStore::new(&catalog);

        cart.add_item(MACARON);
        cart.decrease_quantity(MACARON);

        assert!(cart.is_empty());
        assert!(cart.item(MACARON).is_none());
        assert_eq!(cart.total_price()?, Money::from_minor(0, iso::USD));

        Ok(())
    }

    #[test]
    fn decrease_quantity_keeps_other_lines() {
        let catalog = Catalog::fallback();
        let mut cart = CartStore::new(&catalog);

        cart.add_item(WAFFLE);
        cart.add_item(MACARON);
        cart.add_item(MACARON);
        cart.decrease_quantity(MACARON);
        cart.decrease_quantity(WAFFLE);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item(MACARON).map(LineItem::quantity), Some(1));
    }

    #[test]
    fn decrease_quantity_of_missing_line_is_noop() {
        let catalog = Catalog::fallback();
        let mut events = Vec::new();
        let mut cart = CartStore::with_observer(&catalog, &mut events);

        cart.add_item(WAFFLE);
        cart.decrease_quantity(MACARON);

        assert_eq!(cart.len(), 1);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn clear_cart_removes_everything() -> TestResult {
        let catalog = Catalog::fallback();
        let mut cart = CartStore::new(&catalog);

        cart.add_item(WAFFLE);
        cart.add_item(MACARON);
        cart.clear_cart();

        assert!(cart.is_empty());
        assert_eq!(cart.total_item_count(), 0);
        assert_eq!(cart.total_price()?.to_minor_units(), 0);

        Ok(())
    }

    #[test]
    fn clear_empty_cart_emits_nothing() {
        let catalog = Catalog::fallback();
        let mut cart = CartStore::with_observer(&catalog, Vec::new());

        cart.clear_cart();
        cart.start_new_order();

        assert!(cart.is_empty());
        assert!(
            cart.observer().is_empty(),
            "clearing an empty cart recorded {:?}",
            cart.observer()
        );
    }

    #[test]
    fn total_price_sums_lines() -> TestResult {
        let catalog = Catalog::fallback();
        let mut cart = CartStore::new(&catalog);

        // 2 x 6.50 + 1 x 7.00 + 3 x 8.00
        cart.add_item(WAFFLE);
        cart.add_item(WAFFLE);
        cart.add_item(CREME_BRULEE);
        cart.add_item(MACARON);
        cart.increase_quantity(MACARON);
        cart.increase_quantity(MACARON);

        assert_eq!(cart.total_price()?, Money::from_minor(44_00, iso::USD));
        assert_eq!(cart.total_item_count(), 6);

        Ok(())
    }

    #[test]
    fn total_price_overflow_across_lines_errors() -> TestResult {
        // Each line fits in i64 cents on its own, the sum does not.
        let catalog = Catalog::from_json(
            r#"[
                {"image": {"thumbnail": "a.jpg"}, "name": "Gold Cake", "category": "Cake", "price": 1e15},
                {"image": {"thumbnail": "b.jpg"}, "name": "Gold Tart", "category": "Tart", "price": 1e15}
            ]"#,
        )?;
        let mut cart = CartStore::new(&catalog);

        for _ in 0..50 {
            cart.add_item(ProductId::new(0));
            cart.add_item(ProductId::new(1));
        }

        assert!(
            cart.item(ProductId::new(0))
                .is_some_and(|item| item.subtotal().is_ok()),
            "a single line should still fit"
        );
        assert!(
            matches!(cart.total_price(), Err(CartError::Overflow)),
            "expected Overflow, got {:?}",
            cart.total_price()
        );
        assert!(
            matches!(cart.summary(), Err(CartError::Overflow)),
            "expected Overflow, got {:?}",
            cart.summary()
        );

        Ok(())
    }

    #[test]
    fn apply_dispatches_commands() {
        let catalog = Catalog::fallback();
        let mut cart = CartStore::new(&catalog);

        cart.apply(CartCommand::Add(WAFFLE));
        cart.apply(CartCommand::Increase(WAFFLE));
        cart.apply(CartCommand::Add(MACARON));
        cart.apply(CartCommand::Decrease(MACARON));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item(WAFFLE).map(LineItem::quantity), Some(2));

        cart.apply(CartCommand::Clear);

        assert!(cart.is_empty());
    }

    #[test]
    fn observer_sees_each_mutation() {
        let catalog = Catalog::fallback();
        let mut cart = CartStore::with_observer(&catalog, Vec::new());

        cart.add_item(WAFFLE);
        cart.add_item(WAFFLE);
        cart.increase_quantity(WAFFLE);
        cart.decrease_quantity(WAFFLE);
        cart.add_item(MACARON);
        cart.decrease_quantity(MACARON);
        cart.start_new_order();

        assert_eq!(
            cart.into_observer(),
            [
                CartEvent::ItemAdded {
                    product: WAFFLE,
                    quantity: 1
                },
                CartEvent::ItemAdded {
                    product: WAFFLE,
                    quantity: 2
                },
                CartEvent::QuantityChanged {
                    product: WAFFLE,
                    quantity: 3
                },
                CartEvent::QuantityChanged {
                    product: WAFFLE,
                    quantity: 2
                },
                CartEvent::ItemAdded {
                    product: MACARON,
                    quantity: 1
                },
                CartEvent::ItemRemoved { product: MACARON },
                CartEvent::Cleared { removed: 1 },
            ]
        );
    }

    #[test]
    fn empty_catalog_accepts_no_items() -> TestResult {
        let catalog = Catalog::from_json("[]")?;
        let mut cart = CartStore::new(&catalog);

        cart.add_item(WAFFLE);

        assert!(cart.is_empty());
        assert_eq!(cart.currency(), iso::USD);

        Ok(())
    }
}
