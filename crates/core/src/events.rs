//! Cart events
//!
//! The cart store reports every mutation that changed its state to a
//! [`CartObserver`]. Rendering layers use these to drive visual feedback
//! (e.g. flashing an "Added!" label) without the store knowing about them.

use crate::products::ProductId;

/// A change applied to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent {
    /// A product was added; `quantity` is its quantity after the add.
    ItemAdded {
        /// Product that was added
        product: ProductId,

        /// Quantity after the add
        quantity: u32,
    },

    /// The quantity of an existing line changed.
    QuantityChanged {
        /// Product whose line changed
        product: ProductId,

        /// New quantity
        quantity: u32,
    },

    /// A line was removed because its quantity reached zero.
    ItemRemoved {
        /// Product whose line was removed
        product: ProductId,
    },

    /// The cart was emptied.
    Cleared {
        /// Number of lines removed
        removed: usize,
    },
}

/// Receives cart mutation events.
pub trait CartObserver {
    /// Called after a mutation has been applied.
    fn on_event(&mut self, event: &CartEvent);
}

/// Observer that ignores all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CartObserver for NoopObserver {
    fn on_event(&mut self, _event: &CartEvent) {}
}

/// Records events in order.
impl CartObserver for Vec<CartEvent> {
    fn on_event(&mut self, event: &CartEvent) {
        self.push(*event);
    }
}

impl<O: CartObserver + ?Sized> CartObserver for &mut O {
    fn on_event(&mut self, event: &CartEvent) {
        (**self).on_event(event);
    }
}
