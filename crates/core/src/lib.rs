//! Sweetcart
//!
//! Sweetcart is the state engine behind a small dessert-shop shopping cart: a
//! product catalog, a cart of line items with quantity adjustments and derived
//! totals, and the order summary shown on confirmation.
//!
//! Rendering is left to the caller. A UI layer drives a [`cart::CartStore`]
//! with [`commands::CartCommand`]s and reacts to [`events::CartEvent`]s.

pub mod cart;
pub mod catalog;
pub mod commands;
pub mod events;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod summary;
