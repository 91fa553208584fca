//! Sweetcart prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CartError, CartStore},
    catalog::{Catalog, CatalogError, ProductDescriptor},
    commands::{CartCommand, CommandParseError},
    events::{CartEvent, CartObserver, NoopObserver},
    items::LineItem,
    pricing::{PriceError, to_decimal},
    products::{Product, ProductId},
    summary::{OrderSummary, SummaryError, SummaryLine},
};
