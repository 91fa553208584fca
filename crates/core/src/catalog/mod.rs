//! Catalog
//!
//! The fixed list of purchasable products for a session. A catalog is parsed
//! from a JSON array of product descriptors, or built from the fallback
//! products when the descriptors cannot be retrieved.

use rusty_money::{
    Money,
    iso::{self, Currency},
};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    pricing::{PriceError, minor_units_from_f64},
    products::{Product, ProductId},
};

mod fallback;

pub use fallback::{FALLBACK_PRODUCTS, FallbackProduct};

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document is not a valid descriptor array.
    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A descriptor carries a price that cannot be used (index, reason).
    #[error("product {0} has an invalid price: {1}")]
    InvalidPrice(usize, #[source] PriceError),
}

/// Product descriptor as it appears in the catalog document.
#[derive(Debug, Deserialize)]
pub struct ProductDescriptor {
    /// Product images
    pub image: ProductImages,

    /// Product name
    pub name: String,

    /// Product category
    pub category: String,

    /// Unit price as a decimal number (e.g. `6.5`)
    pub price: f64,
}

/// Image references of a product descriptor. Only the thumbnail is used.
#[derive(Debug, Deserialize)]
pub struct ProductImages {
    /// Thumbnail image reference
    pub thumbnail: String,
}

/// Catalog
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    products: Vec<Product<'a>>,
    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Get the product with the given identifier.
    pub fn get(&self, id: ProductId) -> Option<&Product<'a>> {
        self.products.get(id.index())
    }

    /// Iterate over products with their identifiers, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, &Product<'a>)> {
        self.products
            .iter()
            .enumerate()
            .map(|(index, product)| (ProductId::new(index), product))
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product<'a>] {
        &self.products
    }

    /// Get the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get the currency of the catalog.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

impl Catalog<'static> {
    /// Parse a catalog from a JSON array of product descriptors.
    ///
    /// Prices are read as US dollars.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Json`]: the document is not a descriptor array.
    /// - [`CatalogError::InvalidPrice`]: a price is negative or not representable.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let descriptors: Vec<ProductDescriptor> = serde_json::from_str(json)?;

        Self::from_descriptors(descriptors)
    }

    /// Build a catalog from already decoded descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidPrice`] if a price is negative or not
    /// representable.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = ProductDescriptor>,
    ) -> Result<Self, CatalogError> {
        let products = descriptors
            .into_iter()
            .enumerate()
            .map(|(index, descriptor)| {
                let minor_units = minor_units_from_f64(descriptor.price)
                    .map_err(|source| CatalogError::InvalidPrice(index, source))?;

                Ok(Product {
                    name: descriptor.name,
                    category: descriptor.category,
                    price: Money::from_minor(minor_units, iso::USD),
                    thumbnail: descriptor.image.thumbnail,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(Catalog {
            products,
            currency: iso::USD,
        })
    }

    /// The hardcoded catalog used when the configured one cannot be loaded.
    pub fn fallback() -> Self {
        let products = FALLBACK_PRODUCTS
            .iter()
            .map(|entry| Product {
                name: entry.name.to_string(),
                category: entry.category.to_string(),
                price: Money::from_minor(entry.price, iso::USD),
                thumbnail: entry.thumbnail.to_string(),
            })
            .collect();

        Catalog {
            products,
            currency: iso::USD,
        }
    }
}
