//! Fallback products

/// Product entry of the built-in fallback catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackProduct {
    /// Product name
    pub name: &'static str,

    /// Product category
    pub category: &'static str,

    /// Unit price in US cents
    pub price: i64,

    /// Thumbnail image reference
    pub thumbnail: &'static str,
}

/// Products served when the configured catalog cannot be loaded.
pub const FALLBACK_PRODUCTS: [FallbackProduct; 9] = [
    FallbackProduct {
        name: "Waffle with Berries",
        category: "Waffle",
        price: 6_50,
        thumbnail: "./assets/images/image-waffle-thumbnail.jpg",
    },
    FallbackProduct {
        name: "Vanilla Bean Crème Brûlée",
        category: "Crème Brûlée",
        price: 7_00,
        thumbnail: "./assets/images/image-creme-brulee-thumbnail.jpg",
    },
    FallbackProduct {
        name: "Macaron Mix of Five",
        category: "Macaron",
        price: 8_00,
        thumbnail: "./assets/images/image-macaron-thumbnail.jpg",
    },
    FallbackProduct {
        name: "Classic Tiramisu",
        category: "Tiramisu",
        price: 5_50,
        thumbnail: "./assets/images/image-tiramisu-thumbnail.jpg",
    },
    FallbackProduct {
        name: "Pistachio Baklava",
        category: "Baklava",
        price: 4_00,
        thumbnail: "./assets/images/image-baklava-thumbnail.jpg",
    },
    FallbackProduct {
        name: "Lemon Meringue Pie",
        category: "Pie",
        price: 5_00,
        thumbnail: "./assets/images/image-meringue-thumbnail.jpg",
    },
    FallbackProduct {
        name: "Red Velvet Cake",
        category: "Cake",
        price: 4_50,
        thumbnail: "./assets/images/image-cake-thumbnail.jpg",
    },
    FallbackProduct {
        name: "Salted Caramel Brownie",
        category: "Brownie",
        price: 4_50,
        thumbnail: "./assets/images/image-brownie-thumbnail.jpg",
    },
    FallbackProduct {
        name: "Vanilla Panna Cotta",
        category: "Panna Cotta",
        price: 6_50,
        thumbnail: "./assets/images/image-panna-cotta-thumbnail.jpg",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn fallback_names_are_unique() {
        let names: HashSet<&str> = FALLBACK_PRODUCTS.iter().map(|p| p.name).collect();

        assert_eq!(names.len(), FALLBACK_PRODUCTS.len());
    }

    #[test]
    fn fallback_prices_are_positive() {
        assert!(FALLBACK_PRODUCTS.iter().all(|p| p.price > 0));
    }
}
