//! Cart line items and the product references that create them.

use serde::{Deserialize, Serialize};
use shamba_core::{Image, Money};

/// A product reference supplied by the catalog when adding to the cart.
///
/// Carries the display metadata a new line item needs. On a repeat add of
/// the same ID the cart keeps the existing item's metadata and discards
/// this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    /// Product identifier, unique key within the cart.
    pub id: String,
    /// Display name, opaque to the cart.
    pub title: String,
    /// Unit price. The cart never interprets the currency.
    pub price: Money,
    /// Optional display image.
    pub image: Option<Image>,
}

/// One product entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier, unique key within the cart.
    pub id: String,
    /// Display name.
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Optional display image.
    pub image: Option<Image>,
    /// Always >= 1 while the item is present.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item from a product reference with quantity 1.
    #[must_use]
    pub fn from_ref(product: ProductRef) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            image: product.image,
            quantity: 1,
        }
    }
}
