//! The cart state container.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::line_item::{LineItem, ProductRef};

/// Session-scoped shopping cart.
///
/// Holds line items in insertion order and the summary drawer's visibility
/// flag. Serializable so the session layer can own it across requests;
/// nothing about it persists beyond the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
    open: bool,
}

impl Cart {
    /// Create an empty cart with the drawer closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart and open the drawer.
    ///
    /// If an item with the same ID already exists its quantity is
    /// incremented by 1 and the supplied metadata is discarded; otherwise
    /// the product is appended as a new item with quantity 1.
    pub fn add_item(&mut self, product: ProductRef) {
        match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
            None => self.items.push(LineItem::from_ref(product)),
        }
        self.open = true;
    }

    /// Set the quantity of the item with the given ID.
    ///
    /// A quantity of 0 removes the item. An absent ID is a no-op in either
    /// direction; this never creates an item.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.items.retain(|item| item.id != id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = quantity;
        }
    }

    /// Open the summary drawer. Idempotent.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the summary drawer. Idempotent.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Whether the summary drawer is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total quantity across all items, for the badge.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |sum, item| sum.saturating_add(item.quantity))
    }

    /// Sum of `quantity x unit price` across all items.
    ///
    /// Recomputed from the items on every call. Unparseable amounts
    /// contribute zero.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| Decimal::from(item.quantity) * item.price.amount_decimal())
            .sum()
    }
}
