//! Shamba Cart - Session-scoped shopping cart state.
//!
//! The cart is an insertion-ordered collection of line items keyed by
//! product ID, plus a visibility flag for the summary drawer. It lives for
//! the duration of one browser session, owned by whatever context
//! instantiates it (the storefront keeps one per session); all mutation goes
//! through its methods.
//!
//! # Invariants
//!
//! - No two line items share a product ID.
//! - Every line item has `quantity >= 1`; an item whose quantity would
//!   become 0 is removed, never stored at zero.
//! - Derived values (item count, subtotal) are recomputed from the items on
//!   every call, never cached.
//!
//! No operation performs I/O or can fail. Inputs are trusted: the catalog
//! validates product data before it reaches the cart.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod cart;
mod line_item;

pub use cart::Cart;
pub use line_item::{LineItem, ProductRef};
