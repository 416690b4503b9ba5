//! Shamba Catalog - Product and directory record store.
//!
//! The storefront renders three kinds of externally authored data: commerce
//! products, and directory records (recipes, farmers, ingredients) exported
//! from the content service. This crate owns the mapping from those raw
//! payloads to domain types - field-name fallbacks, display defaults, slug
//! lookup - and an in-memory store loaded once at startup.
//!
//! The upstream services themselves are out of scope; the store reads local
//! JSON exports in the services' payload shapes.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod directory;
mod error;
mod markdown;
mod product;
mod record;
mod store;

pub use directory::{Farmer, Ingredient, Recipe};
pub use error::CatalogError;
pub use product::{Product, ProductVariant};
pub use record::{Attachment, Record};
pub use store::CatalogStore;
