//! Shamba Core - Shared types library.
//!
//! This crate provides common types used across all Shamba Fresh components:
//! - `cart` - Session-scoped shopping cart state
//! - `catalog` - Product and directory record store
//! - `storefront` - Public-facing grocery and recipe site
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Money, images, and type-safe string IDs
//! - [`slug`] - URL slug generation and matching

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod slug;
pub mod types;

pub use types::*;
