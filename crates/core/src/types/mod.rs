//! Core types for Shamba Fresh.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod image;
pub mod money;

pub use id::*;
pub use image::Image;
pub use money::Money;
