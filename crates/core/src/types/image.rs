//! Display image metadata.

use serde::{Deserialize, Serialize};

/// Product or record image.
///
/// Opaque to everything but the display layer; the cart and catalog carry it
/// through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image URL.
    pub src: String,
    /// Alt text for accessibility.
    pub alt: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl Image {
    /// Default dimension used when the upstream payload omits one.
    pub const DEFAULT_DIMENSION: u32 = 800;

    /// Create an image, substituting defaults for missing dimensions.
    pub fn new(
        src: impl Into<String>,
        alt: impl Into<String>,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            width: width.unwrap_or(Self::DEFAULT_DIMENSION),
            height: height.unwrap_or(Self::DEFAULT_DIMENSION),
        }
    }
}
