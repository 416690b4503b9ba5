//! Commerce product types and their raw export shapes.
//!
//! Product exports mirror the commerce service's payloads: camelCase keys,
//! optional image metadata, stringly priced variants. Conversion applies the
//! display defaults the storefront has always used - image alt text falls
//! back to the product title, missing dimensions default to 800, a missing
//! price becomes `"0" USD`.

use serde::Deserialize;
use shamba_core::{Image, Money, ProductId, VariantId};

/// A purchasable variant of a product.
#[derive(Debug, Clone)]
pub struct ProductVariant {
    pub id: VariantId,
    pub title: String,
    pub price: Money,
    pub image: Option<Image>,
}

/// A product in the shop.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// URL handle assigned by the commerce service.
    pub handle: String,
    pub description: String,
    pub description_html: String,
    pub images: Vec<Image>,
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// The variant used when adding the product to the cart without an
    /// explicit choice (the first one, as listed by the service).
    #[must_use]
    pub fn default_variant(&self) -> Option<&ProductVariant> {
        self.variants.first()
    }

    /// The image shown on cards and in the cart.
    #[must_use]
    pub fn featured_image(&self) -> Option<&Image> {
        self.images.first()
    }
}

// =============================================================================
// Raw export shapes
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawProduct {
    id: ProductId,
    title: String,
    handle: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    description_html: String,
    #[serde(default)]
    images: Vec<RawImage>,
    #[serde(default)]
    variants: Vec<RawVariant>,
}

#[derive(Debug, Deserialize)]
struct RawImage {
    src: String,
    #[serde(default)]
    alt: Option<String>,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawVariant {
    id: VariantId,
    title: String,
    #[serde(default)]
    price: Option<RawMoney>,
    #[serde(default)]
    image: Option<RawImage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMoney {
    #[serde(default)]
    amount: Option<String>,
    #[serde(default)]
    currency_code: Option<String>,
}

impl RawImage {
    fn into_image(self, fallback_alt: &str) -> Image {
        let alt = self
            .alt
            .filter(|alt| !alt.is_empty())
            .unwrap_or_else(|| fallback_alt.to_string());
        Image::new(self.src, alt, self.width, self.height)
    }
}

impl From<RawMoney> for Money {
    fn from(raw: RawMoney) -> Self {
        Self::new(
            raw.amount.unwrap_or_else(|| "0".to_string()),
            raw.currency_code.unwrap_or_else(|| "USD".to_string()),
        )
    }
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        let title = raw.title;
        let variants = raw
            .variants
            .into_iter()
            .map(|variant| {
                let variant_alt = format!("{title} - {}", variant.title);
                ProductVariant {
                    id: variant.id,
                    title: variant.title,
                    price: variant.price.map(Money::from).unwrap_or_else(|| {
                        Money::new("0", "USD")
                    }),
                    image: variant.image.map(|image| image.into_image(&variant_alt)),
                }
            })
            .collect();

        Self {
            id: raw.id,
            images: raw
                .images
                .into_iter()
                .map(|image| image.into_image(&title))
                .collect(),
            variants,
            title,
            handle: raw.handle,
            description: raw.description,
            description_html: raw.description_html,
        }
    }
}
