//! Shop route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::instrument;

use shamba_catalog::Product;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Product display data for listing cards.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub handle: String,
    pub title: String,
    pub price: String,
    pub available: bool,
    pub image: Option<ImageView>,
}

/// Image display data for templates.
#[derive(Clone)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
}

/// Variant display data for templates.
#[derive(Clone)]
pub struct VariantView {
    pub title: String,
    pub price: String,
}

/// Product display data for the detail page.
#[derive(Clone)]
pub struct ProductShowView {
    pub id: String,
    pub title: String,
    /// Plain-text description, shown when no HTML body was exported.
    pub description: String,
    pub description_html: String,
    pub price: String,
    pub available: bool,
    pub image: Option<ImageView>,
    pub variants: Vec<VariantView>,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_str().to_string(),
            handle: product.handle.clone(),
            title: product.title.clone(),
            price: product
                .default_variant()
                .map_or_else(|| "Coming soon".to_string(), |v| v.price.display()),
            available: product.default_variant().is_some(),
            image: product.featured_image().map(|image| ImageView {
                src: image.src.clone(),
                alt: image.alt.clone(),
            }),
        }
    }
}

impl From<&Product> for ProductShowView {
    fn from(product: &Product) -> Self {
        let card = ProductCardView::from(product);

        Self {
            id: card.id,
            title: card.title,
            description: product.description.clone(),
            description_html: product.description_html.clone(),
            price: card.price,
            available: card.available,
            image: card.image,
            variants: product
                .variants
                .iter()
                .map(|variant| VariantView {
                    title: variant.title.clone(),
                    price: variant.price.display(),
                })
                .collect(),
        }
    }
}

/// Shop listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/index.html")]
pub struct ShopIndexTemplate {
    pub products: Vec<ProductCardView>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductShowView,
}

/// Display the shop listing page.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let products = state
        .catalog()
        .products()
        .iter()
        .map(ProductCardView::from)
        .collect();

    ShopIndexTemplate { products }
}

/// Display a product detail page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<ProductShowTemplate> {
    let product = state
        .catalog()
        .product_by_handle(&handle)
        .ok_or_else(|| AppError::NotFound(format!("product {handle}")))?;

    Ok(ProductShowTemplate {
        product: ProductShowView::from(product),
    })
}
