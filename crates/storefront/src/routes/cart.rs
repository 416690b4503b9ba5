//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the session; every handler loads it, applies one
//! mutation through the cart's API, saves it back, and answers with the
//! re-rendered drawer fragment plus a `cart-updated` trigger so dependent
//! views (the badge) refresh in the same round trip.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use shamba_cart::{Cart, ProductRef};

use crate::state::AppState;

/// Session key under which the cart is stored.
pub const CART_SESSION_KEY: &str = "cart";

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub title: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image: Option<ImageView>,
}

/// Image display data for templates.
#[derive(Clone)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
    pub open: bool,
}

// =============================================================================
// Type Conversions
// =============================================================================

/// Format a decimal amount with its currency code, e.g. `"KES 360.00"`.
fn format_amount(currency_code: &str, amount: Decimal) -> String {
    format!("{currency_code} {amount:.2}")
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        // The catalog prices everything in one currency; take it from the
        // first item rather than hard-coding it.
        let currency = cart
            .items()
            .first()
            .map_or("KES", |item| item.price.currency_code.as_str());

        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            subtotal: format_amount(currency, cart.subtotal()),
            item_count: cart.total_items(),
            open: cart.is_open(),
        }
    }
}

impl From<&shamba_cart::LineItem> for CartItemView {
    fn from(item: &shamba_cart::LineItem) -> Self {
        let line_total = Decimal::from(item.quantity) * item.price.amount_decimal();

        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            quantity: item.quantity,
            price: item.price.display(),
            line_price: format_amount(&item.price.currency_code, line_total),
            image: item.image.as_ref().map(|image| ImageView {
                src: image.src.clone(),
                alt: image.alt.clone(),
            }),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart from the session, falling back to an empty one.
async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(CART_SESSION_KEY)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Save the cart back to the session.
async fn save_cart(session: &Session, cart: &Cart) {
    if let Err(e) = session.insert(CART_SESSION_KEY, cart).await {
        tracing::error!("Failed to save cart to session: {e}");
    }
}

/// Clamp raw form input to the cart's unsigned quantity domain.
///
/// The drawer's decrement control never sends a negative value, but the
/// manager's contract is total, so stray clients get `max(0, n)` semantics
/// here at the boundary.
fn clamp_quantity(raw: i64) -> u32 {
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: i64,
}

/// Cart drawer fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_drawer.html")]
pub struct CartDrawerTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Render the drawer with a trigger that refreshes dependent views.
fn drawer_with_trigger(cart: &Cart) -> Response {
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartDrawerTemplate {
            cart: CartView::from(cart),
        },
    )
        .into_response()
}

/// Display the cart drawer fragment.
#[instrument(skip(session))]
pub async fn drawer(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;
    CartDrawerTemplate {
        cart: CartView::from(&cart),
    }
}

/// Add a product to the cart (HTMX).
///
/// Looks the product up in the catalog, adds its default variant to the
/// session cart, and returns the drawer, which the add also opens.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let Some(product) = state.catalog().product_by_id(&form.product_id) else {
        tracing::warn!("Add to cart for unknown product {}", form.product_id);
        return (
            StatusCode::NOT_FOUND,
            Html("<span class=\"cart-error\">Item unavailable</span>"),
        )
            .into_response();
    };
    let Some(variant) = product.default_variant() else {
        tracing::warn!("Add to cart for variant-less product {}", product.handle);
        return (
            StatusCode::NOT_FOUND,
            Html("<span class=\"cart-error\">Item unavailable</span>"),
        )
            .into_response();
    };

    let image = variant.image.as_ref().or_else(|| product.featured_image());
    let candidate = ProductRef {
        id: product.id.as_str().to_string(),
        title: product.title.clone(),
        price: variant.price.clone(),
        image: image.cloned(),
    };

    let mut cart = load_cart(&session).await;
    cart.add_item(candidate);
    save_cart(&session, &cart).await;

    drawer_with_trigger(&cart)
}

/// Update a cart item's quantity (HTMX).
///
/// A quantity of zero removes the item; an unknown ID is a no-op.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Response {
    let mut cart = load_cart(&session).await;
    cart.update_quantity(&form.product_id, clamp_quantity(form.quantity));
    save_cart(&session, &cart).await;

    drawer_with_trigger(&cart)
}

/// Open the cart drawer (HTMX).
#[instrument(skip(session))]
pub async fn open(session: Session) -> impl IntoResponse {
    let mut cart = load_cart(&session).await;
    cart.open();
    save_cart(&session, &cart).await;

    CartDrawerTemplate {
        cart: CartView::from(&cart),
    }
}

/// Close the cart drawer (HTMX).
#[instrument(skip(session))]
pub async fn close(session: Session) -> impl IntoResponse {
    let mut cart = load_cart(&session).await;
    cart.close();
    save_cart(&session, &cart).await;

    CartDrawerTemplate {
        cart: CartView::from(&cart),
    }
}

/// Get the cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;
    CartCountTemplate {
        count: cart.total_items(),
    }
}

/// Checkout stub. There is no payment integration yet; send the shopper
/// back to the shop.
#[instrument]
pub async fn checkout() -> Redirect {
    Redirect::to("/shop")
}

#[cfg(test)]
mod tests {
    use shamba_core::Money;

    use super::*;

    fn kes_product(id: &str, title: &str, amount: &str) -> ProductRef {
        ProductRef {
            id: id.to_string(),
            title: title.to_string(),
            price: Money::new(amount, "KES"),
            image: None,
        }
    }

    #[test]
    fn clamp_maps_negative_input_to_removal() {
        assert_eq!(clamp_quantity(-3), 0);
        assert_eq!(clamp_quantity(0), 0);
        assert_eq!(clamp_quantity(5), 5);
    }

    #[test]
    fn view_formats_subtotal_in_the_items_currency() {
        let mut cart = Cart::new();
        cart.add_item(kes_product("1", "Tomatoes", "180.00"));
        cart.add_item(kes_product("1", "Tomatoes", "180.00"));

        let view = CartView::from(&cart);
        assert_eq!(view.subtotal, "KES 360.00");
        assert_eq!(view.item_count, 2);
        assert!(view.open);
        assert_eq!(view.items[0].line_price, "KES 360.00");
        assert_eq!(view.items[0].price, "KES 180.00");
    }

    #[test]
    fn empty_cart_view_has_zero_subtotal() {
        let view = CartView::from(&Cart::new());
        assert_eq!(view.subtotal, "KES 0.00");
        assert_eq!(view.item_count, 0);
        assert!(!view.open);
    }
}
