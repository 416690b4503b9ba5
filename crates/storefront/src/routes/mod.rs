//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /our-story              - Our Story page (static)
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (catalog loaded)
//!
//! # Shop
//! GET  /shop                   - Product listing
//! GET  /shop/:handle           - Product detail
//!
//! # Recipes
//! GET  /recipes                - Recipe listing, newest first
//! GET  /recipes/:slug          - Recipe detail
//!
//! # Directory
//! GET  /directory              - Directory landing page
//! GET  /directory/farmers      - Farmer listing
//! GET  /directory/farmers/:slug     - Farmer profile
//! GET  /directory/ingredients  - Ingredient glossary
//! GET  /directory/ingredients/:slug - Glossary entry
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart drawer fragment
//! POST /cart/add               - Add item (drawer fragment, triggers cart-updated)
//! POST /cart/update            - Set quantity (drawer fragment, triggers cart-updated)
//! POST /cart/open              - Open the drawer (drawer fragment)
//! POST /cart/close             - Close the drawer (drawer fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Checkout stub redirect
//! ```

pub mod cart;
pub mod directory;
pub mod home;
pub mod recipes;
pub mod shop;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the shop routes router.
pub fn shop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shop::index))
        .route("/{handle}", get(shop::show))
}

/// Create the recipe routes router.
pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(recipes::index))
        .route("/{slug}", get(recipes::show))
}

/// Create the directory routes router.
pub fn directory_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(directory::index))
        .route("/farmers", get(directory::farmers_index))
        .route("/farmers/{slug}", get(directory::farmers_show))
        .route("/ingredients", get(directory::ingredients_index))
        .route("/ingredients/{slug}", get(directory::ingredients_show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::drawer))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/open", post(cart::open))
        .route("/close", post(cart::close))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/our-story", get(home::our_story))
        .nest("/shop", shop_routes())
        .nest("/recipes", recipe_routes())
        .nest("/directory", directory_routes())
        .nest("/cart", cart_routes())
        .route("/checkout", get(cart::checkout))
}
