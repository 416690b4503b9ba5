//! Home page and static page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::routes::recipes::RecipeCardView;
use crate::routes::shop::ProductCardView;
use crate::state::AppState;

/// How many products and recipes to feature on the landing page.
const FEATURED_LIMIT: usize = 4;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductCardView>,
    pub recipes: Vec<RecipeCardView>,
}

/// Display the landing page with featured products and the latest recipes.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let products = state
        .catalog()
        .products()
        .iter()
        .take(FEATURED_LIMIT)
        .map(ProductCardView::from)
        .collect();
    let recipes = state
        .catalog()
        .recipes()
        .iter()
        .take(FEATURED_LIMIT)
        .map(RecipeCardView::from)
        .collect();

    HomeTemplate { products, recipes }
}

/// Our Story page template. Static content, no catalog data.
#[derive(Template, WebTemplate)]
#[template(path = "our_story.html")]
pub struct OurStoryTemplate;

/// Display the Our Story page.
#[instrument]
pub async fn our_story() -> impl IntoResponse {
    OurStoryTemplate
}
