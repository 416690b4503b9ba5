//! Recipe route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::instrument;

use shamba_catalog::Recipe;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Recipe display data for listing cards.
#[derive(Clone)]
pub struct RecipeCardView {
    pub slug: String,
    pub name: String,
    pub intro: String,
    pub duration: String,
    pub author: String,
    pub categories: Vec<String>,
    pub image: Option<ImageView>,
}

/// Image display data for templates.
#[derive(Clone)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
}

/// Recipe display data for the detail page.
#[derive(Clone)]
pub struct RecipeShowView {
    pub name: String,
    pub credits: String,
    pub duration: String,
    pub author: String,
    pub created: Option<String>,
    pub categories: Vec<String>,
    /// One ingredient per line, as authored.
    pub ingredients: Vec<String>,
    pub intro_html: String,
    pub preparation_html: String,
    pub image: Option<ImageView>,
}

fn first_image(recipe: &Recipe) -> Option<ImageView> {
    recipe.image.first().map(|attachment| ImageView {
        src: attachment.url.clone(),
        alt: recipe.name.clone(),
    })
}

impl From<&Recipe> for RecipeCardView {
    fn from(recipe: &Recipe) -> Self {
        Self {
            slug: recipe.slug.clone(),
            name: recipe.name.clone(),
            intro: recipe.intro.clone(),
            duration: recipe.duration.clone(),
            author: recipe.author.clone(),
            categories: recipe.categories.clone(),
            image: first_image(recipe),
        }
    }
}

impl From<&Recipe> for RecipeShowView {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            credits: recipe.recipe_credits.clone(),
            duration: recipe.duration.clone(),
            author: recipe.author.clone(),
            created: recipe
                .created
                .map(|date| date.format("%-d %B %Y").to_string()),
            categories: recipe.categories.clone(),
            ingredients: recipe
                .ingredients
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
            intro_html: recipe.intro_html.clone(),
            preparation_html: recipe.preparation_html.clone(),
            image: first_image(recipe),
        }
    }
}

/// Recipe listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "recipes/index.html")]
pub struct RecipesIndexTemplate {
    pub recipes: Vec<RecipeCardView>,
}

/// Recipe detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "recipes/show.html")]
pub struct RecipeShowTemplate {
    pub recipe: RecipeShowView,
}

/// Display the recipe listing page, newest first.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let recipes = state
        .catalog()
        .recipes()
        .iter()
        .map(RecipeCardView::from)
        .collect();

    RecipesIndexTemplate { recipes }
}

/// Display a recipe detail page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<RecipeShowTemplate> {
    let recipe = state
        .catalog()
        .recipe_by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("recipe {slug}")))?;

    Ok(RecipeShowTemplate {
        recipe: RecipeShowView::from(recipe),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use shamba_catalog::Record;

    use super::*;

    #[test]
    fn show_view_splits_ingredient_lines() {
        let record: Record = serde_json::from_value(json!({
            "id": "rec1",
            "fields": {
                "Name": "Sukuma Wiki",
                "Ingredients": "Collard greens\n\n  Onions  \nTomatoes"
            }
        }))
        .expect("record");
        let recipe = Recipe::from_record(&record);

        let view = RecipeShowView::from(&recipe);
        assert_eq!(view.ingredients, ["Collard greens", "Onions", "Tomatoes"]);
        assert_eq!(view.created, None);
    }
}
