//! Directory route handlers: farmer profiles and the ingredient glossary.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::instrument;

use shamba_catalog::{Farmer, Ingredient};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Image display data for templates.
#[derive(Clone)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
}

/// Farmer display data for listing cards.
#[derive(Clone)]
pub struct FarmerCardView {
    pub slug: String,
    pub name: String,
    pub location: String,
    pub specialties: Vec<String>,
    pub image: Option<ImageView>,
}

/// Farmer display data for the profile page.
#[derive(Clone)]
pub struct FarmerShowView {
    pub name: String,
    pub location: String,
    pub description: String,
    pub specialties: Vec<String>,
    pub certifications: Vec<String>,
    pub farm_size: String,
    pub year_established: String,
    pub sustainability_practices: Vec<String>,
    pub contact_email: String,
    pub contact_phone: String,
    pub website: String,
    pub image: Option<ImageView>,
}

/// Ingredient display data for listing cards.
#[derive(Clone)]
pub struct IngredientCardView {
    pub slug: String,
    pub name: String,
    pub category: String,
    pub in_stock: bool,
    pub image: Option<ImageView>,
}

/// Ingredient display data for the glossary entry page.
#[derive(Clone)]
pub struct IngredientShowView {
    pub name: String,
    pub category: String,
    pub description: String,
    pub nutritional_info: String,
    pub seasonality: Vec<String>,
    pub origin: String,
    pub storage_instructions: String,
    pub culinary_uses: String,
    pub price: String,
    pub unit: String,
    pub in_stock: bool,
    pub suppliers: Vec<String>,
    pub image: Option<ImageView>,
}

fn attachment_image(
    attachments: &[shamba_catalog::Attachment],
    alt: &str,
) -> Option<ImageView> {
    attachments.first().map(|attachment| ImageView {
        src: attachment.url.clone(),
        alt: alt.to_string(),
    })
}

impl From<&Farmer> for FarmerCardView {
    fn from(farmer: &Farmer) -> Self {
        Self {
            slug: farmer.slug.clone(),
            name: farmer.name.clone(),
            location: farmer.location.clone(),
            specialties: farmer.specialties.clone(),
            image: attachment_image(&farmer.image, &farmer.name),
        }
    }
}

impl From<&Farmer> for FarmerShowView {
    fn from(farmer: &Farmer) -> Self {
        Self {
            name: farmer.name.clone(),
            location: farmer.location.clone(),
            description: farmer.description.clone(),
            specialties: farmer.specialties.clone(),
            certifications: farmer.certifications.clone(),
            farm_size: farmer.farm_size.clone(),
            year_established: farmer.year_established.clone(),
            sustainability_practices: farmer.sustainability_practices.clone(),
            contact_email: farmer.contact_email.clone(),
            contact_phone: farmer.contact_phone.clone(),
            website: farmer.website.clone(),
            image: attachment_image(&farmer.image, &farmer.name),
        }
    }
}

impl From<&Ingredient> for IngredientCardView {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            slug: ingredient.slug.clone(),
            name: ingredient.name.clone(),
            category: ingredient.category.clone(),
            in_stock: ingredient.in_stock,
            image: attachment_image(&ingredient.image, &ingredient.name),
        }
    }
}

impl From<&Ingredient> for IngredientShowView {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            name: ingredient.name.clone(),
            category: ingredient.category.clone(),
            description: ingredient.description.clone(),
            nutritional_info: ingredient.nutritional_info.clone(),
            seasonality: ingredient.seasonality.clone(),
            origin: ingredient.origin.clone(),
            storage_instructions: ingredient.storage_instructions.clone(),
            culinary_uses: ingredient.culinary_uses.clone(),
            price: ingredient.price.clone(),
            unit: ingredient.unit.clone(),
            in_stock: ingredient.in_stock,
            suppliers: ingredient.suppliers.clone(),
            image: attachment_image(&ingredient.image, &ingredient.name),
        }
    }
}

/// Directory landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "directory/index.html")]
pub struct DirectoryIndexTemplate {
    pub farmer_count: usize,
    pub ingredient_count: usize,
}

/// Farmer listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "directory/farmers.html")]
pub struct FarmersIndexTemplate {
    pub farmers: Vec<FarmerCardView>,
}

/// Farmer profile page template.
#[derive(Template, WebTemplate)]
#[template(path = "directory/farmer.html")]
pub struct FarmerShowTemplate {
    pub farmer: FarmerShowView,
}

/// Ingredient glossary listing template.
#[derive(Template, WebTemplate)]
#[template(path = "directory/ingredients.html")]
pub struct IngredientsIndexTemplate {
    pub ingredients: Vec<IngredientCardView>,
}

/// Ingredient glossary entry template.
#[derive(Template, WebTemplate)]
#[template(path = "directory/ingredient.html")]
pub struct IngredientShowTemplate {
    pub ingredient: IngredientShowView,
}

/// Display the directory landing page.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    DirectoryIndexTemplate {
        farmer_count: state.catalog().farmers().len(),
        ingredient_count: state.catalog().ingredients().len(),
    }
}

/// Display the farmer listing page.
#[instrument(skip(state))]
pub async fn farmers_index(State(state): State<AppState>) -> impl IntoResponse {
    let farmers = state
        .catalog()
        .farmers()
        .iter()
        .map(FarmerCardView::from)
        .collect();

    FarmersIndexTemplate { farmers }
}

/// Display a farmer profile page.
#[instrument(skip(state))]
pub async fn farmers_show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<FarmerShowTemplate> {
    let farmer = state
        .catalog()
        .farmer_by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("farmer {slug}")))?;

    Ok(FarmerShowTemplate {
        farmer: FarmerShowView::from(farmer),
    })
}

/// Display the ingredient glossary listing.
#[instrument(skip(state))]
pub async fn ingredients_index(State(state): State<AppState>) -> impl IntoResponse {
    let ingredients = state
        .catalog()
        .ingredients()
        .iter()
        .map(IngredientCardView::from)
        .collect();

    IngredientsIndexTemplate { ingredients }
}

/// Display an ingredient glossary entry.
#[instrument(skip(state))]
pub async fn ingredients_show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<IngredientShowTemplate> {
    let ingredient = state
        .catalog()
        .ingredient_by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("ingredient {slug}")))?;

    Ok(IngredientShowTemplate {
        ingredient: IngredientShowView::from(ingredient),
    })
}
