//! In-memory catalog store loaded from JSON exports.
//!
//! One export file per collection, read once at startup:
//!
//! - `products.json` - commerce product export
//! - `recipes.json`, `farmers.json`, `ingredients.json` - directory record
//!   exports (`{ "id", "fields" }` arrays)
//!
//! A missing file logs a warning and yields an empty collection; a record
//! that does not match the expected shape is skipped with an error log.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::directory::{Farmer, Ingredient, Recipe};
use crate::error::CatalogError;
use crate::product::{Product, RawProduct};
use crate::record::Record;

/// Catalog store holding all loaded collections in memory.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    recipes: Vec<Recipe>,
    farmers: Vec<Farmer>,
    ingredients: Vec<Ingredient>,
}

impl CatalogStore {
    /// Load all collections from the export directory.
    ///
    /// # Errors
    ///
    /// Returns an error if an export file exists but cannot be read or is
    /// not valid JSON.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let products: Vec<Product> = load_items::<RawProduct>(&dir.join("products.json"))?
            .into_iter()
            .map(Product::from)
            .collect();
        let mut recipes = load_mapped(&dir.join("recipes.json"), Recipe::from_record)?;
        let farmers = load_mapped(&dir.join("farmers.json"), Farmer::from_record)?;
        let ingredients = load_mapped(&dir.join("ingredients.json"), Ingredient::from_record)?;

        // Newest first; undated records sink to the end.
        recipes.sort_by(|a, b| b.created.cmp(&a.created));

        tracing::info!(
            products = products.len(),
            recipes = recipes.len(),
            farmers = farmers.len(),
            ingredients = ingredients.len(),
            "Catalog loaded"
        );

        Ok(Self {
            products,
            recipes,
            farmers,
            ingredients,
        })
    }

    /// Whether anything was loaded at all.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        !(self.products.is_empty()
            && self.recipes.is_empty()
            && self.farmers.is_empty()
            && self.ingredients.is_empty())
    }

    /// All products, in export order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by its URL handle.
    #[must_use]
    pub fn product_by_handle(&self, handle: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.handle == handle)
    }

    /// Look up a product by its service-assigned ID.
    #[must_use]
    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// All recipes, newest first.
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up a recipe by slug.
    #[must_use]
    pub fn recipe_by_slug(&self, slug: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.slug == slug)
    }

    /// All farmer profiles, in export order.
    #[must_use]
    pub fn farmers(&self) -> &[Farmer] {
        &self.farmers
    }

    /// Look up a farmer by slug.
    #[must_use]
    pub fn farmer_by_slug(&self, slug: &str) -> Option<&Farmer> {
        self.farmers.iter().find(|f| f.slug == slug)
    }

    /// All ingredient entries, in export order.
    #[must_use]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Look up an ingredient by slug.
    #[must_use]
    pub fn ingredient_by_slug(&self, slug: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.slug == slug)
    }
}

/// Load a JSON array export, skipping elements that fail to parse.
fn load_items<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    if !path.exists() {
        tracing::warn!("Catalog export not found: {}", path.display());
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let values: Vec<Value> =
        serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<T>(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::error!("Skipping malformed entry in {}: {e}", path.display());
                None
            }
        })
        .collect())
}

/// Load a directory record export and map each record to a domain type.
fn load_mapped<T>(path: &Path, map: impl Fn(&Record) -> T) -> Result<Vec<T>, CatalogError> {
    Ok(load_items::<Record>(path)?
        .iter()
        .map(map)
        .collect())
}
