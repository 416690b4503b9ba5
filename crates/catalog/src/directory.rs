//! Directory domain types mapped from raw records.
//!
//! Each `from_record` constructor encodes the field-name fallback chains and
//! defaults the content service's exports require. Missing fields become
//! empty values; nothing here fails.

use chrono::NaiveDate;
use shamba_core::{RecordId, slug::slugify};

use crate::markdown;
use crate::record::{Attachment, Record};

/// A recipe from the directory.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: RecordId,
    pub name: String,
    /// URL slug derived from the name.
    pub slug: String,
    pub image: Vec<Attachment>,
    pub recipe_credits: String,
    pub duration: String,
    /// Ingredient list as authored (one per line).
    pub ingredients: String,
    /// Teaser text as authored.
    pub intro: String,
    /// Teaser rendered to HTML.
    pub intro_html: String,
    /// Preparation steps rendered to HTML.
    pub preparation_html: String,
    pub created: Option<NaiveDate>,
    pub categories: Vec<String>,
    pub author: String,
}

impl Recipe {
    /// Map a raw record to a recipe.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        let name = record.text(&["Name", "Recipe Name"]);
        let intro = record.text(&["Intro", "Introduction"]);
        let preparation = record.text(&["Preparation", "Instructions"]);

        Self {
            id: record.id.clone(),
            slug: slugify(&name),
            name,
            image: record.attachments("Image"),
            recipe_credits: record.text(&["Recipe Credits", "Recipe credits"]),
            duration: record.text(&["Duration"]),
            ingredients: record.text(&["Ingredients"]),
            intro_html: markdown::render(&intro),
            intro,
            preparation_html: markdown::render(&preparation),
            created: parse_date(&record.text(&["Created", "Date"])),
            categories: record.text_list("Categories"),
            author: record.text(&["Author"]),
        }
    }
}

/// A farmer profile from the directory.
#[derive(Debug, Clone)]
pub struct Farmer {
    pub id: RecordId,
    pub name: String,
    /// URL slug derived from the farm name.
    pub slug: String,
    pub location: String,
    /// The farm's story as authored.
    pub description: String,
    /// Produce types the farm is known for.
    pub specialties: Vec<String>,
    pub image: Vec<Attachment>,
    pub contact_email: String,
    pub contact_phone: String,
    pub website: String,
    pub certifications: Vec<String>,
    pub farm_size: String,
    pub year_established: String,
    pub sustainability_practices: Vec<String>,
}

impl Farmer {
    /// Map a raw record to a farmer profile.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        let name = record.text(&["Farm Name"]);

        Self {
            id: record.id.clone(),
            slug: slugify(&name),
            name,
            location: record.text(&["Location"]),
            description: record.text(&["Story"]),
            specialties: record.text_list("Produce Type"),
            image: record.attachments("Image"),
            contact_email: record.text(&["Email"]),
            contact_phone: record.text(&["Phone"]),
            website: record.text(&["Website"]),
            certifications: record.text_list("Certifications"),
            farm_size: record.text(&["Farm Size"]),
            year_established: record.text(&["Year Established"]),
            sustainability_practices: record.text_list("Practices"),
        }
    }
}

/// An ingredient entry from the directory.
#[derive(Debug, Clone)]
pub struct Ingredient {
    pub id: RecordId,
    pub name: String,
    /// URL slug derived from the name.
    pub slug: String,
    /// First linked item type, or "Uncategorized".
    pub category: String,
    pub description: String,
    pub nutritional_info: String,
    pub seasonality: Vec<String>,
    pub image: Vec<Attachment>,
    pub origin: String,
    pub storage_instructions: String,
    pub culinary_uses: String,
    pub price: String,
    pub unit: String,
    pub in_stock: bool,
    pub suppliers: Vec<String>,
}

impl Ingredient {
    /// Map a raw record to an ingredient entry.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        let name = record.text(&["Name"]);
        let category = record
            .text_list("Name (from Item type)")
            .into_iter()
            .next()
            .unwrap_or_else(|| "Uncategorized".to_string());

        Self {
            id: record.id.clone(),
            slug: slugify(&name),
            name,
            category,
            description: record.text(&["Description"]),
            nutritional_info: record.text(&["Nutritional Information"]),
            seasonality: record.text_list("Seasonality"),
            image: record.attachments("Image"),
            origin: record.text(&["Origin"]),
            storage_instructions: record.text(&["Storage Instructions"]),
            culinary_uses: record.text(&["Culinary Uses"]),
            price: record.text(&["Price"]),
            unit: record.text(&["Unit"]),
            in_stock: record.boolean("In Stock"),
            suppliers: record.text_list("Suppliers"),
        }
    }
}

/// Parse a record date, accepting ISO dates with or without a time part.
fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}
