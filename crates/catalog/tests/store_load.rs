//! Catalog store loading against the fixture exports.

use std::path::{Path, PathBuf};

use shamba_catalog::CatalogStore;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn loads_all_collections_from_exports() {
    let store = CatalogStore::load(&fixtures_dir()).expect("load");

    assert!(store.is_loaded());
    assert_eq!(store.products().len(), 3);
    assert_eq!(store.recipes().len(), 2);
    assert_eq!(store.farmers().len(), 1);
    // ingredients.json is deliberately absent from the fixtures
    assert!(store.ingredients().is_empty());
}

#[test]
fn products_resolve_by_handle_with_display_defaults() {
    let store = CatalogStore::load(&fixtures_dir()).expect("load");

    let tomatoes = store.product_by_handle("tomatoes").expect("tomatoes");
    assert_eq!(tomatoes.title, "Tomatoes");
    // empty export alt falls back to the product title
    assert_eq!(tomatoes.featured_image().expect("image").alt, "Tomatoes");

    let variant = tomatoes.default_variant().expect("variant");
    assert_eq!(variant.price.display(), "KES 180.00");
    assert_eq!(
        variant.image.as_ref().expect("image").alt,
        "Tomatoes - 1kg"
    );

    assert!(store.product_by_handle("no-such-handle").is_none());
}

#[test]
fn recipes_sort_newest_first_and_skip_malformed_entries() {
    let store = CatalogStore::load(&fixtures_dir()).expect("load");

    // The fixture file has two records plus one malformed entry.
    let slugs: Vec<&str> = store.recipes().iter().map(|r| r.slug.as_str()).collect();
    assert_eq!(slugs, ["sukuma-wiki", "chicken-quinoa-bowl"]);

    let sukuma = store.recipe_by_slug("sukuma-wiki").expect("recipe");
    assert_eq!(sukuma.name, "Sukuma Wiki");
    assert_eq!(sukuma.intro, "The weeknight staple, done properly.");
    assert!(sukuma.preparation_html.contains("<p>Fry the onions until golden.</p>"));
    assert_eq!(sukuma.image.len(), 1);
}

#[test]
fn directory_records_resolve_by_slug() {
    let store = CatalogStore::load(&fixtures_dir()).expect("load");

    let farmer = store.farmer_by_slug("green-valley-farm").expect("farmer");
    assert_eq!(farmer.location, "Limuru, Kiambu County");
    assert_eq!(farmer.specialties.len(), 3);

    assert!(store.farmer_by_slug("unknown-farm").is_none());
    assert!(store.ingredient_by_slug("basmati-rice").is_none());
}

#[test]
fn empty_directory_loads_an_empty_store() {
    let missing = fixtures_dir().join("does-not-exist");
    let store = CatalogStore::load(&missing).expect("load");
    assert!(!store.is_loaded());
}
