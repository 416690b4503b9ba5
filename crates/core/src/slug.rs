//! URL slug generation and matching.
//!
//! Directory records (recipes, farmers, ingredients) are addressed by slugs
//! derived from their display names, e.g. "Chicken Quinoa Bowl" ->
//! `chicken-quinoa-bowl`. Lookup compares the slug of each record's name
//! against the requested slug rather than reconstructing a name from the
//! slug, which is lossy for punctuation and mixed case.

/// Generate a URL slug from a display name.
///
/// Lowercases the input and joins alphanumeric runs with single hyphens;
/// every other character is treated as a separator.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
