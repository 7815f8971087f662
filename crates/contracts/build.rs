//! Build-time check of the embedded catalog.
//!
//! The catalog is static authoring data; a bad edit should fail the build
//! rather than surface in the browser.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const CATALOG_PATH: &str = "src/shared/catalog/catalog.json";

fn main() {
    println!("cargo:rerun-if-changed={}", CATALOG_PATH);

    let path = Path::new(CATALOG_PATH);
    let contents = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));

    let catalog: CatalogJson = serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("{} is not a valid catalog: {}", path.display(), e));

    if let Err(e) = check(&catalog) {
        panic!("{}: {}", path.display(), e);
    }
}

// ============================================================================
// JSON Schema Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct CatalogJson {
    categories: Vec<String>,
    brands: Vec<String>,
    products: Vec<ProductJson>,
    stories: Vec<StoryJson>,
}

#[derive(Debug, Deserialize)]
struct ProductJson {
    id: u32,
    brand: String,
    name: String,
    price: f64,
    #[allow(dead_code)]
    image: String,
    #[allow(dead_code)]
    #[serde(default)]
    tag: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StoryJson {
    id: u32,
    #[allow(dead_code)]
    category: String,
    #[allow(dead_code)]
    title: String,
    #[allow(dead_code)]
    image: String,
}

fn check(catalog: &CatalogJson) -> Result<(), String> {
    if catalog.categories.iter().any(|c| c.trim().is_empty()) {
        return Err("empty category label".into());
    }
    if catalog.brands.iter().any(|b| b.trim().is_empty()) {
        return Err("empty brand label".into());
    }

    let mut product_ids = HashSet::new();
    for product in &catalog.products {
        if product.id == 0 {
            return Err("product id must be positive".into());
        }
        if !product_ids.insert(product.id) {
            return Err(format!("duplicate product id {}", product.id));
        }
        if product.brand.trim().is_empty() || product.name.trim().is_empty() {
            return Err(format!("product {} is missing brand or name", product.id));
        }
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(format!("product {} has invalid price {}", product.id, product.price));
        }
    }

    let mut story_ids = HashSet::new();
    for story in &catalog.stories {
        if !story_ids.insert(story.id) {
            return Err(format!("duplicate story id {}", story.id));
        }
    }

    Ok(())
}
