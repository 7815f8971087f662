//! Static catalog backing the landing page.
//!
//! `catalog.json` is embedded at compile time and validated twice: once by
//! `build.rs` (a malformed document fails the build) and again by
//! [`Catalog::from_json`], which is what tests and callers go through.

use crate::domain::a001_product::{Product, ProductId};
use crate::domain::a002_story::{Story, StoryId};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Navigation label. Order in the catalog is the display order.
pub type Category = String;

/// Brand label for the ticker.
pub type Brand = String;

const CATALOG_JSON: &str = include_str!("catalog.json");

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_json(CATALOG_JSON).expect("catalog.json is checked by build.rs")
});

/// The catalog for this page load.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("category labels must not be empty")]
    EmptyCategory,

    #[error("brand labels must not be empty")]
    EmptyBrand,

    #[error("product id must be a positive integer")]
    NonPositiveProductId,

    #[error("product id {0} is used more than once")]
    DuplicateProductId(ProductId),

    #[error("story id {0} is used more than once")]
    DuplicateStoryId(StoryId),

    #[error("product {id}: `{field}` must not be empty")]
    EmptyField { id: ProductId, field: &'static str },

    #[error("product {id}: price {price} must be a non-negative number")]
    InvalidPrice { id: ProductId, price: f64 },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub brands: Vec<Brand>,
    pub products: Vec<Product>,
    pub stories: Vec<Story>,
}

impl Catalog {
    /// Parse a catalog document and check its integrity.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Authoring checks: unique ids, required text present, sane prices.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.categories.iter().any(|c| c.trim().is_empty()) {
            return Err(CatalogError::EmptyCategory);
        }
        if self.brands.iter().any(|b| b.trim().is_empty()) {
            return Err(CatalogError::EmptyBrand);
        }

        let mut product_ids = HashSet::new();
        for product in &self.products {
            if product.id.value() == 0 {
                return Err(CatalogError::NonPositiveProductId);
            }
            if !product_ids.insert(product.id) {
                return Err(CatalogError::DuplicateProductId(product.id));
            }
            if product.brand.trim().is_empty() {
                return Err(CatalogError::EmptyField { id: product.id, field: "brand" });
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyField { id: product.id, field: "name" });
            }
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(CatalogError::InvalidPrice { id: product.id, price: product.price });
            }
        }

        let mut story_ids = HashSet::new();
        for story in &self.stories {
            if !story_ids.insert(story.id) {
                return Err(CatalogError::DuplicateStoryId(story.id));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn with_products(products: &str) -> String {
        format!(r#"{{"categories":[],"brands":[],"products":{products},"stories":[]}}"#)
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = catalog();
        assert_eq!(catalog.categories.len(), 7);
        assert_eq!(catalog.brands.len(), 10);
        assert_eq!(catalog.products.len(), 4);
        assert_eq!(catalog.stories.len(), 3);
    }

    #[test]
    fn test_embedded_catalog_preserves_order() {
        let catalog = catalog();
        assert_eq!(
            &catalog.categories[..4],
            &["Men", "Women", "Lifestyle", "Beauty"]
        );
        let ids: Vec<u32> = catalog.products.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(catalog.products[2].tag, None);
        assert_eq!(catalog.products[3].tag.as_deref(), Some("Sale"));
    }

    #[test]
    fn test_empty_collections_are_valid() {
        let catalog = Catalog::from_json(&with_products("[]")).unwrap();
        assert!(catalog.products.is_empty());
    }

    #[test]
    fn test_duplicate_product_id_rejected() {
        let json = with_products(
            r#"[{"id":1,"brand":"A","name":"a","price":1.0,"image":""},
                {"id":1,"brand":"B","name":"b","price":2.0,"image":""}]"#,
        );
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateProductId(ProductId(1))));
    }

    #[test]
    fn test_zero_product_id_rejected() {
        let json = with_products(r#"[{"id":0,"brand":"A","name":"a","price":1.0,"image":""}]"#);
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, CatalogError::NonPositiveProductId));
    }

    #[test]
    fn test_empty_brand_rejected() {
        let json = with_products(r#"[{"id":2,"brand":" ","name":"a","price":1.0,"image":""}]"#);
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyField { field: "brand", .. }));
    }

    #[test]
    fn test_negative_price_rejected() {
        let json = with_products(r#"[{"id":2,"brand":"A","name":"a","price":-5.0,"image":""}]"#);
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPrice { .. }));
        assert_eq!(err.to_string(), "product 2: price -5 must be a non-negative number");
    }

    #[test]
    fn test_duplicate_story_id_rejected() {
        let json = r#"{"categories":[],"brands":[],"products":[],"stories":[
            {"id":4,"category":"MUSIC","title":"a","image":""},
            {"id":4,"category":"MUSIC","title":"b","image":""}]}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateStoryId(StoryId(4))));
    }

    #[test]
    fn test_empty_category_rejected() {
        let json = r#"{"categories":["Men",""],"brands":[],"products":[],"stories":[]}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyCategory));
    }

    #[test]
    fn test_empty_brand_label_rejected() {
        let json = r#"{"categories":[],"brands":["NIKE","  "],"products":[],"stories":[]}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyBrand));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Catalog::from_json("{").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
