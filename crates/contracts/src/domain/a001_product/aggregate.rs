use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Local ordinal of a product, stable within a page load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A product shown in the "Fresh For The Week" grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    /// Brand line, shown above the name
    pub brand: String,

    pub name: String,

    /// Currency-agnostic price; the view fixes the symbol and two decimals
    pub price: f64,

    /// Image URL, loaded by the browser
    pub image: String,

    /// Promotional label ("New", "Limited", "Sale", ...)
    #[serde(default)]
    pub tag: Option<String>,
}

impl Product {
    /// Tag to render as a badge; an empty label counts as no tag.
    pub fn visible_tag(&self) -> Option<&str> {
        self.tag.as_deref().filter(|tag| !tag.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(tag: Option<&str>) -> Product {
        Product {
            id: ProductId(7),
            brand: "ROA".into(),
            name: "Trail Boot".into(),
            price: 290.0,
            image: "https://example.com/boot.jpg".into(),
            tag: tag.map(str::to_string),
        }
    }

    #[test]
    fn test_visible_tag() {
        assert_eq!(product(Some("Sale")).visible_tag(), Some("Sale"));
        assert_eq!(product(None).visible_tag(), None);
        assert_eq!(product(Some("")).visible_tag(), None);
        assert_eq!(product(Some("  ")).visible_tag(), None);
    }

    #[test]
    fn test_missing_tag_deserializes_as_none() {
        let json = r#"{"id":3,"brand":"VESSEL OBJECTS","name":"Ceramic Incense Burner","price":65.0,"image":"x"}"#;
        let parsed: Product = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, ProductId(3));
        assert!(parsed.tag.is_none());
    }
}
