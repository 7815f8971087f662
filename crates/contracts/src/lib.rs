//! Data contracts for the storefront landing page.
//!
//! Everything here is read-only: the catalog is authored as JSON, checked by
//! `build.rs`, and deserialized once on first access.

pub mod domain;
pub mod shared;

pub use domain::a001_product::{Product, ProductId};
pub use domain::a002_story::{Story, StoryId};
pub use shared::catalog::{catalog, Brand, Catalog, CatalogError, Category};
