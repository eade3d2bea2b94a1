//! Catalog collaborator interface.
//!
//! The product catalog is an opaque read-only data source. This module
//! defines the domain types and the provider seam; caching and retry policy
//! belong to the provider, not to the storefront core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use cute_shop_core::{CategoryId, CurrencyCode, Price, ProductId};

/// Product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    /// Image URL.
    pub url: String,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
}

/// A catalog product record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL slug used by the product detail route.
    pub slug: String,
    /// Current price.
    pub price: Price,
    /// Units in stock.
    pub stock: u32,
    /// Product images.
    pub images: Vec<ProductImage>,
    /// Categories the product belongs to.
    pub categories: Vec<CategoryId>,
    /// Long-form description.
    pub description: Option<String>,
}

/// Errors from the catalog collaborator.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product matches the requested id or slug.
    #[error("product not found: {0}")]
    NotFound(String),

    /// The catalog source could not be reached or answered malformed data.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Read-only query interface over the product catalog.
pub trait CatalogProvider {
    /// List all products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] if the source cannot be queried.
    fn products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Fetch a product by catalog id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no product has this id.
    fn product(&self, id: &ProductId) -> Result<Product, CatalogError>;

    /// Fetch a product by its URL slug.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no product has this slug.
    fn product_by_slug(&self, slug: &str) -> Result<Product, CatalogError>;
}

/// In-memory catalog seeded with demo products.
#[derive(Debug, Clone)]
pub struct DemoCatalog {
    products: Vec<Product>,
}

impl DemoCatalog {
    /// Create a catalog over the given products.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Catalog seeded with the demo shop inventory.
    #[must_use]
    pub fn seeded() -> Self {
        let furniture = CategoryId::new("furniture");
        let lighting = CategoryId::new("lighting");
        Self::new(vec![
            Product {
                id: ProductId::new("prod-1"),
                name: "Cozy Sofa".to_owned(),
                slug: "cozy-sofa".to_owned(),
                price: Price::from_cents(29_999, CurrencyCode::USD),
                stock: 4,
                images: vec![ProductImage {
                    url: "https://cdn.cute.shop/cozy-sofa.jpg".to_owned(),
                    alt_text: Some("A cozy two-seat sofa".to_owned()),
                }],
                categories: vec![furniture.clone()],
                description: Some("Two-seat sofa with washable covers.".to_owned()),
            },
            Product {
                id: ProductId::new("prod-2"),
                name: "Wooden Desk".to_owned(),
                slug: "wooden-desk".to_owned(),
                price: Price::from_cents(14_950, CurrencyCode::USD),
                stock: 11,
                images: vec![ProductImage {
                    url: "https://cdn.cute.shop/wooden-desk.jpg".to_owned(),
                    alt_text: None,
                }],
                categories: vec![furniture],
                description: None,
            },
            Product {
                id: ProductId::new("prod-3"),
                name: "Accent Lamp".to_owned(),
                slug: "accent-lamp".to_owned(),
                price: Price::from_cents(3_499, CurrencyCode::USD),
                stock: 0,
                images: Vec::new(),
                categories: vec![lighting],
                description: Some("Warm-light accent lamp.".to_owned()),
            },
        ])
    }
}

impl CatalogProvider for DemoCatalog {
    fn products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }

    fn product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        self.products
            .iter()
            .find(|p| p.id == *id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    fn product_by_slug(&self, slug: &str) -> Result<Product, CatalogError> {
        self.products
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(slug.to_owned()))
    }
}
