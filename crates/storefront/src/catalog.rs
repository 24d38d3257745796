//! The fixed product catalog.
//!
//! The catalog is read once at startup - either from a JSON file or from
//! the built-in demo data - and is never mutated afterwards. It is the
//! only source of product records; the cart stores ids and joins against
//! the catalog on every derived read.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use thiserror::Error;

use plantify_core::{Price, Product, ProductId};

/// Error loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The file was not a valid JSON array of products.
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An ordered, read-only collection of products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wrap a startup-provided ordered sequence of products.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load a catalog from a JSON file containing an array of products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        let products: Vec<Product> = serde_json::from_str(&raw)?;
        tracing::info!(count = products.len(), path = %path.display(), "catalog loaded");
        Ok(Self::new(products))
    }

    /// The built-in houseplant demo catalog.
    #[must_use]
    pub fn demo() -> Self {
        let product = |id: &str, name: &str, category: &str, price: u64, image: &str| Product {
            id: ProductId::from(id),
            name: name.to_string(),
            category: category.to_string(),
            price: Price::new(price),
            image: image.to_string(),
        };

        Self::new(vec![
            product(
                "p1",
                "Snake Plant",
                "Air Purifier",
                799,
                "https://images.unsplash.com/photo-1542838132-92c53300491e?auto=format&fit=crop&w=400&q=60",
            ),
            product(
                "p2",
                "Monstera Deliciosa",
                "Large",
                1599,
                "https://images.unsplash.com/photo-1524594154901-6b3c1247d6b2?auto=format&fit=crop&w=400&q=60",
            ),
            product(
                "p3",
                "ZZ Plant",
                "Low Light",
                699,
                "https://images.unsplash.com/photo-1544025162-d76694265947?auto=format&fit=crop&w=400&q=60",
            ),
            product(
                "p4",
                "Pothos",
                "Trailing",
                499,
                "https://images.unsplash.com/photo-1587300003388-59208cc962cb?auto=format&fit=crop&w=400&q=60",
            ),
            product(
                "p5",
                "Fiddle Leaf Fig",
                "Large",
                2499,
                "https://images.unsplash.com/photo-1519710164239-da123dc03ef4?auto=format&fit=crop&w=400&q=60",
            ),
            product(
                "p6",
                "Peace Lily",
                "Flowering",
                899,
                "https://images.unsplash.com/photo-1501004318641-b39e6451bec6?auto=format&fit=crop&w=400&q=60",
            ),
        ])
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Group products by category, preserving the order in which each
    /// category first appears in the catalog.
    #[must_use]
    pub fn by_category(&self) -> IndexMap<&str, Vec<&Product>> {
        let mut categories: IndexMap<&str, Vec<&Product>> = IndexMap::new();
        for product in &self.products {
            categories
                .entry(product.category.as_str())
                .or_default()
                .push(product);
        }
        categories
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
