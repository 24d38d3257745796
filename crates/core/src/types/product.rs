//! The immutable product record.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A product in the fixed, read-only catalog.
///
/// Products are provided once at startup and never created or destroyed
/// at runtime. The `image` field is an opaque reference (URL) consumed by
/// the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category used to group the products view.
    pub category: String,
    /// Unit price in the smallest displayed currency unit.
    pub price: Price,
    /// Image reference for product cards.
    pub image: String,
}
