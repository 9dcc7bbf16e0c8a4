//! Core data models used throughout Stockroom.
//!
//! These types represent the catalog records that flow through the store
//! and the query engine, plus the value objects used for creation and
//! partial updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog record.
///
/// `id` is assigned monotonically by the owning store and never changes.
/// `updated_at` is bumped on every mutation; `created_at` is set once at
/// insertion and holds `updated_at >= created_at` from then on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    pub stock_quantity: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation payload for a product.
///
/// `name`, `price`, and `category` are required; the rest default to an
/// empty description, in stock, and zero quantity. Validation of the
/// field contents (non-empty name, positive price) happens at the request
/// boundary, not here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub stock_quantity: u64,
}

fn default_in_stock() -> bool {
    true
}

/// Partial update payload. Absent fields leave the record untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    pub stock_quantity: Option<u64>,
}

impl ProductPatch {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.in_stock.is_none()
            && self.stock_quantity.is_none()
    }
}
