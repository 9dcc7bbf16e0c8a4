//! In-memory [`ProductStore`] implementation.
//!
//! Keeps records in insertion order in a `Vec` behind `std::sync::RwLock`
//! for thread safety. Snapshots are clones, so the query engine's input
//! stays stable for the duration of one pipeline run regardless of
//! concurrent writers.

use std::sync::RwLock;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;

use crate::models::{NewProduct, Product, ProductPatch};

use super::ProductStore;

struct Inner {
    products: Vec<Product>,
    next_id: u64,
}

/// In-memory store with monotonic id assignment.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                products: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn snapshot(&self) -> Result<Vec<Product>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.products.clone())
    }

    async fn get(&self, id: u64) -> Result<Option<Product>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.products.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, draft: NewProduct) -> Result<Product> {
        let mut inner = self.inner.write().unwrap();
        let now = Utc::now();
        let product = Product {
            id: inner.next_id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            in_stock: draft.in_stock,
            stock_quantity: draft.stock_quantity,
            created_at: now,
            updated_at: now,
        };
        inner.next_id += 1;
        inner.products.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: u64, patch: ProductPatch) -> Result<Option<Product>> {
        let mut inner = self.inner.write().unwrap();
        let product = match inner.products.iter_mut().find(|p| p.id == id) {
            Some(p) => p,
            None => return Ok(None),
        };
        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(in_stock) = patch.in_stock {
            product.in_stock = in_stock;
        }
        if let Some(stock_quantity) = patch.stock_quantity {
            product.stock_quantity = stock_quantity;
        }
        product.updated_at = Utc::now();
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: u64) -> Result<Option<Product>> {
        let mut inner = self.inner.write().unwrap();
        let pos = inner.products.iter().position(|p| p.id == id);
        Ok(pos.map(|i| inner.products.remove(i)))
    }

    async fn len(&self) -> Result<usize> {
        let inner = self.inner.read().unwrap();
        Ok(inner.products.len())
    }
}
