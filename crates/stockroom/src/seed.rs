//! Catalog seeding.
//!
//! Loads an initial set of products into a store at startup: either a JSON
//! array of creation payloads from the configured seed file, or the
//! built-in sample catalog behind `stockd serve --sample`.

use std::path::Path;

use anyhow::{Context, Result};

use stockroom_core::models::NewProduct;
use stockroom_core::store::ProductStore;

use crate::validate::validate_new;

/// Read, validate, and insert a JSON seed file. Returns the number of
/// records inserted. Any invalid entry aborts the whole load.
pub async fn seed_from_file(store: &dyn ProductStore, path: &Path) -> Result<usize> {
    let drafts = read_seed_file(path)?;
    let count = drafts.len();
    for draft in drafts {
        store.insert(draft).await?;
    }
    Ok(count)
}

/// Parse and validate a seed file without touching a store. Used by
/// `stockd check` as well as the loader above.
pub fn read_seed_file(path: &Path) -> Result<Vec<NewProduct>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;
    let drafts: Vec<NewProduct> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse seed file: {}", path.display()))?;
    for (i, draft) in drafts.iter().enumerate() {
        validate_new(draft).with_context(|| format!("Invalid seed entry at index {}", i))?;
    }
    Ok(drafts)
}

/// Insert the built-in sample catalog. Returns the number of records.
pub async fn seed_sample(store: &dyn ProductStore) -> Result<usize> {
    let drafts = sample_products();
    let count = drafts.len();
    for draft in drafts {
        store.insert(draft).await?;
    }
    Ok(count)
}

/// The built-in five-record demo catalog.
pub fn sample_products() -> Vec<NewProduct> {
    let specs: [(&str, &str, f64, &str, bool, u64); 5] = [
        (
            "Wireless Headphones",
            "Over-ear noise cancelling headphones",
            99.99,
            "Electronics",
            true,
            25,
        ),
        (
            "Coffee Maker",
            "Drip machine that brews up to 12 cups",
            19.99,
            "Kitchen",
            true,
            40,
        ),
        (
            "Wireless Mouse",
            "Ergonomic mouse with a 2.4 GHz dongle",
            49.99,
            "Electronics",
            true,
            50,
        ),
        (
            "Mechanical Keyboard",
            "Tactile switches in an aluminium frame",
            79.99,
            "Electronics",
            false,
            0,
        ),
        (
            "Water Bottle",
            "Insulated stainless steel, 750 ml",
            29.99,
            "Sports",
            true,
            200,
        ),
    ];
    specs
        .iter()
        .map(
            |(name, description, price, category, in_stock, stock_quantity)| NewProduct {
                name: name.to_string(),
                description: description.to_string(),
                price: *price,
                category: category.to_string(),
                in_stock: *in_stock,
                stock_quantity: *stock_quantity,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::store::MemoryStore;

    #[tokio::test]
    async fn test_sample_catalog_loads() {
        let store = MemoryStore::new();
        let count = seed_sample(&store).await.unwrap();
        assert_eq!(count, 5);
        assert_eq!(store.len().await.unwrap(), 5);
    }

    #[test]
    fn test_sample_entries_are_valid() {
        for draft in sample_products() {
            assert!(validate_new(&draft).is_ok());
        }
    }

    #[tokio::test]
    async fn test_seed_from_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"name": "Notebook", "price": 4.5, "category": "Office"}]"#,
        )
        .unwrap();

        let store = MemoryStore::new();
        let count = seed_from_file(&store, &path).await.unwrap();
        assert_eq!(count, 1);
        let snap = store.snapshot().await.unwrap();
        assert_eq!(snap[0].name, "Notebook");
    }

    #[test]
    fn test_invalid_seed_entry_reports_index() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"name": "Ok", "price": 1.0, "category": "A"},
               {"name": "", "price": 1.0, "category": "A"}]"#,
        )
        .unwrap();

        let err = read_seed_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("index 1"));
    }
}
