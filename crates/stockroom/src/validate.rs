//! Request-body validation for creation and update payloads.
//!
//! The store and the engine both assume well-formed records; this module
//! enforces that at the request boundary (non-empty name and category,
//! positive finite price).

use anyhow::{bail, Result};

use stockroom_core::models::{NewProduct, ProductPatch};

pub fn validate_new(draft: &NewProduct) -> Result<()> {
    if draft.name.trim().is_empty() {
        bail!("name must not be empty");
    }
    if draft.category.trim().is_empty() {
        bail!("category must not be empty");
    }
    validate_price(draft.price)
}

pub fn validate_patch(patch: &ProductPatch) -> Result<()> {
    if patch.is_empty() {
        bail!("update body must set at least one field");
    }
    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            bail!("name must not be empty");
        }
    }
    if let Some(category) = &patch.category {
        if category.trim().is_empty() {
            bail!("category must not be empty");
        }
    }
    if let Some(price) = patch.price {
        validate_price(price)?;
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() || price <= 0.0 {
        bail!("price must be a positive number, got: {}", price);
    }
    Ok(())
}
