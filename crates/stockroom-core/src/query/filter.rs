//! Filter predicates for the query pipeline.
//!
//! A record survives [`matches`] iff it passes every filter the caller
//! supplied; absent filters impose no constraint. All predicates are pure
//! functions of (parameters, record) with no side effects, so evaluation
//! order never affects the result.

use crate::models::Product;
use crate::query::QueryParams;

/// True iff `product` passes all supplied filters (logical AND).
///
/// - `search` — case-insensitive substring over name, description, or
///   category.
/// - `category` — case-insensitive exact match.
/// - `in_stock` — exact boolean match (tri-state: absent means no
///   constraint).
/// - `min_price` / `max_price` — independent inclusive bounds. A caller
///   passing `min > max` simply matches nothing; that is not an error.
pub fn matches(params: &QueryParams, product: &Product) -> bool {
    if let Some(search) = &params.search {
        let needle = search.to_lowercase();
        let hit = product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
            || product.category.to_lowercase().contains(&needle);
        if !hit {
            return false;
        }
    }

    if let Some(category) = &params.category {
        if !product.category.eq_ignore_ascii_case(category) {
            return false;
        }
    }

    if let Some(in_stock) = params.in_stock {
        if product.in_stock != in_stock {
            return false;
        }
    }

    if let Some(min) = params.min_price {
        if product.price < min {
            return false;
        }
    }

    if let Some(max) = params.max_price {
        if product.price > max {
            return false;
        }
    }

    true
}
