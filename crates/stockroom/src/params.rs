//! Query-string parameter parsing.
//!
//! This is the boundary the engine relies on: raw string values are
//! coerced into a typed [`QueryParams`] bundle here, so the pipeline never
//! sees malformed input. Coercion failures are reported as errors for the
//! server to map to 400 responses; out-of-range page/limit values are
//! normalized instead of rejected.

use anyhow::{bail, Result};
use serde::Deserialize;

use stockroom_core::query::{QueryParams, SortField, SortOrder};

use crate::config::QueryConfig;

/// Raw query-string fields as received on `GET /products`.
///
/// Everything is an optional string; [`parse_query`] owns all coercion.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub in_stock: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Coerce a [`RawQuery`] into [`QueryParams`].
///
/// - `inStock` accepts `true`/`false` (case-insensitive); anything else
///   is an error.
/// - `minPrice`/`maxPrice` must parse as non-negative numbers. No
///   relation between them is enforced.
/// - `sortBy` must name a sortable field; unknown names are rejected here
///   rather than ignored inside the comparator.
/// - `sortOrder` is lenient: anything other than `desc` means `asc`.
/// - `page`/`limit` must parse as integers; values below 1 normalize to 1.
///   A configured `max_limit` caps `limit`.
pub fn parse_query(raw: RawQuery, query_config: &QueryConfig) -> Result<QueryParams> {
    let in_stock = match raw.in_stock.as_deref() {
        None => None,
        Some(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Some(s) if s.eq_ignore_ascii_case("false") => Some(false),
        Some(other) => bail!("inStock must be true or false, got: {}", other),
    };

    let min_price = parse_price(raw.min_price.as_deref(), "minPrice")?;
    let max_price = parse_price(raw.max_price.as_deref(), "maxPrice")?;

    let sort_by = match raw.sort_by.as_deref() {
        None => None,
        Some(s) => Some(s.parse::<SortField>()?),
    };
    let sort_order = raw
        .sort_order
        .as_deref()
        .map(SortOrder::parse_lenient)
        .unwrap_or_default();

    let page = parse_positive_int(raw.page.as_deref(), "page")?.unwrap_or(1);
    let mut limit =
        parse_positive_int(raw.limit.as_deref(), "limit")?.unwrap_or(query_config.default_limit);
    if let Some(max) = query_config.max_limit {
        limit = limit.min(max);
    }

    Ok(QueryParams {
        search: raw.search.filter(|s| !s.is_empty()),
        category: raw.category.filter(|s| !s.is_empty()),
        in_stock,
        min_price,
        max_price,
        sort_by,
        sort_order,
        page,
        limit,
    })
}

fn parse_price(value: Option<&str>, field: &str) -> Result<Option<f64>> {
    let Some(s) = value else {
        return Ok(None);
    };
    let parsed: f64 = match s.parse() {
        Ok(v) => v,
        Err(_) => bail!("{} must be a number, got: {}", field, s),
    };
    if !parsed.is_finite() || parsed < 0.0 {
        bail!("{} must be a non-negative number, got: {}", field, s);
    }
    Ok(Some(parsed))
}

fn parse_positive_int(value: Option<&str>, field: &str) -> Result<Option<u64>> {
    let Some(s) = value else {
        return Ok(None);
    };
    let parsed: i64 = match s.parse() {
        Ok(v) => v,
        Err(_) => bail!("{} must be an integer, got: {}", field, s),
    };
    // Values below 1 are normalized, not rejected.
    Ok(Some(parsed.max(1) as u64))
}
