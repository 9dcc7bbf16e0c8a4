//! The query engine: filter → sort → paginate over a record snapshot.
//!
//! [`execute`] is the single entry point all frontends delegate to. It is
//! a total, synchronous, side-effect-free function of an owned snapshot
//! and a parsed [`QueryParams`] bundle: no I/O, no shared state, no error
//! outcomes. The surrounding application is responsible for coercing raw
//! query-string input into `QueryParams` and for serializing the
//! [`QueryResult`] envelope.
//!
//! # Pipeline
//!
//! 1. Filter the full snapshot through [`filter::matches`], preserving
//!    snapshot order.
//! 2. If `sort_by` is set, stable-sort the filtered records with
//!    [`sort::sort_products`].
//! 3. Paginate with [`page::paginate`]; metadata is computed against the
//!    filtered length, never the raw snapshot length.
//! 4. Assemble the envelope: page of records, pagination metadata, and an
//!    echo of the filters the caller actually supplied.

pub mod filter;
pub mod page;
pub mod sort;

use serde::Serialize;

use crate::models::Product;

pub use page::Pagination;
pub use sort::{SortField, SortOrder, UnknownSortField};

/// Default page size when the caller supplies no `limit`.
pub const DEFAULT_LIMIT: u64 = 10;

/// A fully-parsed, immutable query parameter bundle.
///
/// Constructed fresh per query by the parsing boundary; the engine never
/// sees raw strings. `page` and `limit` below 1 are normalized to 1 by
/// the paginator, so any value is safe here.
#[derive(Debug, Clone)]
pub struct QueryParams {
    /// Case-insensitive substring match over name, description, category.
    pub search: Option<String>,
    /// Case-insensitive exact category match.
    pub category: Option<String>,
    /// Tri-state stock filter: unset / true / false.
    pub in_stock: Option<bool>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound. No relation to `min_price` is
    /// enforced; `min > max` yields an empty result.
    pub max_price: Option<f64>,
    /// Field to sort on; `None` leaves the filtered order untouched.
    pub sort_by: Option<SortField>,
    pub sort_order: SortOrder,
    pub page: u64,
    pub limit: u64,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            in_stock: None,
            min_price: None,
            max_price: None,
            sort_by: None,
            sort_order: SortOrder::Asc,
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Echo of the filters the caller supplied.
///
/// Absent parameters serialize as `null` rather than being omitted, so a
/// client can always see the full filter surface. `sort_order` is the one
/// exception to "supplied values only": it always reports its effective
/// value, including the `asc` default.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort_by: Option<SortField>,
    pub sort_order: SortOrder,
}

impl From<&QueryParams> for AppliedFilters {
    fn from(params: &QueryParams) -> Self {
        Self {
            search: params.search.clone(),
            category: params.category.clone(),
            in_stock: params.in_stock,
            min_price: params.min_price,
            max_price: params.max_price,
            sort_by: params.sort_by,
            sort_order: params.sort_order,
        }
    }
}

/// Result envelope for one query: the requested page of records,
/// pagination metadata, and the echoed filters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub data: Vec<Product>,
    pub pagination: Pagination,
    pub filters: AppliedFilters,
}

/// Run the query pipeline over a snapshot.
///
/// The snapshot is consumed; callers holding a live collection should pass
/// a point-in-time clone (which is what [`crate::store::ProductStore::snapshot`]
/// returns).
pub fn execute(snapshot: Vec<Product>, params: &QueryParams) -> QueryResult {
    let mut matched: Vec<Product> = snapshot
        .into_iter()
        .filter(|p| filter::matches(params, p))
        .collect();

    if let Some(field) = params.sort_by {
        sort::sort_products(&mut matched, field, params.sort_order);
    }

    let (data, pagination) = page::paginate(matched, params.page, params.limit);

    QueryResult {
        data,
        pagination,
        filters: AppliedFilters::from(params),
    }
}
