//! Sort field enumeration and the record comparator.
//!
//! Sortable fields are a closed enum mapped to typed accessors rather than
//! stringly-typed field lookup, so an unrecognized `sortBy` value is
//! rejected at the parameter-parsing boundary and the comparator itself is
//! total. String fields compare case-insensitively; floats use
//! `f64::total_cmp`, which orders NaN after every real value.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::models::Product;

/// A field the query engine can sort on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    Price,
    Category,
    InStock,
    StockQuantity,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Wire names of every sortable field, for error messages.
    pub const NAMES: [&'static str; 7] = [
        "name",
        "price",
        "category",
        "inStock",
        "stockQuantity",
        "createdAt",
        "updatedAt",
    ];
}

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "price" => Ok(SortField::Price),
            "category" => Ok(SortField::Category),
            "inStock" => Ok(SortField::InStock),
            "stockQuantity" => Ok(SortField::StockQuantity),
            "createdAt" => Ok(SortField::CreatedAt),
            "updatedAt" => Ok(SortField::UpdatedAt),
            other => Err(UnknownSortField(other.to_string())),
        }
    }
}

/// Error returned when a `sortBy` value names no sortable field.
#[derive(Debug, Clone)]
pub struct UnknownSortField(pub String);

impl fmt::Display for UnknownSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sort field: {} (expected one of: {})",
            self.0,
            SortField::NAMES.join(", ")
        )
    }
}

impl std::error::Error for UnknownSortField {}

/// Sort direction. `Asc` is the default; unrecognized values at the
/// parsing boundary fall back to it rather than erroring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Lenient parse: `"desc"` descends, everything else ascends.
    pub fn parse_lenient(s: &str) -> SortOrder {
        if s.eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

/// Natural-order comparison of two records on `field`.
///
/// Equal keys return [`Ordering::Equal`] so a stable sort preserves the
/// records' relative input order.
pub fn compare(a: &Product, b: &Product, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Price => a.price.total_cmp(&b.price),
        SortField::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
        SortField::InStock => a.in_stock.cmp(&b.in_stock),
        SortField::StockQuantity => a.stock_quantity.cmp(&b.stock_quantity),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}

/// Stable in-place sort by `field`, reversed for [`SortOrder::Desc`].
pub fn sort_products(products: &mut [Product], field: SortField, order: SortOrder) {
    products.sort_by(|a, b| {
        let ord = compare(a, b, field);
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::tests::sample_snapshot;

    #[test]
    fn test_parse_known_fields() {
        for name in SortField::NAMES {
            assert!(name.parse::<SortField>().is_ok(), "failed on {}", name);
        }
    }

    #[test]
    fn test_parse_unknown_field_errors() {
        let err = "warehouse".parse::<SortField>().unwrap_err();
        assert!(err.to_string().contains("warehouse"));
        assert!(err.to_string().contains("stockQuantity"));
    }

    #[test]
    fn test_sort_order_lenient() {
        assert_eq!(SortOrder::parse_lenient("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::parse_lenient("DESC"), SortOrder::Desc);
        assert_eq!(SortOrder::parse_lenient("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse_lenient("sideways"), SortOrder::Asc);
        assert_eq!(SortOrder::parse_lenient(""), SortOrder::Asc);
    }

    #[test]
    fn test_sort_by_price_desc() {
        let mut products = sample_snapshot();
        sort_products(&mut products, SortField::Price, SortOrder::Desc);
        let prices: Vec<f64> = products.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![99.99, 79.99, 49.99, 29.99, 19.99]);
    }

    #[test]
    fn test_sort_by_name_case_insensitive() {
        let mut products = sample_snapshot();
        products[0].name = "wireless headphones".to_string();
        sort_products(&mut products, SortField::Name, SortOrder::Asc);
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Coffee Maker",
                "Mechanical Keyboard",
                "Water Bottle",
                "wireless headphones",
                "Wireless Mouse",
            ]
        );
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let mut products = sample_snapshot();
        sort_products(&mut products, SortField::Category, SortOrder::Asc);
        // Three records share the "Electronics" category; their relative
        // order must match the snapshot (ids 1, 3, 4).
        let electronics: Vec<u64> = products
            .iter()
            .filter(|p| p.category == "Electronics")
            .map(|p| p.id)
            .collect();
        assert_eq!(electronics, vec![1, 3, 4]);
    }

    #[test]
    fn test_sort_by_bool_false_before_true() {
        let mut products = sample_snapshot();
        sort_products(&mut products, SortField::InStock, SortOrder::Asc);
        assert!(!products[0].in_stock);
        assert!(products[4].in_stock);
    }

    #[test]
    fn test_sort_by_timestamp() {
        let mut products = sample_snapshot();
        sort_products(&mut products, SortField::CreatedAt, SortOrder::Desc);
        let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_comparator_total_over_nan() {
        let mut products = sample_snapshot();
        products[2].price = f64::NAN;
        // Must not panic; NaN sorts after every real value ascending.
        sort_products(&mut products, SortField::Price, SortOrder::Asc);
        assert!(products[4].price.is_nan());
    }
}
