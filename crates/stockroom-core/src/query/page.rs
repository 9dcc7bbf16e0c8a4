//! Pagination over an ordered sequence.
//!
//! [`paginate`] is total: any combination of page and limit, including
//! pages far past the end, yields a (possibly empty) data slice plus
//! metadata that stays consistent with the sequence length. Page and limit
//! values below 1 are normalized to 1.

use serde::Serialize;

/// Pagination metadata for a query result.
///
/// `total_pages` is `ceil(total_records / limit)`, or 0 for an empty
/// filtered set. `has_next`/`has_prev` are derived from the normalized
/// page and limit, so a past-the-end page reports `has_next = false` and
/// `has_prev = true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_records: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Slice out the requested page of `items` and compute its metadata.
///
/// The slice covers `[(page-1)*limit, min(page*limit, N))`; an empty slice
/// for an out-of-range page is a valid result, never an error.
pub fn paginate<T>(items: Vec<T>, page: u64, limit: u64) -> (Vec<T>, Pagination) {
    let page = page.max(1);
    let limit = limit.max(1);
    let total = items.len() as u64;

    let total_pages = if total == 0 {
        0
    } else {
        total.div_ceil(limit)
    };

    let start = (page - 1).saturating_mul(limit);
    let data: Vec<T> = items
        .into_iter()
        .skip(start as usize)
        .take(limit as usize)
        .collect();

    let pagination = Pagination {
        current_page: page,
        total_pages,
        total_records: total,
        has_next: page.saturating_mul(limit) < total,
        has_prev: start > 0,
    };

    (data, pagination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let (data, meta) = paginate((1..=5).collect(), 1, 2);
        assert_eq!(data, vec![1, 2]);
        assert_eq!(meta.current_page, 1);
        assert_eq!(meta.total_pages, 3);
        assert_eq!(meta.total_records, 5);
        assert!(meta.has_next);
        assert!(!meta.has_prev);
    }

    #[test]
    fn test_middle_page() {
        let (data, meta) = paginate((1..=5).collect(), 2, 2);
        assert_eq!(data, vec![3, 4]);
        assert!(meta.has_next);
        assert!(meta.has_prev);
    }

    #[test]
    fn test_last_partial_page() {
        let (data, meta) = paginate((1..=5).collect(), 3, 2);
        assert_eq!(data, vec![5]);
        assert!(!meta.has_next);
        assert!(meta.has_prev);
    }

    #[test]
    fn test_exact_multiple_has_no_phantom_page() {
        let (data, meta) = paginate((1..=6).collect(), 3, 2);
        assert_eq!(data, vec![5, 6]);
        assert_eq!(meta.total_pages, 3);
        assert!(!meta.has_next);
    }

    #[test]
    fn test_past_the_end_page() {
        let (data, meta) = paginate((1..=5).collect(), 100, 10);
        assert!(data.is_empty());
        assert_eq!(meta.current_page, 100);
        assert_eq!(meta.total_pages, 1);
        assert_eq!(meta.total_records, 5);
        assert!(!meta.has_next);
        assert!(meta.has_prev);
    }

    #[test]
    fn test_empty_input() {
        let (data, meta) = paginate(Vec::<i32>::new(), 1, 10);
        assert!(data.is_empty());
        assert_eq!(meta.total_pages, 0);
        assert_eq!(meta.total_records, 0);
        assert!(!meta.has_next);
        assert!(!meta.has_prev);
    }

    #[test]
    fn test_single_element() {
        let (data, meta) = paginate(vec![42], 1, 10);
        assert_eq!(data, vec![42]);
        assert_eq!(meta.total_pages, 1);
        assert!(!meta.has_next);
        assert!(!meta.has_prev);
    }

    #[test]
    fn test_zero_page_and_limit_normalize_to_one() {
        let (data, meta) = paginate((1..=3).collect(), 0, 0);
        assert_eq!(data, vec![1]);
        assert_eq!(meta.current_page, 1);
        assert_eq!(meta.total_pages, 3);
        assert!(!meta.has_prev);
    }

    #[test]
    fn test_limit_larger_than_input() {
        let (data, meta) = paginate((1..=3).collect(), 1, 100);
        assert_eq!(data.len(), 3);
        assert_eq!(meta.total_pages, 1);
    }

    #[test]
    fn test_metadata_consistency_across_pages() {
        let total = 23u64;
        let limit = 4u64;
        for page in 1..=8 {
            let (data, meta) = paginate((1..=total).collect(), page, limit);
            assert_eq!(meta.total_pages, total.div_ceil(limit));
            assert!(data.len() as u64 <= limit);
            assert_eq!(meta.has_next, page * limit < total);
            assert_eq!(meta.has_prev, page > 1);
        }
    }
}
