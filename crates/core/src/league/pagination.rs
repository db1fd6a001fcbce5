use serde::{Deserialize, Serialize};

/// Default page size for listing endpoints.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// One page of a listing, with enough metadata to request the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-indexed page number.
    pub page: usize,
    pub limit: usize,
    /// Total items across all pages.
    pub total: usize,
}

/// Slices a full listing into the requested page.
///
/// Pages are 1-indexed; page 0 is treated as page 1. A page past the end
/// of the listing yields an empty item set with the total preserved.
pub fn paginate<T>(items: Vec<T>, page: Option<usize>, limit: Option<usize>) -> Page<T> {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(1);
    let total = items.len();

    let start = (page - 1).saturating_mul(limit);
    let items = if start >= total {
        Vec::new()
    } else {
        items.into_iter().skip(start).take(limit).collect()
    };

    Page {
        items,
        page,
        limit,
        total,
    }
}

/// Payload of a cached-or-fresh listing read.
///
/// Cache hits replay the previously cached unpaginated listing as-is;
/// fresh reads paginate the repository result before responding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Cached(Vec<T>),
    Fresh(Page<T>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_page_of_25() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(items, Some(2), Some(10));

        assert_eq!(page.items, (11..=20).collect::<Vec<u32>>());
        assert_eq!(page.page, 2);
        assert_eq!(page.total, 25);
    }

    #[test]
    fn test_defaults_to_first_page() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(items, None, None);

        assert_eq!(page.items, (1..=10).collect::<Vec<u32>>());
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn test_page_zero_is_page_one() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(items, Some(0), Some(3));

        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(items, Some(4), Some(3));

        assert!(page.items.is_empty());
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_last_partial_page() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(items, Some(3), Some(10));

        assert_eq!(page.items, (21..=25).collect::<Vec<u32>>());
    }

    #[test]
    fn test_listing_serializes_untagged() {
        let cached = Listing::Cached(vec![1, 2, 3]);
        assert_eq!(serde_json::to_value(&cached).unwrap(), serde_json::json!([1, 2, 3]));

        let fresh = Listing::Fresh(paginate(vec![1, 2, 3], Some(1), Some(2)));
        let json = serde_json::to_value(&fresh).unwrap();
        assert_eq!(json["items"], serde_json::json!([1, 2]));
        assert_eq!(json["total"], 3);
    }
}
