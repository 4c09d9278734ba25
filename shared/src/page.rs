//! One page of a listing endpoint.
//!
//! Articles report their count as `total`, categories as `totalData` (and
//! sometimes `totalPages` on top). Both are folded into [`Page`] here so the
//! rest of the code only ever sees one shape.

use serde::Deserialize;

#[derive(Deserialize)]
struct RawPage<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
    #[serde(default)]
    total: Option<usize>,
    #[serde(default, rename = "totalData")]
    total_data: Option<usize>,
    #[serde(default, rename = "totalPages")]
    total_pages: Option<usize>,
}

impl<T> From<RawPage<T>> for Page<T> {
    fn from(raw: RawPage<T>) -> Self {
        let total = raw.total.or(raw.total_data).unwrap_or(raw.data.len());
        Page {
            items: raw.data,
            total,
            total_pages: raw.total_pages,
        }
    }
}

/// Items of one page plus the server-side totals.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawPage<T>", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Items in server order.
    pub items: Vec<T>,
    /// Total number of matching rows across all pages.
    pub total: usize,
    /// Page count, when the server reports it directly.
    pub total_pages: Option<usize>,
}

impl<T> Page<T> {
    /// Build a page from already-decoded parts.
    pub fn new(items: Vec<T>, total: usize) -> Self {
        Self {
            items,
            total,
            total_pages: None,
        }
    }

    /// Number of pages at `page_size`: the reported count if any, else
    /// `ceil(total / page_size)`.
    pub fn page_count(&self, page_size: usize) -> usize {
        self.total_pages
            .unwrap_or_else(|| page_count(self.total, page_size))
    }
}

/// `ceil(total / page_size)`, with a zero page size treated as one.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_page_reads_total() {
        let page: Page<u32> =
            serde_json::from_str(r#"{"data":[1,2,3],"total":23}"#).expect("page json");
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total, 23);
        assert_eq!(page.page_count(10), 3);
    }

    #[test]
    fn category_page_reads_total_data_and_total_pages() {
        let page: Page<u32> = serde_json::from_str(
            r#"{"data":[1],"totalData":250,"totalPages":3,"currentPage":1}"#,
        )
        .expect("page json");
        assert_eq!(page.total, 250);
        assert_eq!(page.total_pages, Some(3));
        assert_eq!(page.page_count(10), 3);
    }

    #[test]
    fn missing_totals_fall_back_to_item_count() {
        let page: Page<u32> = serde_json::from_str(r#"{"data":[5,6]}"#).expect("page json");
        assert_eq!(page.total, 2);
        assert_eq!(page.page_count(10), 1);
    }

    #[test]
    fn empty_page_has_zero_pages() {
        let page: Page<u32> =
            serde_json::from_str(r#"{"data":[],"total":0}"#).expect("page json");
        assert!(page.items.is_empty());
        assert_eq!(page.page_count(10), 0);
    }
}
