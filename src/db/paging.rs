use anyhow::Result;
use serde::Serialize;

use crate::error::{AppError, ErrorKind};

/// One page of a larger result set plus the metadata needed to compute
/// further pages. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub page_index: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl<T> PagedList<T> {
    /// Page over a fully materialized source.
    pub fn from_source(source: &[T], page_index: usize, page_size: usize) -> Result<Self>
    where
        T: Clone,
    {
        validate_page_size(page_size)?;
        let total_count = source.len();
        let start = page_index.saturating_mul(page_size).min(total_count);
        let end = start.saturating_add(page_size).min(total_count);
        Ok(Self::build(
            source[start..end].to_vec(),
            page_index,
            page_size,
            total_count,
        ))
    }

    /// Wrap a pre-sliced page together with an externally computed total.
    pub fn with_total(
        items: Vec<T>,
        page_index: usize,
        page_size: usize,
        total_count: usize,
    ) -> Result<Self> {
        validate_page_size(page_size)?;
        Ok(Self::build(items, page_index, page_size, total_count))
    }

    /// Pagination metadata only; skips materializing items. Useful when the
    /// caller needs counts for an existence or page-count check.
    pub fn count_only(page_index: usize, page_size: usize, total_count: usize) -> Result<Self> {
        validate_page_size(page_size)?;
        Ok(Self::build(Vec::new(), page_index, page_size, total_count))
    }

    fn build(items: Vec<T>, page_index: usize, page_size: usize, total_count: usize) -> Self {
        Self {
            items,
            page_index,
            page_size,
            total_count,
            total_pages: total_count.div_ceil(page_size),
        }
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.page_index + 1 < self.total_pages
    }
}

fn validate_page_size(page_size: usize) -> Result<()> {
    if page_size == 0 {
        return Err(AppError::new(ErrorKind::Argument, "Page size must be greater than zero").into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{classify_error, ErrorKind};

    #[test]
    fn slices_the_requested_page() {
        let source: Vec<i32> = (1..=10).collect();
        let page = PagedList::from_source(&source, 1, 3).unwrap();
        assert_eq!(page.items, vec![4, 5, 6]);
        assert_eq!(page.total_count, 10);
        assert_eq!(page.total_pages, 4);
        assert!(page.has_previous_page());
        assert!(page.has_next_page());
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = PagedList::<i32>::count_only(0, 4, 10).unwrap();
        assert_eq!(page.total_pages, 3);
        let exact = PagedList::<i32>::count_only(0, 5, 10).unwrap();
        assert_eq!(exact.total_pages, 2);
    }

    #[test]
    fn last_page_has_no_next() {
        let source: Vec<i32> = (1..=10).collect();
        let page = PagedList::from_source(&source, 3, 3).unwrap();
        assert_eq!(page.items, vec![10]);
        assert!(!page.has_next_page());
        assert!(page.has_previous_page());
    }

    #[test]
    fn page_beyond_the_source_is_empty() {
        let source: Vec<i32> = (1..=4).collect();
        let page = PagedList::from_source(&source, 9, 2).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_next_page());
    }

    #[test]
    fn zero_page_size_fails_fast_for_every_source() {
        let source = vec![1];
        let err = PagedList::from_source(&source, 0, 0).unwrap_err();
        assert_eq!(classify_error(&err), ErrorKind::Argument);
        let err = PagedList::with_total(vec![1], 0, 0, 1).unwrap_err();
        assert_eq!(classify_error(&err), ErrorKind::Argument);
        let err = PagedList::<i32>::count_only(0, 0, 1).unwrap_err();
        assert_eq!(classify_error(&err), ErrorKind::Argument);
    }

    #[test]
    fn count_only_carries_no_items() {
        let page = PagedList::<i32>::count_only(1, 3, 7).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 7);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn with_total_respects_external_count() {
        let page = PagedList::with_total(vec!["a", "b"], 0, 2, 9).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_pages, 5);
        assert!(page.has_next_page());
        assert!(!page.has_previous_page());
    }

    #[test]
    fn empty_source_yields_zero_pages() {
        let page = PagedList::<i32>::from_source(&[], 0, 5).unwrap();
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next_page());
    }
}
