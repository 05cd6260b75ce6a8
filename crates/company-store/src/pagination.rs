//! Offset-based pagination over ordered sequences.

use crate::error::{Result, StoreError};

/// A validated, 1-indexed page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    size: usize,
    index: usize,
}

impl Page {
    /// Creates a page from raw caller input.
    ///
    /// Both values must be positive.
    pub fn new(page_size: i64, page_index: i64) -> Result<Self> {
        if page_size <= 0 {
            return Err(StoreError::InvalidPage(format!(
                "page size must be positive, got {}",
                page_size
            )));
        }
        if page_index <= 0 {
            return Err(StoreError::InvalidPage(format!(
                "page index must be positive, got {}",
                page_index
            )));
        }

        let size = usize::try_from(page_size)
            .map_err(|_| StoreError::InvalidPage(format!("page size too large: {}", page_size)))?;
        let index = usize::try_from(page_index).map_err(|_| {
            StoreError::InvalidPage(format!("page index too large: {}", page_index))
        })?;

        Ok(Self { size, index })
    }

    /// Builds a page from optional query values.
    ///
    /// Neither given means no paging. Only one given is an error.
    pub fn from_optional(page_size: Option<i64>, page_index: Option<i64>) -> Result<Option<Self>> {
        match (page_size, page_index) {
            (None, None) => Ok(None),
            (Some(size), Some(index)) => Self::new(size, index).map(Some),
            (Some(_), None) => Err(StoreError::InvalidPage(
                "page index is required when page size is given".to_string(),
            )),
            (None, Some(_)) => Err(StoreError::InvalidPage(
                "page size is required when page index is given".to_string(),
            )),
        }
    }

    /// Items per page.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Offset of the first item on this page, or `None` on overflow.
    pub fn start(&self) -> Option<usize> {
        (self.index - 1).checked_mul(self.size)
    }
}

/// Returns the items on `page`, clipped to the bounds of `items`.
///
/// A window starting past the end yields an empty vector.
pub fn paginate<T: Clone>(items: &[T], page: Page) -> Vec<T> {
    let Some(start) = page.start() else {
        return Vec::new();
    };
    if start >= items.len() {
        return Vec::new();
    }

    let end = start.saturating_add(page.size()).min(items.len());
    items[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: u32) -> Vec<u32> {
        (1..=n).collect()
    }

    #[test]
    fn test_middle_page() {
        let page = Page::new(2, 2).unwrap();
        assert_eq!(paginate(&numbers(5), page), vec![3, 4]);
    }

    #[test]
    fn test_partial_last_page() {
        let page = Page::new(2, 3).unwrap();
        assert_eq!(paginate(&numbers(5), page), vec![5]);
    }

    #[test]
    fn test_window_starting_on_last_item() {
        let page = Page::new(3, 2).unwrap();
        assert_eq!(page.size(), 3);
        assert_eq!(page.start(), Some(3));
        assert_eq!(paginate(&numbers(4), page), vec![4]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = Page::new(3, 2).unwrap();
        assert!(paginate(&numbers(3), page).is_empty());

        let page = Page::new(10, 100).unwrap();
        assert!(paginate(&numbers(5), page).is_empty());
    }

    #[test]
    fn test_page_larger_than_collection() {
        let page = Page::new(50, 1).unwrap();
        assert_eq!(paginate(&numbers(4), page), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_collection() {
        let page = Page::new(1, 1).unwrap();
        assert!(paginate::<u32>(&[], page).is_empty());
    }

    #[test]
    fn test_non_positive_inputs_rejected() {
        assert!(matches!(Page::new(0, 1), Err(StoreError::InvalidPage(_))));
        assert!(matches!(Page::new(2, 0), Err(StoreError::InvalidPage(_))));
        assert!(matches!(Page::new(2, -1), Err(StoreError::InvalidPage(_))));
        assert!(matches!(Page::new(-5, 1), Err(StoreError::InvalidPage(_))));
    }

    #[test]
    fn test_huge_window_does_not_overflow() {
        let page = Page::new(i64::MAX, i64::MAX).unwrap();
        assert!(paginate(&numbers(5), page).is_empty());
    }

    #[test]
    fn test_from_optional() {
        assert_eq!(Page::from_optional(None, None).unwrap(), None);
        assert_eq!(
            Page::from_optional(Some(2), Some(1)).unwrap(),
            Some(Page::new(2, 1).unwrap())
        );
        assert!(Page::from_optional(Some(2), None).is_err());
        assert!(Page::from_optional(None, Some(1)).is_err());
        assert!(Page::from_optional(Some(0), Some(1)).is_err());
    }
}
