//! The Paginator.

use std::num::NonZeroUsize;

/// One page of a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// `ceil(len / page_size)`, and 1 for an empty sequence.
    pub total_pages: usize,
}

/// Number of pages needed to show `len` items.
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Slices page `page_number` (1-based) out of `sequence`.
///
/// Page 0 and pages past the end are empty, never an error.
pub fn paginate<T: Clone>(sequence: &[T], page_size: NonZeroUsize, page_number: usize) -> Page<T> {
    let total_pages = total_pages(sequence.len(), page_size);
    let items = page_number
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size.get()))
        .filter(|start| *start < sequence.len())
        .map(|start| {
            let end = start.saturating_add(page_size.get()).min(sequence.len());
            sequence[start..end].to_vec()
        })
        .unwrap_or_default();

    Page { items, total_pages }
}
