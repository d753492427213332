use std::num::NonZeroUsize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
    pub total: usize,
}

/// Slice out 1-based page `page`. Pages past the end, and page 0, are empty.
pub fn paginate<T: Clone>(records: &[T], page: usize, page_size: NonZeroUsize) -> Page<T> {
    let size = page_size.get();
    let total = records.len();
    let items = match page.checked_sub(1).and_then(|p| p.checked_mul(size)) {
        Some(start) if start < total => {
            let end = start.saturating_add(size).min(total);
            records[start..end].to_vec()
        }
        _ => Vec::new(),
    };
    Page {
        items,
        total_pages: total.div_ceil(size),
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn twenty_five_records_make_three_pages() {
        let records: Vec<u32> = (1..=25).collect();
        let first = paginate(&records, 1, size(10));
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items, (1..=10).collect::<Vec<_>>());

        let last = paginate(&records, 3, size(10));
        assert_eq!(last.items, vec![21, 22, 23, 24, 25]);

        let beyond = paginate(&records, 4, size(10));
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total_pages, 3);
        assert_eq!(beyond.total, 25);
    }

    #[test]
    fn empty_input_has_zero_pages() {
        let page = paginate::<u32>(&[], 1, size(10));
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn page_zero_and_huge_pages_are_empty() {
        let records = [1, 2, 3];
        assert!(paginate(&records, 0, size(2)).items.is_empty());
        assert!(paginate(&records, usize::MAX, size(2)).items.is_empty());
        assert_eq!(paginate(&records, 1, size(usize::MAX)).items, vec![1, 2, 3]);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let records: Vec<u32> = (0..20).collect();
        assert_eq!(paginate(&records, 2, size(10)).total_pages, 2);
        assert_eq!(paginate(&records, 2, size(10)).items.len(), 10);
    }
}
