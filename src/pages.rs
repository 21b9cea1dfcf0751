use std::collections::HashSet;

use crate::config::PageEntry;

/// Derives the extraction list from the configured page entries.
///
/// `pageIndex` wins over `page` when both are present; `pageNumber` is never
/// consulted. Entries with no resolvable index are skipped. Duplicates are
/// dropped, first occurrence wins, declaration order is preserved.
pub fn select_pages(entries: &[PageEntry]) -> Vec<u32> {
    let mut selected = Vec::new();
    let mut seen = HashSet::new();

    for entry in entries {
        let Some(idx) = entry.page_index.or(entry.page) else {
            continue;
        };
        if seen.insert(idx) {
            selected.push(idx);
        }
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(page_index: Option<u32>, page: Option<u32>, page_number: Option<u32>) -> PageEntry {
        PageEntry {
            name: None,
            page_index,
            page,
            page_number,
        }
    }

    #[test]
    fn dedupes_and_preserves_first_seen_order() {
        let entries = vec![
            entry(Some(3), None, None),
            entry(None, Some(5), None),
            entry(Some(3), None, None),
            entry(Some(7), None, None),
        ];

        assert_eq!(select_pages(&entries), vec![3, 5, 7]);
    }

    #[test]
    fn page_index_wins_over_page() {
        let entries = vec![entry(Some(1), Some(9), None)];

        assert_eq!(select_pages(&entries), vec![1]);
    }

    #[test]
    fn page_number_alone_contributes_nothing() {
        let entries = vec![
            entry(None, None, Some(4)),
            entry(None, Some(2), None),
        ];

        assert_eq!(select_pages(&entries), vec![2]);
    }

    #[test]
    fn empty_entry_does_not_break_later_entries() {
        let entries = vec![
            entry(None, None, None),
            entry(Some(6), None, None),
        ];

        assert_eq!(select_pages(&entries), vec![6]);
    }

    #[test]
    fn empty_input_yields_empty_selection() {
        assert!(select_pages(&[]).is_empty());
    }
}
