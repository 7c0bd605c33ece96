//! Row pagination that keeps hierarchy groups together

use crate::layout::{pack_atomic, DEFAULT_MAX_ROWS_PER_PAGE};
use crate::rows::HierarchyGroups;
use serde::Serialize;

/// A vertical slice of the row sequence that fits one physical page
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowPage<'a, R> {
    /// Page index (0-based)
    pub page_index: usize,
    /// Absolute offset of the first row (0-based, inclusive)
    pub row_start: usize,
    /// Absolute offset of the last row (0-based, inclusive)
    pub row_end: usize,
    pub rows: &'a [R],
    pub is_continuation: bool,
    pub continuation_context: Option<String>,
    /// A single group longer than the row budget
    pub oversized: bool,
}

impl<R> Clone for RowPage<'_, R> {
    fn clone(&self) -> Self {
        Self {
            page_index: self.page_index,
            row_start: self.row_start,
            row_end: self.row_end,
            rows: self.rows,
            is_continuation: self.is_continuation,
            continuation_context: self.continuation_context.clone(),
            oversized: self.oversized,
        }
    }
}

impl<R> RowPage<'_, R> {
    /// Check if this page contains a given absolute row offset
    pub fn contains_row(&self, row: usize) -> bool {
        row >= self.row_start && row <= self.row_end
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Continuation note with 1-based row numbers, e.g. "Rows 29-50"
    pub fn range_note(&self) -> String {
        format!("Rows {}-{}", self.row_start + 1, self.row_end + 1)
    }
}

/// Packs hierarchy groups into row pages without splitting a group
#[derive(Debug, Clone, Copy)]
pub struct RowPaginator {
    max_rows_per_page: usize,
    mark_continuations: bool,
}

impl Default for RowPaginator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROWS_PER_PAGE)
    }
}

impl RowPaginator {
    pub fn new(max_rows_per_page: usize) -> Self {
        Self {
            max_rows_per_page,
            mark_continuations: true,
        }
    }

    /// Whether pages after the first are flagged as continuations
    pub fn mark_continuations(mut self, mark: bool) -> Self {
        self.mark_continuations = mark;
        self
    }

    pub fn max_rows_per_page(&self) -> usize {
        self.max_rows_per_page
    }

    /// Paginate rows grouped by `key_of`. Rows are never reordered.
    pub fn paginate<'a, R, K, F>(&self, rows: &'a [R], key_of: F) -> Vec<RowPage<'a, R>>
    where
        K: PartialEq,
        F: FnMut(&R) -> K,
    {
        let groups: Vec<_> = HierarchyGroups::new(rows, key_of).collect();
        let bins = pack_atomic(groups.iter().map(|g| g.len()), self.max_rows_per_page);

        bins.into_iter()
            .enumerate()
            .map(|(page_index, bin)| {
                let first = &groups[bin.units.start];
                let row_start = first.row_start;
                let row_end = row_start + bin.size - 1;
                let oversized = bin.exceeds(self.max_rows_per_page);

                if oversized {
                    log::warn!(
                        "row page {} holds group {} with {} rows ({}-{}), over the budget of {}",
                        page_index,
                        first.group_id,
                        bin.size,
                        row_start,
                        row_end,
                        self.max_rows_per_page
                    );
                }

                let mut page = RowPage {
                    page_index,
                    row_start,
                    row_end,
                    rows: &rows[row_start..=row_end],
                    is_continuation: self.mark_continuations && page_index > 0,
                    continuation_context: None,
                    oversized,
                };
                if page.is_continuation {
                    page.continuation_context = Some(page.range_note());
                }
                page
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rows carrying only their hierarchy key
    fn keyed_rows(runs: &[(u32, usize)]) -> Vec<u32> {
        runs.iter()
            .flat_map(|&(key, count)| std::iter::repeat(key).take(count))
            .collect()
    }

    #[test]
    fn test_single_group_over_budget_stays_whole() {
        let rows = keyed_rows(&[(1, 30)]);
        let pages = RowPaginator::new(28).paginate(&rows, |r| *r);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].row_count(), 30);
        assert_eq!((pages[0].row_start, pages[0].row_end), (0, 29));
        assert!(pages[0].oversized);
        assert!(!pages[0].is_continuation);
    }

    #[test]
    fn test_two_groups_that_do_not_fit_together() {
        let rows = keyed_rows(&[(1, 25), (2, 25)]);
        let pages = RowPaginator::new(28).paginate(&rows, |r| *r);
        assert_eq!(pages.len(), 2);

        assert_eq!((pages[0].row_start, pages[0].row_end), (0, 24));
        assert!(pages[0].rows.iter().all(|&k| k == 1));
        assert_eq!(pages[0].row_count(), 25);

        assert_eq!((pages[1].row_start, pages[1].row_end), (25, 49));
        assert!(pages[1].rows.iter().all(|&k| k == 2));
        assert_eq!(pages[1].row_count(), 25);
    }

    #[test]
    fn test_small_groups_share_a_page() {
        let rows = keyed_rows(&[(1, 10), (2, 10), (3, 8), (4, 5)]);
        let pages = RowPaginator::new(28).paginate(&rows, |r| *r);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].row_count(), 28);
        assert_eq!(pages[1].row_count(), 5);
        assert!(pages.iter().all(|p| !p.oversized));
    }

    #[test]
    fn test_coverage_and_atomicity() {
        let rows = keyed_rows(&[(1, 3), (2, 12), (1, 9), (5, 40), (6, 2), (7, 27), (8, 1)]);
        let pages = RowPaginator::new(28).paginate(&rows, |r| *r);

        let flattened: Vec<u32> = pages.iter().flat_map(|p| p.rows.iter().copied()).collect();
        assert_eq!(flattened, rows);

        for window in pages.windows(2) {
            assert_eq!(window[0].row_end + 1, window[1].row_start);
            // A group never straddles a page break
            assert_ne!(rows[window[0].row_end], rows[window[1].row_start]);
        }

        for page in &pages {
            if page.oversized {
                assert!(page.rows.iter().all(|&k| k == page.rows[0]));
            } else {
                assert!(page.row_count() <= 28);
            }
        }
    }

    #[test]
    fn test_empty_rows() {
        let rows: Vec<u32> = Vec::new();
        assert!(RowPaginator::default().paginate(&rows, |r| *r).is_empty());
    }

    #[test]
    fn test_later_pages_are_continuations() {
        let rows = keyed_rows(&[(1, 20), (2, 20), (3, 20)]);
        let pages = RowPaginator::new(28).paginate(&rows, |r| *r);
        assert_eq!(pages.len(), 3);
        assert!(!pages[0].is_continuation);
        assert_eq!(pages[0].continuation_context, None);
        assert!(pages[1].is_continuation);
        assert_eq!(pages[1].continuation_context.as_deref(), Some("Rows 21-40"));
        assert_eq!(pages[2].continuation_context.as_deref(), Some("Rows 41-60"));
    }

    #[test]
    fn test_unmarked_continuations() {
        let rows = keyed_rows(&[(1, 20), (2, 20)]);
        let pages = RowPaginator::new(28)
            .mark_continuations(false)
            .paginate(&rows, |r| *r);
        assert_eq!(pages.len(), 2);
        assert!(pages.iter().all(|p| !p.is_continuation && p.continuation_context.is_none()));
    }

    #[test]
    #[should_panic(expected = "bad row")]
    fn test_accessor_panic_propagates() {
        let rows = [1, 2, 3];
        RowPaginator::default().paginate(&rows, |r| {
            if *r == 3 {
                panic!("bad row");
            }
            *r
        });
    }
}
