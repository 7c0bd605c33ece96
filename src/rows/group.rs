//! Grouping of adjacent rows by hierarchy key

/// A maximal run of consecutive rows sharing one key
#[derive(Debug, PartialEq, Eq)]
pub struct HierarchyGroup<'a, R> {
    /// Group ordinal (0-based)
    pub group_id: usize,
    /// Absolute offset of the first row
    pub row_start: usize,
    pub rows: &'a [R],
}

impl<'a, R> HierarchyGroup<'a, R> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Absolute offset of the last row (inclusive), `None` for an empty group
    pub fn row_end(&self) -> Option<usize> {
        self.rows.len().checked_sub(1).map(|last| self.row_start + last)
    }
}

// Manual impls: the group only borrows `R`, so no `R: Clone` bound.
impl<R> Clone for HierarchyGroup<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for HierarchyGroup<'_, R> {}

/// Iterator over hierarchy groups.
///
/// Only adjacency counts: a key that reappears after a different key
/// starts a new group. The key accessor runs once per row.
pub struct HierarchyGroups<'a, R, K, F> {
    rows: &'a [R],
    key_of: F,
    cursor: usize,
    next_group_id: usize,
    /// Key of the row at `cursor`, already computed while scanning the previous group
    pending_key: Option<K>,
}

impl<'a, R, K, F> HierarchyGroups<'a, R, K, F>
where
    K: PartialEq,
    F: FnMut(&R) -> K,
{
    pub fn new(rows: &'a [R], key_of: F) -> Self {
        Self {
            rows,
            key_of,
            cursor: 0,
            next_group_id: 0,
            pending_key: None,
        }
    }
}

impl<'a, R, K, F> Iterator for HierarchyGroups<'a, R, K, F>
where
    K: PartialEq,
    F: FnMut(&R) -> K,
{
    type Item = HierarchyGroup<'a, R>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.cursor;
        if start >= self.rows.len() {
            return None;
        }

        let key = match self.pending_key.take() {
            Some(key) => key,
            None => (self.key_of)(&self.rows[start]),
        };

        let mut end = start + 1;
        while end < self.rows.len() {
            let next_key = (self.key_of)(&self.rows[end]);
            if next_key != key {
                self.pending_key = Some(next_key);
                break;
            }
            end += 1;
        }

        let group = HierarchyGroup {
            group_id: self.next_group_id,
            row_start: start,
            rows: &self.rows[start..end],
        };
        self.cursor = end;
        self.next_group_id += 1;
        Some(group)
    }
}

/// Group rows by adjacent equal keys
pub fn group_rows<R, K, F>(rows: &[R], key_of: F) -> Vec<HierarchyGroup<'_, R>>
where
    K: PartialEq,
    F: FnMut(&R) -> K,
{
    HierarchyGroups::new(rows, key_of).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes<R>(groups: &[HierarchyGroup<'_, R>]) -> Vec<(usize, usize, usize)> {
        groups.iter().map(|g| (g.group_id, g.row_start, g.len())).collect()
    }

    #[test]
    fn test_adjacent_keys_merge() {
        let rows = [1, 1, 2, 2, 2, 3];
        let groups = group_rows(&rows, |r| *r);
        assert_eq!(sizes(&groups), vec![(0, 0, 2), (1, 2, 3), (2, 5, 1)]);
        assert_eq!(groups[1].rows, &[2, 2, 2]);
        assert_eq!(groups[1].row_end(), Some(4));
    }

    #[test]
    fn test_reappearing_key_starts_new_group() {
        let rows = ["a", "a", "b", "a"];
        let groups = group_rows(&rows, |r| *r);
        assert_eq!(sizes(&groups), vec![(0, 0, 2), (1, 2, 1), (2, 3, 1)]);
    }

    #[test]
    fn test_empty_group_has_no_end() {
        let rows: [u32; 0] = [];
        let group = HierarchyGroup {
            group_id: 0,
            row_start: 7,
            rows: &rows[..],
        };
        assert!(group.is_empty());
        assert_eq!(group.row_end(), None);
    }

    #[test]
    fn test_empty_rows() {
        let rows: [u32; 0] = [];
        assert!(group_rows(&rows, |r| *r).is_empty());
    }

    #[test]
    fn test_key_accessor_called_once_per_row() {
        #[derive(Debug)]
        struct Item {
            class: &'static str,
        }

        let rows = [
            Item { class: "civil" },
            Item { class: "civil" },
            Item { class: "electrical" },
            Item { class: "civil" },
        ];
        let mut calls = 0;
        let groups = group_rows(&rows, |item| {
            calls += 1;
            item.class
        });
        assert_eq!(groups.len(), 3);
        assert_eq!(calls, rows.len());
    }

    #[test]
    fn test_iterator_is_lazy() {
        let rows = [1, 1, 2, 3, 3];
        let mut groups = HierarchyGroups::new(&rows, |r| *r);
        let first = groups.next().unwrap();
        assert_eq!(first.rows, &[1, 1]);
        assert_eq!(groups.count(), 2);
    }
}
