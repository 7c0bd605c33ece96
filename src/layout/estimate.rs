//! Cheap page count estimate

use crate::layout::PaginationConfig;
use serde::{Deserialize, Serialize};

/// Estimated page counts per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEstimate {
    pub row_pages: usize,
    pub col_pages: usize,
    pub total_pages: usize,
    pub needs_pagination: bool,
}

/// Ceiling-division page count estimate.
///
/// This is advisory only. It ignores that groups and month chunks are never
/// split, so the real row and column paginators can produce more pages than
/// estimated (a group that does not fit the remaining space starts a new page)
/// or fewer (one oversized group takes a single page). Do not use it as a hard
/// bound on the final page count.
#[derive(Debug, Clone, Copy)]
pub struct PageCountEstimator {
    max_rows_per_page: usize,
    max_cols_per_page: usize,
}

impl Default for PageCountEstimator {
    fn default() -> Self {
        Self::from_config(&PaginationConfig::default())
    }
}

impl PageCountEstimator {
    pub fn new(max_rows_per_page: usize, max_cols_per_page: usize) -> Self {
        Self {
            max_rows_per_page,
            max_cols_per_page,
        }
    }

    pub fn from_config(config: &PaginationConfig) -> Self {
        Self::new(config.max_rows_per_page, config.max_cols_per_page)
    }

    pub fn estimate(&self, total_rows: usize, total_cols: usize) -> PageEstimate {
        let row_pages = total_rows.div_ceil(self.max_rows_per_page);
        let col_pages = total_cols.div_ceil(self.max_cols_per_page);
        let total_pages = row_pages * col_pages;

        PageEstimate {
            row_pages,
            col_pages,
            total_pages,
            needs_pagination: total_pages > 1,
        }
    }
}
