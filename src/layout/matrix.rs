//! Page matrix: row pages crossed with column pages

use crate::layout::PaginationConfig;
use crate::period::{ColumnPage, ColumnPaginator, MonthChunker};
use crate::rows::{RowPage, RowPaginator};
use serde::Serialize;

/// Separator between row and column continuation notes
pub const CONTEXT_SEPARATOR: &str = " | ";

/// Descriptor for one physical page
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageChunk<'a, R> {
    /// Page number (1-based, row-major)
    pub page_number: usize,
    pub row_page_index: usize,
    pub col_page_index: usize,
    pub row_start: usize,
    pub row_end: usize,
    /// First period (1-based, inclusive)
    pub col_start: usize,
    /// Last period (1-based, inclusive)
    pub col_end: usize,
    pub rows: &'a [R],
    /// Period labels in ascending order
    pub columns: Vec<String>,
    pub is_continuation: bool,
    pub continuation_context: Option<String>,
    pub oversized: bool,
}

impl<R> PageChunk<'_, R> {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Builds the full page matrix from rows and a period count
#[derive(Debug, Clone)]
pub struct PageMatrixBuilder {
    months: MonthChunker,
    row_paginator: RowPaginator,
    col_paginator: ColumnPaginator,
}

impl Default for PageMatrixBuilder {
    fn default() -> Self {
        Self::new(&PaginationConfig::default())
    }
}

impl PageMatrixBuilder {
    pub fn new(config: &PaginationConfig) -> Self {
        Self {
            months: MonthChunker::new(config.periods_per_month)
                .with_prefix(config.period_prefix.clone()),
            row_paginator: RowPaginator::new(config.max_rows_per_page)
                .mark_continuations(config.mark_row_continuations),
            col_paginator: ColumnPaginator::new(config.max_cols_per_page),
        }
    }

    pub fn month_chunker(&self) -> &MonthChunker {
        &self.months
    }

    pub fn row_paginator(&self) -> &RowPaginator {
        &self.row_paginator
    }

    pub fn column_paginator(&self) -> &ColumnPaginator {
        &self.col_paginator
    }

    /// Column pages for `total_periods`
    pub fn column_pages(&self, total_periods: usize) -> Vec<ColumnPage> {
        self.col_paginator.paginate(&self.months.chunk(total_periods))
    }

    /// Paginate both axes and cross them
    pub fn build<'a, R, K, F>(
        &self,
        rows: &'a [R],
        total_periods: usize,
        key_of: F,
    ) -> Vec<PageChunk<'a, R>>
    where
        K: PartialEq,
        F: FnMut(&R) -> K,
    {
        let row_pages = self.row_paginator.paginate(rows, key_of);
        let col_pages = self.column_pages(total_periods);
        self.build_from(&row_pages, &col_pages)
    }

    /// Cross precomputed row and column pages, row pages outermost
    pub fn build_from<'a, R>(
        &self,
        row_pages: &[RowPage<'a, R>],
        col_pages: &[ColumnPage],
    ) -> Vec<PageChunk<'a, R>> {
        let columns_per_page: Vec<Vec<String>> = col_pages
            .iter()
            .map(|page| page.periods().map(|p| self.months.period_label(p)).collect())
            .collect();

        let mut pages = Vec::with_capacity(row_pages.len() * col_pages.len());
        for row_page in row_pages {
            for (col_page, columns) in col_pages.iter().zip(&columns_per_page) {
                let continued_columns = col_page.page_index > 0;

                let mut notes = Vec::with_capacity(2);
                if row_page.is_continuation {
                    notes.push(row_page.range_note());
                }
                if continued_columns {
                    notes.push(format!(
                        "Periods {}-{}",
                        col_page.start_period, col_page.end_period
                    ));
                }

                pages.push(PageChunk {
                    page_number: pages.len() + 1,
                    row_page_index: row_page.page_index,
                    col_page_index: col_page.page_index,
                    row_start: row_page.row_start,
                    row_end: row_page.row_end,
                    col_start: col_page.start_period,
                    col_end: col_page.end_period,
                    rows: row_page.rows,
                    columns: columns.clone(),
                    is_continuation: row_page.is_continuation || continued_columns,
                    continuation_context: (!notes.is_empty())
                        .then(|| notes.join(CONTEXT_SEPARATOR)),
                    oversized: row_page.oversized || col_page.oversized,
                });
            }
        }

        log::debug!(
            "page matrix: {} row pages x {} column pages = {} pages",
            row_pages.len(),
            col_pages.len(),
            pages.len()
        );

        pages
    }
}
