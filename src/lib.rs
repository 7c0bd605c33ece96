//! Grid-Pager: page layout for schedule and cost grids
//!
//! This crate splits a grid of hierarchical rows and time-period columns
//! into printable pages:
//! - Rows are packed by hierarchy group; a group is never split across pages
//! - Periods are packed by calendar month; a month is never split across pages
//! - Both axes are crossed into a page matrix with continuation headers
//! - A cheap page count estimate is available for pre-flight sizing
//!
//! Everything here is a pure computation over borrowed rows. Pages refer to
//! rows by absolute offsets and sub-slices of the caller's row slice.

pub mod error;
pub mod layout;
pub mod period;
pub mod rows;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmPaginator;

// Re-export primary types
pub use error::PaginationError;
pub use layout::{PageChunk, PageCountEstimator, PageEstimate, PageMatrixBuilder, PaginationConfig};
pub use period::{ColumnPage, ColumnPaginator, MonthChunk, MonthChunker};
pub use rows::{group_rows, HierarchyGroup, RowPage, RowPaginator};

/// The pagination engine: a validated configuration and the components built from it.
///
/// Holds no mutable state, so one instance can serve concurrent exports.
#[derive(Debug, Clone)]
pub struct Paginator {
    config: PaginationConfig,
    matrix: PageMatrixBuilder,
    estimator: PageCountEstimator,
}

impl Default for Paginator {
    fn default() -> Self {
        let config = PaginationConfig::default();
        Self {
            matrix: PageMatrixBuilder::new(&config),
            estimator: PageCountEstimator::from_config(&config),
            config,
        }
    }
}

impl Paginator {
    /// Create a paginator, rejecting zero budgets
    pub fn new(config: PaginationConfig) -> Result<Self, PaginationError> {
        config.validate()?;
        Ok(Self {
            matrix: PageMatrixBuilder::new(&config),
            estimator: PageCountEstimator::from_config(&config),
            config,
        })
    }

    /// Create a paginator from a JSON config
    pub fn from_json(json: &str) -> Result<Self, PaginationError> {
        Self::new(PaginationConfig::from_json(json)?)
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Month chunks covering `1..=total_periods`
    pub fn month_chunks(&self, total_periods: usize) -> Vec<MonthChunk> {
        self.matrix.month_chunker().chunk(total_periods)
    }

    /// Labels of every period in `1..=total_periods`
    pub fn period_labels(&self, total_periods: usize) -> Vec<String> {
        let months = self.matrix.month_chunker();
        (1..=total_periods).map(|p| months.period_label(p)).collect()
    }

    /// Row pages only
    pub fn row_pages<'a, R, K, F>(&self, rows: &'a [R], key_of: F) -> Vec<RowPage<'a, R>>
    where
        K: PartialEq,
        F: FnMut(&R) -> K,
    {
        self.matrix.row_paginator().paginate(rows, key_of)
    }

    /// Column pages only
    pub fn column_pages(&self, total_periods: usize) -> Vec<ColumnPage> {
        self.matrix.column_pages(total_periods)
    }

    /// Full page matrix, one descriptor per physical page
    pub fn pages<'a, R, K, F>(
        &self,
        rows: &'a [R],
        total_periods: usize,
        key_of: F,
    ) -> Vec<PageChunk<'a, R>>
    where
        K: PartialEq,
        F: FnMut(&R) -> K,
    {
        self.matrix.build(rows, total_periods, key_of)
    }

    /// Advisory page count; see [`PageCountEstimator`]
    pub fn estimate(&self, total_rows: usize, total_cols: usize) -> PageEstimate {
        self.estimator.estimate(total_rows, total_cols)
    }
}
