//! Pagination configuration

use crate::error::PaginationError;
use serde::{Deserialize, Serialize};

/// Default row budget for a printed page
pub const DEFAULT_MAX_ROWS_PER_PAGE: usize = 28;

/// Default column (period) budget for a printed page
pub const DEFAULT_MAX_COLS_PER_PAGE: usize = 16;

/// Default number of weekly periods folded into one month chunk
pub const DEFAULT_PERIODS_PER_MONTH: usize = 4;

/// Default prefix for period labels ("W1", "W2", ...)
pub const DEFAULT_PERIOD_PREFIX: &str = "W";

/// Page budgets and labelling for the pagination engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationConfig {
    pub max_rows_per_page: usize,
    pub max_cols_per_page: usize,
    pub periods_per_month: usize,
    pub period_prefix: String,
    /// Mark every row page after the first as a continuation.
    /// When false, only column overflow produces continuation headers.
    pub mark_row_continuations: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_rows_per_page: DEFAULT_MAX_ROWS_PER_PAGE,
            max_cols_per_page: DEFAULT_MAX_COLS_PER_PAGE,
            periods_per_month: DEFAULT_PERIODS_PER_MONTH,
            period_prefix: DEFAULT_PERIOD_PREFIX.to_string(),
            mark_row_continuations: true,
        }
    }
}

impl PaginationConfig {
    /// Create a config with the given budgets and default labelling
    pub fn new(max_rows_per_page: usize, max_cols_per_page: usize, periods_per_month: usize) -> Self {
        Self {
            max_rows_per_page,
            max_cols_per_page,
            periods_per_month,
            ..Self::default()
        }
    }

    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PaginationError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject zero budgets
    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.max_rows_per_page == 0 {
            return Err(PaginationError::ZeroBudget { field: "max_rows_per_page" });
        }
        if self.max_cols_per_page == 0 {
            return Err(PaginationError::ZeroBudget { field: "max_cols_per_page" });
        }
        if self.periods_per_month == 0 {
            return Err(PaginationError::ZeroBudget { field: "periods_per_month" });
        }
        Ok(())
    }
}
