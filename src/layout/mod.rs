//! Page layout: configuration, packing, and the page matrix

mod config;
mod estimate;
mod matrix;
mod packing;

pub use config::{
    PaginationConfig, DEFAULT_MAX_COLS_PER_PAGE, DEFAULT_MAX_ROWS_PER_PAGE,
    DEFAULT_PERIODS_PER_MONTH, DEFAULT_PERIOD_PREFIX,
};
pub use estimate::{PageCountEstimator, PageEstimate};
pub use matrix::{PageChunk, PageMatrixBuilder, CONTEXT_SEPARATOR};
pub use packing::{pack_atomic, PackedBin};
