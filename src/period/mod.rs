//! Time axis: month chunking and column pagination

mod columns;
mod month;

pub use columns::{ColumnPage, ColumnPaginator};
pub use month::{MonthChunk, MonthChunker};
