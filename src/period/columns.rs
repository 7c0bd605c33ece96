//! Column pagination along month boundaries

use crate::layout::{pack_atomic, DEFAULT_MAX_COLS_PER_PAGE};
use crate::period::MonthChunk;
use serde::Serialize;
use smallvec::SmallVec;

/// A horizontal slice of the period axis that fits one physical page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnPage {
    /// Page index (0-based)
    pub page_index: usize,
    pub start_period: usize,
    pub end_period: usize,
    pub month_chunks: SmallVec<[MonthChunk; 4]>,
    pub period_count: usize,
    /// A single month wider than the column budget
    pub oversized: bool,
}

impl ColumnPage {
    /// Check if this page contains a given period
    pub fn contains_period(&self, period: usize) -> bool {
        period >= self.start_period && period <= self.end_period
    }

    /// Periods in ascending order
    pub fn periods(&self) -> impl Iterator<Item = usize> + '_ {
        self.month_chunks.iter().flat_map(|chunk| chunk.periods())
    }
}

/// Packs month chunks into column pages without splitting a month
#[derive(Debug, Clone, Copy)]
pub struct ColumnPaginator {
    max_cols_per_page: usize,
}

impl Default for ColumnPaginator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COLS_PER_PAGE)
    }
}

impl ColumnPaginator {
    pub fn new(max_cols_per_page: usize) -> Self {
        Self { max_cols_per_page }
    }

    pub fn max_cols_per_page(&self) -> usize {
        self.max_cols_per_page
    }

    /// Paginate month chunks, which must be in ascending period order
    pub fn paginate(&self, chunks: &[MonthChunk]) -> Vec<ColumnPage> {
        let bins = pack_atomic(chunks.iter().map(|c| c.period_count), self.max_cols_per_page);

        bins.into_iter()
            .enumerate()
            .map(|(page_index, bin)| {
                let month_chunks: SmallVec<[MonthChunk; 4]> =
                    chunks[bin.units.clone()].iter().cloned().collect();
                let start_period = month_chunks[0].start_period;
                let end_period = month_chunks[month_chunks.len() - 1].end_period;
                let oversized = bin.exceeds(self.max_cols_per_page);

                if oversized {
                    log::warn!(
                        "column page {} holds {} periods ({}-{}), over the budget of {}",
                        page_index,
                        bin.size,
                        start_period,
                        end_period,
                        self.max_cols_per_page
                    );
                }

                ColumnPage {
                    page_index,
                    start_period,
                    end_period,
                    month_chunks,
                    period_count: bin.size,
                    oversized,
                }
            })
            .collect()
    }
}
