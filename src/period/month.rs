//! Calendar-month chunks over the period axis

use crate::layout::{DEFAULT_PERIODS_PER_MONTH, DEFAULT_PERIOD_PREFIX};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// A contiguous run of periods forming one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthChunk {
    /// Month number (1-based)
    pub month_index: usize,
    /// First period (1-based, inclusive)
    pub start_period: usize,
    /// Last period (1-based, inclusive)
    pub end_period: usize,
    pub label: String,
    pub period_count: usize,
}

impl MonthChunk {
    /// Periods covered by this chunk
    pub fn periods(&self) -> RangeInclusive<usize> {
        self.start_period..=self.end_period
    }
}

/// Splits the period axis into month-sized chunks
#[derive(Debug, Clone)]
pub struct MonthChunker {
    periods_per_month: usize,
    prefix: String,
}

impl Default for MonthChunker {
    fn default() -> Self {
        Self::new(DEFAULT_PERIODS_PER_MONTH)
    }
}

impl MonthChunker {
    /// `periods_per_month` is not validated; zero behaves like one.
    pub fn new(periods_per_month: usize) -> Self {
        Self {
            periods_per_month,
            prefix: DEFAULT_PERIOD_PREFIX.to_string(),
        }
    }

    /// Use a different period label prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn periods_per_month(&self) -> usize {
        self.periods_per_month
    }

    /// Label for a single period, e.g. "W7"
    pub fn period_label(&self, period: usize) -> String {
        format!("{}{}", self.prefix, period)
    }

    fn month_label(&self, month: usize, start: usize, end: usize) -> String {
        if start == end {
            format!("Month {} ({})", month, self.period_label(start))
        } else {
            format!(
                "Month {} ({}-{})",
                month,
                self.period_label(start),
                self.period_label(end)
            )
        }
    }

    /// Chunk periods `1..=total_periods`. The last chunk may be short.
    pub fn chunk(&self, total_periods: usize) -> Vec<MonthChunk> {
        // zero would never advance the cursor
        let per_month = self.periods_per_month.max(1);
        let mut chunks = Vec::with_capacity(total_periods.div_ceil(per_month));
        let mut month = 1;
        let mut cursor = 1;

        while cursor <= total_periods {
            // cursor <= total_periods, so this cannot overflow for huge months
            let end = cursor + (per_month - 1).min(total_periods - cursor);
            chunks.push(MonthChunk {
                month_index: month,
                start_period: cursor,
                end_period: end,
                label: self.month_label(month, cursor, end),
                period_count: end - cursor + 1,
            });
            cursor = end + 1;
            month += 1;
        }

        chunks
    }
}
