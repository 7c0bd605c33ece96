//! Flat buffer protocol for zero-copy transfer of page descriptors
//!
//! ## u32 Buffer Layout:
//! ```text
//! Header:
//! [0]     MAGIC (0x47504147 = "GPAG" for validation)
//! [1]     SCHEMA_VERSION (protocol version, currently 1)
//! [2]     page_count
//! [3]     row_page_count
//! [4]     col_page_count
//! [5]     text_buffer_len
//! [6..]   page data...
//!
//! Per-page (U32_PER_PAGE values):
//!   [page_number, row_start, row_end, col_start, col_end,
//!    flags, text_offset, text_len, column_count]
//!     flags: bit0=is_continuation, bit1=oversized
//!     text_offset/text_len: continuation context, byte offsets in text_data (UTF-8)
//!     text_len is 0 when the page has no continuation context
//! ```
//!
//! Column labels are not carried; they follow from `col_start..=col_end`.
//! Values past `u32::MAX` (possible only on 64-bit hosts) are stored as `u32::MAX`.

use crate::layout::PageChunk;

/// Magic number for format validation: "GPAG" (Grid PAGes)
pub const MAGIC: u32 = 0x47504147;

/// Schema version for protocol compatibility checking
pub const SCHEMA_VERSION: u32 = 1;

/// Header size in u32 elements
pub const HEADER_SIZE: usize = 6;

/// Number of u32 values per page
pub const U32_PER_PAGE: usize = 9;

/// Flags bitmask
pub const FLAG_CONTINUATION: u32 = 0b01;
pub const FLAG_OVERSIZED: u32 = 0b10;

/// Narrow to a buffer slot, saturating at `u32::MAX`
fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Page buffer for zero-copy WASM transfer
pub struct PageBuffer {
    /// Integer data (header and per-page records)
    pub u32_data: Vec<u32>,
    /// UTF-8 continuation context text
    pub text_data: Vec<u8>,
}

impl Default for PageBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageBuffer {
    pub fn new() -> Self {
        Self {
            u32_data: Vec::with_capacity(HEADER_SIZE + 16 * U32_PER_PAGE),
            text_data: Vec::with_capacity(256),
        }
    }

    pub fn clear(&mut self) {
        self.u32_data.clear();
        self.text_data.clear();
    }

    /// Encode a page matrix. Replaces any previous contents.
    pub fn encode<R>(&mut self, pages: &[PageChunk<'_, R>]) {
        self.clear();
        self.u32_data.reserve(HEADER_SIZE + pages.len() * U32_PER_PAGE);

        let row_page_count = pages.iter().map(|p| p.row_page_index + 1).max().unwrap_or(0);
        let col_page_count = pages.iter().map(|p| p.col_page_index + 1).max().unwrap_or(0);

        self.u32_data.push(MAGIC);                  // [0] magic number
        self.u32_data.push(SCHEMA_VERSION);         // [1] schema version
        self.u32_data.push(to_u32(pages.len()));    // [2] page_count
        self.u32_data.push(to_u32(row_page_count)); // [3] row_page_count
        self.u32_data.push(to_u32(col_page_count)); // [4] col_page_count
        self.u32_data.push(0);                      // [5] text_buffer_len (placeholder)

        for page in pages {
            self.write_page(page);
        }

        // Sync text buffer length
        self.u32_data[5] = to_u32(self.text_data.len());
    }

    fn write_page<R>(&mut self, page: &PageChunk<'_, R>) {
        let mut flags = 0;
        if page.is_continuation {
            flags |= FLAG_CONTINUATION;
        }
        if page.oversized {
            flags |= FLAG_OVERSIZED;
        }

        let text_offset = self.text_data.len();
        let text_len = match &page.continuation_context {
            Some(context) => {
                self.text_data.extend_from_slice(context.as_bytes());
                context.len()
            }
            None => 0,
        };

        self.u32_data.extend_from_slice(&[
            to_u32(page.page_number),
            to_u32(page.row_start),
            to_u32(page.row_end),
            to_u32(page.col_start),
            to_u32(page.col_end),
            flags,
            to_u32(text_offset),
            to_u32(text_len),
            to_u32(page.columns.len()),
        ]);
    }

    /// Number of pages in the buffer, if the header is valid
    pub fn page_count(&self) -> Option<usize> {
        if self.u32_data.len() < HEADER_SIZE
            || self.u32_data[0] != MAGIC
            || self.u32_data[1] != SCHEMA_VERSION
        {
            return None;
        }
        Some(self.u32_data[2] as usize)
    }

    /// Continuation context of the page at `idx` (0-based), decoded from the buffers
    pub fn context_at(&self, idx: usize) -> Option<&str> {
        if idx >= self.page_count()? {
            return None;
        }
        let record = HEADER_SIZE + idx * U32_PER_PAGE;
        let offset = self.u32_data[record + 6] as usize;
        let len = self.u32_data[record + 7] as usize;
        if len == 0 {
            return None;
        }
        std::str::from_utf8(self.text_data.get(offset..offset + len)?).ok()
    }

    pub fn u32_ptr(&self) -> u32 {
        self.u32_data.as_ptr() as u32
    }

    pub fn u32_len(&self) -> u32 {
        to_u32(self.u32_data.len())
    }

    pub fn text_ptr(&self) -> u32 {
        self.text_data.as_ptr() as u32
    }

    pub fn text_len(&self) -> u32 {
        to_u32(self.text_data.len())
    }
}
