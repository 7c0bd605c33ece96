//! WASM bindings for the paginator

pub mod flat_buffer;

use crate::{PaginationConfig, PaginationError, Paginator};
use flat_buffer::PageBuffer;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js_error(err: PaginationError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// WASM-exposed paginator wrapper.
///
/// Rows cross the boundary as their hierarchy keys only; the renderer
/// keeps the row payloads and indexes them with the returned offsets.
#[wasm_bindgen]
pub struct WasmPaginator {
    paginator: Paginator,
    buffer: PageBuffer,
}

#[wasm_bindgen]
impl WasmPaginator {
    /// Create a paginator from an optional JSON config (defaults otherwise)
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WasmPaginator, JsValue> {
        let paginator = match config_json {
            Some(json) => Paginator::from_json(&json).map_err(to_js_error)?,
            None => Paginator::default(),
        };

        Ok(Self {
            paginator,
            buffer: PageBuffer::new(),
        })
    }

    /// Current configuration as JSON
    #[wasm_bindgen(js_name = getConfig)]
    pub fn get_config(&self) -> Result<String, JsValue> {
        to_json(self.paginator.config())
    }

    /// Page matrix as JSON; `rows` in each page are the keys of that page
    pub fn paginate(&self, keys: &[u32], total_periods: usize) -> Result<String, JsValue> {
        let pages = self.paginator.pages(keys, total_periods, |key| *key);
        to_json(&pages)
    }

    /// Row pages only, as JSON
    #[wasm_bindgen(js_name = rowPages)]
    pub fn row_pages(&self, keys: &[u32]) -> Result<String, JsValue> {
        to_json(&self.paginator.row_pages(keys, |key| *key))
    }

    /// Column pages only, as JSON
    #[wasm_bindgen(js_name = columnPages)]
    pub fn column_pages(&self, total_periods: usize) -> Result<String, JsValue> {
        to_json(&self.paginator.column_pages(total_periods))
    }

    /// Advisory page count estimate, as JSON
    pub fn estimate(&self, total_rows: usize, total_cols: usize) -> Result<String, JsValue> {
        to_json(&self.paginator.estimate(total_rows, total_cols))
    }

    /// Period labels for the whole axis
    #[wasm_bindgen(js_name = columnLabels)]
    pub fn column_labels(&self, total_periods: usize) -> js_sys::Array {
        self.paginator
            .period_labels(total_periods)
            .iter()
            .map(|label| JsValue::from_str(label))
            .collect()
    }

    /// Encode the page matrix into the flat buffer; returns the page count.
    /// Read it back through the pointer/length accessors.
    #[wasm_bindgen(js_name = layoutBuffer)]
    pub fn layout_buffer(&mut self, keys: &[u32], total_periods: usize) -> usize {
        let pages = self.paginator.pages(keys, total_periods, |key| *key);
        self.buffer.encode(&pages);
        pages.len()
    }

    #[wasm_bindgen(js_name = u32Ptr)]
    pub fn u32_ptr(&self) -> u32 {
        self.buffer.u32_ptr()
    }

    #[wasm_bindgen(js_name = u32Len)]
    pub fn u32_len(&self) -> u32 {
        self.buffer.u32_len()
    }

    #[wasm_bindgen(js_name = textPtr)]
    pub fn text_ptr(&self) -> u32 {
        self.buffer.text_ptr()
    }

    #[wasm_bindgen(js_name = textLen)]
    pub fn text_len(&self) -> u32 {
        self.buffer.text_len()
    }
}

impl Default for WasmPaginator {
    fn default() -> Self {
        Self {
            paginator: Paginator::default(),
            buffer: PageBuffer::new(),
        }
    }
}

impl WasmPaginator {
    /// Wrap an already-configured paginator
    pub fn with_config(config: PaginationConfig) -> Result<Self, PaginationError> {
        Ok(Self {
            paginator: Paginator::new(config)?,
            buffer: PageBuffer::new(),
        })
    }

    /// Encoded page buffer from the last `layout_buffer` call
    pub fn buffer(&self) -> &PageBuffer {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_json() {
        let wasm = WasmPaginator::default();
        let keys: Vec<u32> = (0..50).map(|i| if i < 25 { 1 } else { 2 }).collect();
        let json = wasm.paginate(&keys, 24).unwrap();

        let pages: serde_json::Value = serde_json::from_str(&json).unwrap();
        let pages = pages.as_array().unwrap();
        assert_eq!(pages.len(), 4);
        assert_eq!(pages[0]["pageNumber"], 1);
        assert_eq!(pages[3]["continuationContext"], "Rows 26-50 | Periods 17-24");
        assert_eq!(pages[2]["rows"].as_array().unwrap().len(), 25);
    }

    #[test]
    fn test_estimate_json() {
        let wasm = WasmPaginator::default();
        let estimate: serde_json::Value =
            serde_json::from_str(&wasm.estimate(60, 20).unwrap()).unwrap();
        assert_eq!(estimate["totalPages"], 6);
        assert_eq!(estimate["needsPagination"], true);
    }

    #[test]
    fn test_layout_buffer() {
        let mut wasm = WasmPaginator::with_config(PaginationConfig::new(10, 8, 4)).unwrap();
        let keys: Vec<u32> = (0..30).map(|i| i / 5).collect();
        let count = wasm.layout_buffer(&keys, 16);
        assert_eq!(count, 6);
        assert_eq!(wasm.buffer().page_count(), Some(6));
    }

    #[test]
    fn test_with_config_rejects_zero_budget() {
        assert!(WasmPaginator::with_config(PaginationConfig::new(28, 0, 4)).is_err());
    }
}
