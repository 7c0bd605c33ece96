//! Browser tests for the WASM bridge. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use grid_pager::WasmPaginator;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn column_labels_cover_axis() {
    let paginator = WasmPaginator::new(None).unwrap();
    let labels = paginator.column_labels(6);
    assert_eq!(labels.length(), 6);
    assert_eq!(labels.get(0).as_string().as_deref(), Some("W1"));
    assert_eq!(labels.get(5).as_string().as_deref(), Some("W6"));
}

#[wasm_bindgen_test]
fn constructor_rejects_bad_config() {
    assert!(WasmPaginator::new(Some(r#"{"maxRowsPerPage": 0}"#.to_string())).is_err());

    let paginator = WasmPaginator::new(Some(r#"{"periodPrefix": "P"}"#.to_string())).unwrap();
    let labels = paginator.column_labels(1);
    assert_eq!(labels.get(0).as_string().as_deref(), Some("P1"));
}

#[wasm_bindgen_test]
fn layout_buffer_reports_pages() {
    let mut paginator = WasmPaginator::new(None).unwrap();
    let keys: Vec<u32> = (0..60).map(|i| i / 20).collect();
    assert_eq!(paginator.layout_buffer(&keys, 20), 6);
    assert!(paginator.u32_len() > 0);
    assert!(paginator.text_len() > 0);
}
