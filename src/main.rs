//! Grid-Pager demo (for testing purposes only)
//! The main interface is the library and its WASM bindings.
//!
//! Usage: grid-pager [ROWS] [PERIODS]
//! Prints the page matrix of a synthetic grid as JSON.

use grid_pager::Paginator;

/// Rows per synthetic classification group
const GROUP_SIZE: usize = 9;

fn main() {
    let mut args = std::env::args().skip(1);
    let total_rows = args.next().and_then(|a| a.parse().ok()).unwrap_or(60);
    let total_periods = args.next().and_then(|a| a.parse().ok()).unwrap_or(24);

    let classifications: Vec<usize> = (0..total_rows).map(|row| row / GROUP_SIZE).collect();
    let paginator = Paginator::default();
    let pages = paginator.pages(&classifications, total_periods, |class| *class);

    let estimate = paginator.estimate(total_rows, total_periods);
    eprintln!(
        "{} rows x {} periods: {} pages (estimated {})",
        total_rows,
        total_periods,
        pages.len(),
        estimate.total_pages
    );

    match serde_json::to_string_pretty(&pages) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("failed to serialize pages: {}", err);
            std::process::exit(1);
        }
    }
}
