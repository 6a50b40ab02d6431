//! Shared helpers for benchmarks

use cellgrid::grid::{GridController, GridModel};

/// Create a controller with `rows` rows of mixed numeric and text cells
#[allow(dead_code)]
pub fn make_grid(rows: usize) -> GridController {
    let raw = (0..rows)
        .map(|i| {
            vec![
                format!("{}", (i * 7919) % 1000),
                format!("item {}", (i * 31) % 97),
                if i % 3 == 0 { String::new() } else { format!("{}px", i % 50) },
                format!("Name{}", (i * 13) % rows.max(1)),
            ]
        })
        .collect();
    GridController::new(GridModel::from_rows(raw).expect("bench grid is non-empty"))
}
