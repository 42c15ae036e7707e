//! Ordered enumeration of the slots to populate on a sheet

use super::types::GridPos;
use crate::template::LabelTemplate;

/// Grid positions to fill, in reading order.
///
/// `None` requests the full grid; `Some(n)` the first `n` slots, capped at
/// the grid size. Row 0 is filled left to right before row 1, so the linear
/// index `row * columns + col` strictly increases along the result.
pub fn enumerate(template: &LabelTemplate, requested: Option<usize>) -> Vec<GridPos> {
    enumerate_grid(template.columns as usize, template.rows as usize, requested)
}

/// Grid positions to fill on a `columns` x `rows` grid, in reading order
pub fn enumerate_grid(columns: usize, rows: usize, requested: Option<usize>) -> Vec<GridPos> {
    let capacity = columns * rows;
    let count = requested.map_or(capacity, |n| n.min(capacity));

    (0..count)
        .map(|i| GridPos::new(i / columns, i % columns))
        .collect()
}
