#![allow(dead_code)]

use std::collections::{BTreeSet, VecDeque};

use dungeon::{ColRow, Layer, Orientation};

/// Rooms reachable from `(0, 0)`
pub fn reachable(layer: &Layer) -> usize {
    let mut seen = BTreeSet::from([ColRow::new(0, 0)]);
    let mut queue = VecDeque::from([ColRow::new(0, 0)]);
    while let Some(pos) = queue.pop_front() {
        for next in layer.passages(pos.col, pos.row) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen.len()
}

/// Number of open passages between adjacent rooms, each counted once
pub fn passages(layer: &Layer) -> usize {
    layer
        .rooms()
        .map(|(pos, _)| {
            layer
                .passages(pos.col, pos.row)
                .filter(|next| *next > pos)
                .count()
        })
        .sum()
}

/// Every wall on the outer perimeter is standing
pub fn perimeter_intact(layer: &Layer) -> bool {
    let (cols, rows) = layer.dimensions();
    (0..rows).all(|row| {
        layer.wall_exists(Orientation::Horizontal, 0, row)
            && layer.wall_exists(Orientation::Horizontal, cols, row)
    }) && (0..cols).all(|col| {
        layer.wall_exists(Orientation::Vertical, col, 0)
            && layer.wall_exists(Orientation::Vertical, col, rows)
    })
}

/// Walls of a grid before any carving
pub fn total_walls(cols: usize, rows: usize) -> usize {
    (cols + 1) * rows + cols * (rows + 1)
}
