//! Conway's birth/survival rule applied over hex adjacency.

use crate::topology::count_live_neighbors;
use hexlife_data::Grid;

/// Fate of a single cell given its current state and alive-neighbor count.
#[inline]
pub fn apply_rule(alive: bool, live_neighbors: usize) -> bool {
    match (alive, live_neighbors) {
        (true, 2 | 3) => true,
        (true, _) => false,
        (false, 3) => true,
        (false, _) => false,
    }
}

/// Builds the next generation from `current`.
///
/// Every cell reads only `current`, so the update is simultaneous across the
/// grid; the input is never mutated.
pub fn next_generation(current: &Grid) -> Grid {
    let size = current.size();
    let mut next = current.clone();
    for row in 0..size {
        for col in 0..size {
            let live = count_live_neighbors(current, row, col);
            next.set(row, col, apply_rule(current.is_alive(row, col), live));
        }
    }
    next
}
