//! Hex adjacency on an offset-coordinate square grid.
//!
//! Each cell has up to six neighbors given by [`NEIGHBOR_OFFSETS`]. Coordinates
//! falling outside `[0, size)` are dropped, so edge cells have four neighbors
//! and corner cells two (or three on the anti-diagonal corners). There is no
//! wraparound.

use hexlife_data::{Coord, Grid};

/// `(Δrow, Δcol)` pairs, in iteration order.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 6] = [(0, 1), (0, -1), (1, 0), (-1, 0), (1, -1), (-1, 1)];

/// Neighbors of `(row, col)` on a `size`×`size` grid, in [`NEIGHBOR_OFFSETS`] order.
pub fn neighbors(row: usize, col: usize, size: usize) -> impl Iterator<Item = Coord> {
    NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < size && c < size).then_some((r, c))
    })
}

/// Number of alive neighbors of `(row, col)` in `grid`.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> usize {
    neighbors(row, col, grid.size())
        .filter(|&(r, c)| grid.is_alive(r, c))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_cell_has_six_neighbors() {
        let n: Vec<_> = neighbors(2, 2, 5).collect();
        assert_eq!(n, vec![(2, 3), (2, 1), (3, 2), (1, 2), (3, 1), (1, 3)]);
    }

    #[test]
    fn test_edge_cells_have_four_neighbors() {
        assert_eq!(neighbors(0, 2, 5).count(), 4);
        assert_eq!(neighbors(4, 2, 5).count(), 4);
        assert_eq!(neighbors(2, 0, 5).count(), 4);
        assert_eq!(neighbors(2, 4, 5).count(), 4);
    }

    #[test]
    fn test_corner_neighbor_counts() {
        // (0,0) and (n-1,n-1) lose the diagonal pair entirely
        assert_eq!(neighbors(0, 0, 5).count(), 2);
        assert_eq!(neighbors(4, 4, 5).count(), 2);
        // The anti-diagonal corners keep one diagonal neighbor
        assert_eq!(neighbors(0, 4, 5).count(), 3);
        assert_eq!(neighbors(4, 0, 5).count(), 3);
    }

    #[test]
    fn test_single_cell_grid_has_no_neighbors() {
        assert_eq!(neighbors(0, 0, 1).count(), 0);
    }

    #[test]
    fn test_count_live_neighbors() {
        let grid = Grid::from_rows([
            [false, true, false],
            [true, false, true],
            [false, true, false],
        ])
        .unwrap();
        // (1,1) neighbors: (1,2) (1,0) (2,1) (0,1) (2,0) (0,2)
        assert_eq!(count_live_neighbors(&grid, 1, 1), 4);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 2);
    }
}
