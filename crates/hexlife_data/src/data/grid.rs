use serde::{Deserialize, Serialize};

/// A `(row, col)` cell address.
pub type Coord = (usize, usize);

/// Square boolean grid of cell states (`true` = alive), stored row-major.
///
/// The size is fixed at construction. Deserialized grids go through the same
/// checks as [`Grid::new`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

/// Unchecked wire form of [`Grid`].
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    cells: Vec<bool>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = anyhow::Error;

    fn try_from(raw: RawGrid) -> anyhow::Result<Self> {
        anyhow::ensure!(raw.size > 0, "Grid size must be positive");
        let expected = raw
            .size
            .checked_mul(raw.size)
            .ok_or_else(|| anyhow::anyhow!("Grid size {} overflows", raw.size))?;
        anyhow::ensure!(
            raw.cells.len() == expected,
            "Grid of size {} needs {} cells, got {}",
            raw.size,
            expected,
            raw.cells.len()
        );
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// Creates an all-dead `size`×`size` grid.
    pub fn new(size: usize) -> anyhow::Result<Self> {
        anyhow::ensure!(size > 0, "Grid size must be positive");
        Ok(Self {
            size,
            cells: vec![false; size * size],
        })
    }

    /// Builds a grid from explicit rows. Every row must be as long as there are rows.
    pub fn from_rows<R, I>(rows: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[bool]>,
    {
        let rows: Vec<R> = rows.into_iter().collect();
        let size = rows.len();
        let mut grid = Self::new(size)?;
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            anyhow::ensure!(
                values.len() == size,
                "Row {} has {} cells, expected {}",
                row,
                values.len(),
                size
            );
            let start = row * size;
            grid.cells[start..start + size].copy_from_slice(values);
        }
        Ok(grid)
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Panics if `(row, col)` lies outside the grid.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        assert!(row < self.size && col < self.size, "cell ({row}, {col}) out of bounds");
        self.cells[self.index(row, col)]
    }

    /// Panics if `(row, col)` lies outside the grid.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        assert!(row < self.size && col < self.size, "cell ({row}, {col}) out of bounds");
        let idx = self.index(row, col);
        self.cells[idx] = alive;
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn dead_count(&self) -> usize {
        self.cells.len() - self.live_count()
    }

    /// Every dead cell, in row-major order.
    pub fn dead_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| !**alive)
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Iterates rows top to bottom as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.size)
    }
}
