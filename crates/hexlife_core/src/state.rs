//! Ownership of the visible grid, the one before it, and the generation counter.

use hexlife_data::Grid;

#[derive(Debug, Clone)]
pub struct GridState {
    current: Grid,
    previous: Grid,
    generation: u64,
}

impl GridState {
    /// All cells dead, generation 0. Fails on a zero size.
    pub fn new(size: usize) -> anyhow::Result<Self> {
        let current = Grid::new(size)?;
        Ok(Self {
            previous: current.clone(),
            current,
            generation: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.current.size()
    }

    /// The grid visible to rendering.
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// The grid committed before [`current`](Self::current). Kept for diagnostics only.
    pub fn previous(&self) -> &Grid {
        &self.previous
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Swaps in a finished grid and advances the counter by one.
    ///
    /// Panics if `next` has a different size.
    pub fn commit(&mut self, next: Grid) {
        assert_eq!(next.size(), self.size(), "grid size is fixed at construction");
        self.previous = std::mem::replace(&mut self.current, next);
        self.generation += 1;
    }

    /// Kills every cell in both grids. The generation counter is left as is.
    pub fn reset(&mut self) {
        self.current.clear();
        self.previous.clear();
    }
}
