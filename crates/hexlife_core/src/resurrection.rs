//! Forced-resurrection events layered on top of the deterministic rule.
//!
//! Two perturbations run after the rule step, in a fixed order:
//!
//! 1. **Mass resurrection** every [`MASS_INTERVAL`] generations revives
//!    `floor(dead / 2)` dead cells, sampled uniformly without replacement.
//! 2. **Single resurrection** every [`SINGLE_INTERVAL`] generations revives
//!    one dead cell chosen uniformly, after the mass step has run.
//!
//! Both fire on generation 0 and on every common multiple.

use hexlife_data::{Coord, Grid};
use rand::seq::SliceRandom;
use rand::Rng;

/// Mass resurrection fires when `generation % MASS_INTERVAL == 0`.
pub const MASS_INTERVAL: u64 = 6;
/// Single resurrection fires when `generation % SINGLE_INTERVAL == 0`.
pub const SINGLE_INTERVAL: u64 = 4;

/// What a policy pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResurrectionReport {
    /// Cells revived by the mass event (0 when it did not fire).
    pub mass: usize,
    /// Cell revived by the single event, if it fired and found a dead cell.
    pub single: Option<Coord>,
}

impl ResurrectionReport {
    pub fn total(&self) -> usize {
        self.mass + usize::from(self.single.is_some())
    }
}

/// Revives half of the dead cells (rounded down). Returns how many were revived.
pub fn mass_resurrection<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    let dead = grid.dead_cells();
    let amount = dead.len() / 2;
    for &(row, col) in dead.choose_multiple(rng, amount) {
        grid.set(row, col, true);
    }
    amount
}

/// Revives one uniformly chosen dead cell, if any remain.
pub fn single_resurrection<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<Coord> {
    let &(row, col) = grid.dead_cells().choose(rng)?;
    grid.set(row, col, true);
    Some((row, col))
}

/// Schedules both resurrection events against the generation counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResurrectionPolicy;

impl ResurrectionPolicy {
    pub fn new() -> Self {
        Self
    }

    pub fn mass_due(&self, generation: u64) -> bool {
        generation % MASS_INTERVAL == 0
    }

    pub fn single_due(&self, generation: u64) -> bool {
        generation % SINGLE_INTERVAL == 0
    }

    /// Mutates a freshly computed grid in place: mass event first, then single.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        generation: u64,
        grid: &mut Grid,
        rng: &mut R,
    ) -> ResurrectionReport {
        let mut report = ResurrectionReport::default();

        if self.mass_due(generation) {
            report.mass = mass_resurrection(grid, rng);
            tracing::trace!(generation, revived = report.mass, "Mass resurrection");
        }

        if self.single_due(generation) {
            report.single = single_resurrection(grid, rng);
            if let Some((row, col)) = report.single {
                tracing::trace!(generation, row, col, "Single resurrection");
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_mass_revives_half_of_all_dead() {
        let mut grid = Grid::new(5).unwrap();
        let revived = mass_resurrection(&mut grid, &mut rng());
        assert_eq!(revived, 12);
        assert_eq!(grid.live_count(), 12);
    }

    #[test]
    fn test_mass_rounds_down_and_ignores_live_cells() {
        let mut grid = Grid::from_rows([[true, true], [true, false]]).unwrap();
        assert_eq!(mass_resurrection(&mut grid, &mut rng()), 0);
        assert_eq!(grid.live_count(), 3);

        let mut grid = Grid::from_rows([
            [true, false, false],
            [false, true, false],
            [false, false, true],
        ])
        .unwrap();
        // 6 dead -> 3 revived, live cells untouched
        assert_eq!(mass_resurrection(&mut grid, &mut rng()), 3);
        assert_eq!(grid.live_count(), 6);
        assert!(grid.is_alive(0, 0) && grid.is_alive(1, 1) && grid.is_alive(2, 2));
    }

    #[test]
    fn test_single_picks_the_only_dead_cell() {
        let mut grid = Grid::from_rows([[true, true], [false, true]]).unwrap();
        assert_eq!(single_resurrection(&mut grid, &mut rng()), Some((1, 0)));
        assert_eq!(grid.dead_count(), 0);
    }

    #[test]
    fn test_single_on_full_grid_is_noop() {
        let mut grid = Grid::from_rows([[true, true], [true, true]]).unwrap();
        assert_eq!(single_resurrection(&mut grid, &mut rng()), None);
    }

    #[test]
    fn test_schedule() {
        let policy = ResurrectionPolicy::new();
        let mass: Vec<u64> = (0..25).filter(|&g| policy.mass_due(g)).collect();
        let single: Vec<u64> = (0..25).filter(|&g| policy.single_due(g)).collect();
        assert_eq!(mass, vec![0, 6, 12, 18, 24]);
        assert_eq!(single, vec![0, 4, 8, 12, 16, 20, 24]);
    }

    #[test]
    fn test_generation_zero_applies_both_in_order() {
        let mut grid = Grid::new(4).unwrap();
        let report = ResurrectionPolicy::new().apply(0, &mut grid, &mut rng());
        assert_eq!(report.mass, 8);
        assert!(report.single.is_some());
        assert_eq!(grid.live_count(), 9);
        assert_eq!(report.total(), 9);
    }

    #[test]
    fn test_off_schedule_generation_leaves_grid_alone() {
        let mut grid = Grid::new(4).unwrap();
        let report = ResurrectionPolicy::new().apply(5, &mut grid, &mut rng());
        assert_eq!(report, ResurrectionReport::default());
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_same_seed_same_cells() {
        let mut a = Grid::new(6).unwrap();
        let mut b = Grid::new(6).unwrap();
        ResurrectionPolicy::new().apply(0, &mut a, &mut rng());
        ResurrectionPolicy::new().apply(0, &mut b, &mut rng());
        assert_eq!(a, b);
    }
}
