use hexlife_lib::model::config::AppConfig;
use hexlife_lib::model::data::Grid;
use hexlife_lib::model::{FrameSink, Simulator};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Builds grids from `(row, col)` lists of live cells.
#[allow(dead_code)]
pub struct GridBuilder {
    grid: Grid,
}

#[allow(dead_code)]
impl GridBuilder {
    pub fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size).expect("test grid size must be positive"),
        }
    }

    pub fn alive(mut self, cells: &[(usize, usize)]) -> Self {
        for &(row, col) in cells {
            self.grid.set(row, col, true);
        }
        self
    }

    pub fn all_alive_except(mut self, dead: &[(usize, usize)]) -> Self {
        let size = self.grid.size();
        for row in 0..size {
            for col in 0..size {
                self.grid.set(row, col, !dead.contains(&(row, col)));
            }
        }
        self
    }

    pub fn build(self) -> Grid {
        self.grid
    }
}

/// Sink that keeps every frame it is handed.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingSink {
    pub frames: Vec<(u64, Grid)>,
    pub fail_at: Option<u64>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn failing_at(generation: u64) -> Self {
        Self {
            frames: Vec::new(),
            fail_at: Some(generation),
        }
    }

    pub fn indices(&self) -> Vec<u64> {
        self.frames.iter().map(|(g, _)| *g).collect()
    }
}

impl FrameSink for RecordingSink {
    fn consume(&mut self, generation: u64, grid: &Grid) -> anyhow::Result<()> {
        if self.fail_at == Some(generation) {
            anyhow::bail!("simulated write failure");
        }
        self.frames.push((generation, grid.clone()));
        Ok(())
    }
}

#[allow(dead_code)]
pub fn seeded_simulator(size: usize, seed: u64) -> Simulator {
    Simulator::new(size, ChaCha8Rng::seed_from_u64(seed)).expect("valid simulator")
}

#[allow(dead_code)]
pub fn seeded_config(size: usize, generations: u64, seed: u64) -> AppConfig {
    let mut config = AppConfig::default();
    config.world.size = size;
    config.world.generations = generations;
    config.world.seed = Some(seed);
    config
}
