//! The generation loop.
//!
//! Each tick runs the rule over the current grid, applies the resurrection
//! policy to the fresh result, hands that result to a [`FrameSink`] tagged with
//! the generation index, then commits it and advances the counter.

use std::time::Instant;

use anyhow::Context;
use hexlife_data::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::AppConfig;
use crate::metrics::Metrics;
use crate::resurrection::{ResurrectionPolicy, ResurrectionReport};
use crate::rules;
use crate::state::GridState;

/// Consumer of finished generations, typically an image writer.
///
/// An error aborts the run.
pub trait FrameSink {
    fn consume(&mut self, generation: u64, grid: &Grid) -> anyhow::Result<()>;
}

impl<F> FrameSink for F
where
    F: FnMut(u64, &Grid) -> anyhow::Result<()>,
{
    fn consume(&mut self, generation: u64, grid: &Grid) -> anyhow::Result<()> {
        self(generation, grid)
    }
}

/// Outcome of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Index the frame was rendered under.
    pub generation: u64,
    pub live_cells: usize,
    pub resurrection: ResurrectionReport,
}

pub struct Simulator<R = ChaCha8Rng> {
    state: GridState,
    policy: ResurrectionPolicy,
    rng: R,
    metrics: Metrics,
}

impl Simulator<ChaCha8Rng> {
    /// Builds a simulator from validated config, seeding the RNG from
    /// `world.seed` or from OS entropy when unset.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let rng = if let Some(seed) = config.world.seed {
            ChaCha8Rng::seed_from_u64(seed)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self::new(config.world.size, rng)
    }
}

impl<R: Rng> Simulator<R> {
    /// All-dead `size`×`size` grid at generation 0. Fails on a zero size.
    pub fn new(size: usize, rng: R) -> anyhow::Result<Self> {
        Ok(Self {
            state: GridState::new(size)?,
            policy: ResurrectionPolicy::new(),
            rng,
            metrics: Metrics::new(),
        })
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        self.state.current()
    }

    pub fn generation(&self) -> u64 {
        self.state.generation()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Advances one generation.
    ///
    /// If the sink fails the computed grid is discarded and the counter stays put.
    pub fn tick<S: FrameSink + ?Sized>(&mut self, sink: &mut S) -> anyhow::Result<TickReport> {
        let started = Instant::now();
        let generation = self.state.generation();

        let mut next = rules::next_generation(self.state.current());
        let resurrection = self.policy.apply(generation, &mut next, &mut self.rng);

        sink.consume(generation, &next)
            .with_context(|| format!("Failed to render generation {}", generation))?;

        let live_cells = next.live_count();
        self.state.commit(next);
        self.metrics
            .record_tick(generation, live_cells, &resurrection, started.elapsed());

        Ok(TickReport {
            generation,
            live_cells,
            resurrection,
        })
    }

    /// Clears the grid and runs exactly `generations` ticks, stopping at the
    /// first sink error.
    pub fn run<S: FrameSink + ?Sized>(&mut self, generations: u64, sink: &mut S) -> anyhow::Result<()> {
        let started = Instant::now();
        self.state.reset();
        tracing::info!(
            size = self.state.size(),
            generations = generations,
            start = self.state.generation(),
            "Starting simulation"
        );

        for _ in 0..generations {
            self.tick(sink)?;
        }

        let elapsed = started.elapsed();
        self.metrics.record_run(elapsed);
        tracing::info!(
            generations = generations,
            live_cells = self.state.current().live_count(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Simulation finished"
        );
        Ok(())
    }
}
