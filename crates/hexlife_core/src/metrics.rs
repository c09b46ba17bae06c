//! Run counters and logging setup.
//!
//! Provides structured logging and per-tick bookkeeping for monitoring a run.

use std::time::{Duration, Instant};

use crate::resurrection::ResurrectionReport;

/// Ticks between `info`-level progress lines.
const SUMMARY_INTERVAL: u64 = 100;

/// Counters collected while the simulator runs.
#[derive(Debug, Clone)]
pub struct Metrics {
    tick_count: u64,
    live_cells: usize,
    mass_revived: u64,
    single_revived: u64,
    start_time: Instant,
    last_run: Option<Duration>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: 0,
            live_cells: 0,
            mass_revived: 0,
            single_revived: 0,
            start_time: Instant::now(),
            last_run: None,
        }
    }

    /// Records a completed tick.
    pub fn record_tick(
        &mut self,
        generation: u64,
        live_cells: usize,
        report: &ResurrectionReport,
        duration: Duration,
    ) {
        self.tick_count += 1;
        self.live_cells = live_cells;
        self.mass_revived += report.mass as u64;
        self.single_revived += u64::from(report.single.is_some());

        tracing::debug!(
            generation = generation,
            live_cells = live_cells,
            mass_revived = report.mass,
            single_revived = report.single.is_some(),
            duration_us = duration.as_micros() as u64,
            "Generation rendered"
        );

        if self.tick_count % SUMMARY_INTERVAL == 0 {
            tracing::info!(
                ticks = self.tick_count,
                live_cells = live_cells,
                elapsed_ms = self.elapsed().as_millis() as u64,
                "Simulation progress"
            );
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Alive cells after the most recent tick.
    #[must_use]
    pub fn live_cells(&self) -> usize {
        self.live_cells
    }

    #[must_use]
    pub fn mass_revived(&self) -> u64 {
        self.mass_revived
    }

    #[must_use]
    pub fn single_revived(&self) -> u64 {
        self.single_revived
    }

    /// Time since these metrics were created, spanning every run.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Records the wall time of one completed `run`.
    pub fn record_run(&mut self, duration: Duration) {
        self.last_run = Some(duration);
    }

    /// Wall time of the most recent completed `run`.
    #[must_use]
    pub fn last_run(&self) -> Option<Duration> {
        self.last_run
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honors `RUST_LOG`, falling back to `info`. Calling it twice is harmless.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
