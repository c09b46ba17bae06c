use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::model::config::AppConfig;
use crate::model::render::PngSink;
use crate::model::{FrameSink, Simulator};

/// Machine-readable outcome of a finished run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub size: usize,
    pub generations: u64,
    pub final_live_cells: usize,
    pub mass_revived: u64,
    pub single_revived: u64,
    pub seed: Option<u64>,
    pub config_fingerprint: String,
}

/// One batch run: a simulator plus the sink its frames go to.
pub struct App<S = PngSink> {
    pub config: AppConfig,
    pub simulator: Simulator,
    pub sink: S,
}

impl App<PngSink> {
    /// Validates `config` and prepares the PNG output directory.
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let sink = PngSink::from_config(&config.render)?;
        Self::with_sink(config, sink)
    }
}

impl<S: FrameSink> App<S> {
    pub fn with_sink(config: AppConfig, sink: S) -> Result<Self> {
        let simulator = Simulator::from_config(&config)?;
        Ok(Self {
            config,
            simulator,
            sink,
        })
    }

    /// Runs the configured number of generations. Any frame failure aborts the run.
    pub fn run(&mut self) -> Result<RunSummary> {
        let generations = self.config.world.generations;
        self.simulator.run(generations, &mut self.sink)?;

        let metrics = self.simulator.metrics();
        Ok(RunSummary {
            size: self.config.world.size,
            generations: self.simulator.generation(),
            final_live_cells: self.simulator.grid().live_count(),
            mass_revived: metrics.mass_revived(),
            single_revived: metrics.single_revived(),
            seed: self.config.world.seed,
            config_fingerprint: self.config.fingerprint(),
        })
    }
}
