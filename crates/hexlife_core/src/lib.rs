//! # Hexlife Core
//!
//! The state-transition engine for a Game of Life variant on a hexagonal grid.
//!
//! This crate contains the deterministic automaton plus its stochastic perturbations:
//! - Six-neighbor hex topology without wraparound
//! - Conway's birth/survival rule over that topology
//! - Periodic mass and single resurrection events
//! - The generation loop that hands each frame to a [`FrameSink`]
//!
//! ## Example
//!
//! ```
//! use hexlife_core::simulator::Simulator;
//! use hexlife_data::Grid;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut sim = Simulator::new(5, ChaCha8Rng::seed_from_u64(42)).unwrap();
//! let mut frames = 0;
//! sim.run(3, &mut |_generation: u64, _grid: &Grid| -> anyhow::Result<()> {
//!     frames += 1;
//!     Ok(())
//! })
//! .unwrap();
//! assert_eq!(frames, 3);
//! assert_eq!(sim.generation(), 3);
//! ```

/// Configuration management for simulation and rendering parameters
pub mod config;
/// Tick counters and structured logging setup
pub mod metrics;
/// Periodic forced-resurrection events
pub mod resurrection;
/// Birth/survival/death rule
pub mod rules;
/// Generation loop and the frame sink seam
pub mod simulator;
/// Current/previous grid ownership and the generation counter
pub mod state;
/// Hex neighbor lookup
pub mod topology;

pub use config::AppConfig;
pub use metrics::{init_logging, Metrics};
pub use resurrection::{ResurrectionPolicy, ResurrectionReport};
pub use simulator::{FrameSink, Simulator, TickReport};
pub use state::GridState;
