//! Plain data shared by the automaton, the renderer and the app.

pub mod data;

pub use data::grid::{Coord, Grid};
