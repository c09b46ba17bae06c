//! Hexagonal Game of Life with periodic forced resurrection.
//!
//! The automaton lives in `hexlife_core`, frame rendering in `hexlife_io`;
//! this crate wires them together behind [`app::App`].

pub mod app;
pub mod model;
