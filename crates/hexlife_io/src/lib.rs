//! # Hexlife IO
//!
//! The rendering side of the hex automaton.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - Hexagonal tiling geometry
//! - Rasterization of a grid snapshot into an RGB image
//! - A [`FrameSink`](hexlife_core::FrameSink) that writes one PNG per generation

/// Error types and result aliases for rendering
pub mod error;
/// Pixel geometry of the offset hexagonal tiling
pub mod layout;
/// Grid snapshot rasterization
pub mod render;
/// PNG frame sink
pub mod sink;

pub use error::{RenderError, Result};
pub use layout::HexLayout;
pub use render::{render_grid, Palette};
pub use sink::PngSink;
