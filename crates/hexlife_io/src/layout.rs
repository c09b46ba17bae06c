//! Pixel geometry for the offset hexagonal tiling.
//!
//! Hexagons are pointy-top with circumradius `r`. Columns are `2r` apart and
//! rows `√3·r` apart; even rows are shifted right by `r`, which gives the
//! brick-like offset between neighboring rows. Row 0 sits at the bottom of the
//! canvas.

use hexlife_core::config::{RenderConfig, MAX_CANVAS_PIXELS, MAX_HEX_RADIUS, MAX_MARGIN};

use crate::error::{RenderError, Result};

const SQRT_3: f32 = 1.732_050_8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexLayout {
    radius: f32,
    margin: f32,
    border: f32,
}

impl HexLayout {
    pub fn new(radius: f32, margin: f32, border: f32) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(RenderError::validation("Hex radius must be positive"));
        }
        if radius > MAX_HEX_RADIUS {
            return Err(RenderError::validation(format!(
                "Hex radius too large (max {MAX_HEX_RADIUS})"
            )));
        }
        if !(margin.is_finite() && margin >= 0.0) {
            return Err(RenderError::validation("Margin must be non-negative"));
        }
        if margin > MAX_MARGIN {
            return Err(RenderError::validation(format!(
                "Margin too large (max {MAX_MARGIN})"
            )));
        }
        if !(border >= 0.0 && border < radius) {
            return Err(RenderError::validation(
                "Border width must be in [0.0, hex_radius)",
            ));
        }
        Ok(Self {
            radius,
            margin,
            border,
        })
    }

    pub fn from_config(config: &RenderConfig) -> Result<Self> {
        Self::new(config.hex_radius, config.margin, config.border_width)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn border(&self) -> f32 {
        self.border
    }

    pub fn horizontal_spacing(&self) -> f32 {
        2.0 * self.radius
    }

    pub fn vertical_spacing(&self) -> f32 {
        SQRT_3 * self.radius
    }

    /// Distance from a hexagon's center to the middle of a side.
    pub fn apothem(&self) -> f32 {
        SQRT_3 / 2.0 * self.radius
    }

    /// Canvas `(width, height)` in pixels for a `size`×`size` grid.
    pub fn canvas_size(&self, size: usize) -> (u32, u32) {
        let span = size.saturating_sub(1) as f32;
        let width = 2.0 * self.margin
            + span * self.horizontal_spacing()
            + self.horizontal_spacing() / 2.0
            + 2.0 * self.apothem();
        let height = 2.0 * self.margin + span * self.vertical_spacing() + 2.0 * self.radius;
        (width.ceil() as u32, height.ceil() as u32)
    }

    /// Like [`canvas_size`](Self::canvas_size), but refuses frames larger than
    /// [`MAX_CANVAS_PIXELS`] instead of saturating.
    pub fn checked_canvas_size(&self, size: usize) -> Result<(u32, u32)> {
        let span = size.saturating_sub(1) as f64;
        let r = f64::from(self.radius);
        let width = (2.0 * f64::from(self.margin) + span * 2.0 * r + r + 3f64.sqrt() * r).ceil();
        let height = (2.0 * f64::from(self.margin) + span * 3f64.sqrt() * r + 2.0 * r).ceil();
        if width * height > MAX_CANVAS_PIXELS as f64 {
            return Err(RenderError::validation(format!(
                "Canvas of {width}x{height} pixels for a {size}x{size} grid exceeds the limit of {MAX_CANVAS_PIXELS} pixels"
            )));
        }
        Ok(self.canvas_size(size))
    }

    /// Pixel center of cell `(row, col)` on the canvas for a `size`×`size` grid.
    pub fn center(&self, row: usize, col: usize, size: usize) -> (f32, f32) {
        let (_, height) = self.canvas_size(size);
        let mut x = self.margin + self.apothem() + col as f32 * self.horizontal_spacing();
        if row % 2 == 0 {
            x += self.horizontal_spacing() / 2.0;
        }
        let y = height as f32 - (self.margin + self.radius + row as f32 * self.vertical_spacing());
        (x, y)
    }

    /// How far `(dx, dy)`, measured from a hexagon's center, lies inside it.
    ///
    /// Zero on the outline, negative outside.
    pub fn depth(&self, dx: f32, dy: f32) -> f32 {
        let h = SQRT_3 / 2.0;
        let reach = dx
            .abs()
            .max((0.5 * dx + h * dy).abs())
            .max((-0.5 * dx + h * dy).abs());
        self.apothem() - reach
    }
}
