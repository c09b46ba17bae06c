//! Rasterizes a grid snapshot into a hexagonal tiling.

use hexlife_core::config::RenderConfig;
use hexlife_data::Grid;
use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::Result;
use crate::layout::HexLayout;

/// Two-color cell encoding plus outline and backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub alive: Rgb<u8>,
    pub dead: Rgb<u8>,
    pub border: Rgb<u8>,
    pub background: Rgb<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

impl Palette {
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            alive: Rgb(config.alive_color),
            dead: Rgb(config.dead_color),
            border: Rgb(config.border_color),
            background: Rgb(config.background),
        }
    }

    pub fn fill(&self, alive: bool) -> Rgb<u8> {
        if alive {
            self.alive
        } else {
            self.dead
        }
    }
}

/// Draws every cell of `grid` as a filled, outlined hexagon.
///
/// Cells are painted in row-major order, so where neighboring hexagons
/// overlap the later one wins. Fails before allocating when the frame would
/// be larger than [`HexLayout::checked_canvas_size`] allows.
pub fn render_grid(grid: &Grid, layout: &HexLayout, palette: &Palette) -> Result<RgbImage> {
    let size = grid.size();
    let (width, height) = layout.checked_canvas_size(size)?;
    let mut img: RgbImage = ImageBuffer::from_pixel(width, height, palette.background);

    let half_w = layout.apothem();
    let half_h = layout.radius();

    for (row, cells) in grid.rows().enumerate() {
        for (col, &alive) in cells.iter().enumerate() {
            let (cx, cy) = layout.center(row, col, size);
            let fill = palette.fill(alive);

            let x0 = (cx - half_w).floor().max(0.0) as u32;
            let x1 = ((cx + half_w).ceil() as u32).min(width);
            let y0 = (cy - half_h).floor().max(0.0) as u32;
            let y1 = ((cy + half_h).ceil() as u32).min(height);

            for py in y0..y1 {
                for px in x0..x1 {
                    // Sample at the pixel center
                    let depth = layout.depth(px as f32 + 0.5 - cx, py as f32 + 0.5 - cy);
                    if depth < 0.0 {
                        continue;
                    }
                    let color = if depth < layout.border() {
                        palette.border
                    } else {
                        fill
                    };
                    img.put_pixel(px, py, color);
                }
            }
        }
    }

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel_at_center(img: &RgbImage, layout: &HexLayout, row: usize, col: usize, size: usize) -> Rgb<u8> {
        let (x, y) = layout.center(row, col, size);
        *img.get_pixel(x as u32, y as u32)
    }

    #[test]
    fn test_canvas_matches_layout() {
        let layout = HexLayout::new(8.0, 4.0, 1.0).unwrap();
        let grid = Grid::new(5).unwrap();
        let img = render_grid(&grid, &layout, &Palette::default()).unwrap();
        assert_eq!(img.dimensions(), layout.canvas_size(5));
    }

    #[test]
    fn test_cells_colored_by_state() {
        let layout = HexLayout::new(12.0, 2.0, 1.0).unwrap();
        let palette = Palette {
            alive: Rgb([0, 200, 0]),
            dead: Rgb([250, 250, 250]),
            border: Rgb([0, 0, 0]),
            background: Rgb([10, 10, 10]),
        };
        let grid = Grid::from_rows([
            [true, false, false],
            [false, false, false],
            [false, false, true],
        ])
        .unwrap();
        let img = render_grid(&grid, &layout, &palette).unwrap();

        assert_eq!(pixel_at_center(&img, &layout, 0, 0, 3), palette.alive);
        assert_eq!(pixel_at_center(&img, &layout, 2, 2, 3), palette.alive);
        assert_eq!(pixel_at_center(&img, &layout, 1, 1, 3), palette.dead);
        assert_eq!(pixel_at_center(&img, &layout, 0, 2, 3), palette.dead);
    }

    #[test]
    fn test_outline_and_background() {
        let layout = HexLayout::new(12.0, 6.0, 2.0).unwrap();
        let palette = Palette::default();
        let grid = Grid::new(1).unwrap();
        let img = render_grid(&grid, &layout, &palette).unwrap();

        let (cx, cy) = layout.center(0, 0, 1);
        // Just inside the right flat side
        let edge_x = (cx + layout.apothem() - 1.0) as u32;
        assert_eq!(*img.get_pixel(edge_x, cy as u32), palette.border);
        // Corner of the canvas is margin, never covered
        assert_eq!(*img.get_pixel(0, 0), palette.background);
    }

    #[test]
    fn test_oversized_frame_is_refused() {
        let layout = HexLayout::new(400.0, 0.0, 1.0).unwrap();
        let grid = Grid::new(100).unwrap();
        let result = render_grid(&grid, &layout, &Palette::default());
        assert!(matches!(result, Err(crate::RenderError::Validation(_))));
    }
}
