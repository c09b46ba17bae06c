//! Configuration management for simulation and rendering parameters.
//!
//! Strongly-typed structures that map onto a `config.toml` file. Missing keys
//! fall back to the `Default` impls, and the CLI may override a few of them
//! on top of that.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command-line flags (override both)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! size = 10
//! generations = 10
//! seed = 42
//!
//! [render]
//! prefix = "hexagonal_game_of_life"
//! output_dir = "frames"
//! hex_radius = 20.0
//! alive_color = [0, 128, 0]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Largest accepted hexagon circumradius, in pixels.
pub const MAX_HEX_RADIUS: f32 = 500.0;
/// Largest accepted canvas margin, in pixels.
pub const MAX_MARGIN: f32 = 1000.0;
/// Upper bound on `width * height` of a rendered frame.
pub const MAX_CANVAS_PIXELS: u64 = 100_000_000;

/// Grid and run-length parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Side length N of the N×N grid.
    pub size: usize,
    /// Number of generations to simulate and render.
    pub generations: u64,
    /// Seed for the resurrection RNG. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: 10,
            generations: 10,
            seed: None,
        }
    }
}

/// How frames are drawn and where they are written.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// File name prefix; frames land at `{output_dir}/{prefix}_generation_{index}.png`.
    pub prefix: String,
    pub output_dir: String,
    /// Hexagon circumradius in pixels.
    pub hex_radius: f32,
    /// Blank border around the tiling, in pixels.
    pub margin: f32,
    /// Width of the outline drawn on every hexagon, in pixels.
    pub border_width: f32,
    pub alive_color: [u8; 3],
    pub dead_color: [u8; 3],
    pub border_color: [u8; 3],
    pub background: [u8; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            prefix: "hexagonal_game_of_life".to_string(),
            output_dir: ".".to_string(),
            hex_radius: 20.0,
            margin: 10.0,
            border_width: 1.5,
            alive_color: [0, 128, 0],
            dead_color: [255, 255, 255],
            border_color: [0, 0, 0],
            background: [255, 255, 255],
        }
    }
}

impl RenderConfig {
    /// Unrounded frame `(width, height)` in pixels for a `size`×`size` grid.
    ///
    /// Uses the pointy-top tiling: columns `2r` apart, rows `√3·r` apart,
    /// even rows shifted by `r`.
    pub fn canvas_extent(&self, size: usize) -> (f64, f64) {
        let sqrt_3 = 3f64.sqrt();
        let r = f64::from(self.hex_radius);
        let margin = f64::from(self.margin);
        let span = size.saturating_sub(1) as f64;
        let width = 2.0 * margin + span * 2.0 * r + r + sqrt_3 * r;
        let height = 2.0 * margin + span * sqrt_3 * r + 2.0 * r;
        (width, height)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub render: RenderConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    ///
    /// # Validation Rules
    /// - Grid size must be positive and reasonable (<= 1000)
    /// - Hex radius must be positive and finite (<= [`MAX_HEX_RADIUS`])
    /// - Margin must be non-negative (<= [`MAX_MARGIN`])
    /// - Border must be thinner than the hexagon it outlines
    /// - A frame must fit in [`MAX_CANVAS_PIXELS`]
    /// - Prefix must not be empty
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.world.size > 0, "Grid size must be positive");
        anyhow::ensure!(self.world.size <= 1000, "Grid size too large (max 1000)");

        let render = &self.render;
        anyhow::ensure!(
            render.hex_radius.is_finite() && render.hex_radius > 0.0,
            "Hex radius must be positive"
        );
        anyhow::ensure!(
            render.hex_radius <= MAX_HEX_RADIUS,
            "Hex radius too large (max {})",
            MAX_HEX_RADIUS
        );
        anyhow::ensure!(
            render.margin.is_finite() && render.margin >= 0.0,
            "Margin must be non-negative"
        );
        anyhow::ensure!(
            render.margin <= MAX_MARGIN,
            "Margin too large (max {})",
            MAX_MARGIN
        );
        anyhow::ensure!(
            render.border_width >= 0.0 && render.border_width < render.hex_radius,
            "Border width must be in [0.0, hex_radius)"
        );
        anyhow::ensure!(
            !render.prefix.trim().is_empty(),
            "Output prefix must not be empty"
        );

        let (width, height) = render.canvas_extent(self.world.size);
        anyhow::ensure!(
            width * height <= MAX_CANVAS_PIXELS as f64,
            "Canvas of {:.0}x{:.0} pixels exceeds the limit of {} pixels",
            width,
            height,
            MAX_CANVAS_PIXELS
        );

        Ok(())
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` if it exists, otherwise returns validated defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Stable hash of the parameters that shape a run's output.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.render).as_bytes());
        hex::encode(hasher.finalize())
    }
}
