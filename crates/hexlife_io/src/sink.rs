//! Writes one PNG per generation.

use std::path::{Path, PathBuf};

use hexlife_core::config::RenderConfig;
use hexlife_core::FrameSink;
use hexlife_data::Grid;

use crate::error::{RenderError, Result};
use crate::layout::HexLayout;
use crate::render::{render_grid, Palette};

/// Frame sink producing `{output_dir}/{prefix}_generation_{index}.png`.
#[derive(Debug, Clone)]
pub struct PngSink {
    output_dir: PathBuf,
    prefix: String,
    layout: HexLayout,
    palette: Palette,
    frames_written: u64,
}

impl PngSink {
    /// Creates `output_dir` if needed.
    pub fn new(
        output_dir: impl Into<PathBuf>,
        prefix: impl Into<String>,
        layout: HexLayout,
        palette: Palette,
    ) -> Result<Self> {
        let output_dir = output_dir.into();
        let prefix = prefix.into();
        if prefix.trim().is_empty() {
            return Err(RenderError::validation("Output prefix must not be empty"));
        }
        std::fs::create_dir_all(&output_dir).map_err(|e| {
            RenderError::from(e).with_context(format!(
                "creating output directory {}",
                output_dir.display()
            ))
        })?;
        Ok(Self {
            output_dir,
            prefix,
            layout,
            palette,
            frames_written: 0,
        })
    }

    pub fn from_config(config: &RenderConfig) -> Result<Self> {
        Self::new(
            &config.output_dir,
            config.prefix.clone(),
            HexLayout::from_config(config)?,
            Palette::from_config(config),
        )
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    pub fn frame_path(&self, generation: u64) -> PathBuf {
        self.output_dir
            .join(format!("{}_generation_{}.png", self.prefix, generation))
    }

    /// Renders `grid` and saves it under the path for `generation`.
    pub fn write_frame(&mut self, generation: u64, grid: &Grid) -> Result<PathBuf> {
        let path = self.frame_path(generation);
        let img = render_grid(grid, &self.layout, &self.palette)
            .map_err(|e| e.with_context(format!("rendering generation {generation}")))?;
        img.save(&path).map_err(|e| {
            RenderError::from(e).with_context(format!("writing {}", path.display()))
        })?;
        self.frames_written += 1;
        tracing::debug!(generation, path = %path.display(), "Frame written");
        Ok(path)
    }
}

impl FrameSink for PngSink {
    fn consume(&mut self, generation: u64, grid: &Grid) -> anyhow::Result<()> {
        self.write_frame(generation, grid)?;
        Ok(())
    }
}
