use crate::error::PatternError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

// Parameters of the illustrative experiment, loaded from config.toml
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ExperimentConfig {
    /// Number of particles/photons the curve is scaled to.
    #[serde(default = "default_particle_count")]
    pub particle_count: u32,
    /// Width of the detection screen.
    #[serde(default = "default_screen_width")]
    pub screen_width: f64,
    /// Distance between the two slits; controls the oscillation frequency.
    #[serde(default = "default_slit_spacing")]
    pub slit_spacing: f64,
    /// Number of (position, intensity) pairs sampled across the screen.
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
}

fn default_particle_count() -> u32 {
    10_000
}

fn default_screen_width() -> f64 {
    100.0
}

fn default_slit_spacing() -> f64 {
    10.0
}

fn default_sample_count() -> usize {
    200
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            particle_count: default_particle_count(),
            screen_width: default_screen_width(),
            slit_spacing: default_slit_spacing(),
            sample_count: default_sample_count(),
        }
    }
}

impl ExperimentConfig {
    /// Checks the constraints the generator relies on. `slit_spacing` is
    /// checked for zero separately so the divisor error is explicit.
    pub fn validate(&self) -> Result<(), PatternError> {
        if self.particle_count == 0 {
            return Err(PatternError::InvalidConfiguration(
                "particle_count must be positive".to_string(),
            ));
        }
        if !(self.screen_width > 0.0) {
            return Err(PatternError::InvalidConfiguration(format!(
                "screen_width must be positive, got {}",
                self.screen_width
            )));
        }
        if self.slit_spacing == 0.0 {
            return Err(PatternError::InvalidConfiguration(
                "slit_spacing must be non-zero".to_string(),
            ));
        }
        if !(self.slit_spacing > 0.0) {
            return Err(PatternError::InvalidConfiguration(format!(
                "slit_spacing must be positive, got {}",
                self.slit_spacing
            )));
        }
        if self.sample_count < 2 {
            return Err(PatternError::InvalidConfiguration(format!(
                "sample_count must be at least 2 so the screen span can be divided, got {}",
                self.sample_count
            )));
        }
        Ok(())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GridStyle {
    Solid,
    Dashed,
}

// Recognized display options for the rendered chart, loaded from config.toml
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_x_label")]
    pub x_label: String,
    #[serde(default = "default_y_label")]
    pub y_label: String,
    #[serde(default = "default_line_style")]
    pub line_style: LineStyle,
    /// Opacity of the area shaded between the curve and the zero baseline (0-1).
    #[serde(default = "default_fill_alpha")]
    pub fill_alpha: f64,
    #[serde(default = "default_show_grid")]
    pub show_grid: bool,
    #[serde(default = "default_grid_style")]
    pub grid_style: GridStyle,
    /// Opacity of the grid lines (0-1).
    #[serde(default = "default_grid_alpha")]
    pub grid_alpha: f64,
    /// Width of the output image in pixels.
    #[serde(default = "default_width_px")]
    pub width_px: u32,
    /// Height of the output image in pixels.
    #[serde(default = "default_height_px")]
    pub height_px: u32,
}

fn default_title() -> String {
    "Double-Slit Experiment".to_string()
}

fn default_x_label() -> String {
    "Screen Position".to_string()
}

fn default_y_label() -> String {
    "Number of Impacts".to_string()
}

fn default_line_style() -> LineStyle {
    LineStyle::Solid
}

fn default_fill_alpha() -> f64 {
    0.3
}

fn default_show_grid() -> bool {
    true
}

fn default_grid_style() -> GridStyle {
    GridStyle::Dashed
}

fn default_grid_alpha() -> f64 {
    0.7
}

fn default_width_px() -> u32 {
    1000
}

fn default_height_px() -> u32 {
    600
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            title: default_title(),
            x_label: default_x_label(),
            y_label: default_y_label(),
            line_style: default_line_style(),
            fill_alpha: default_fill_alpha(),
            show_grid: default_show_grid(),
            grid_style: default_grid_style(),
            grid_alpha: default_grid_alpha(),
            width_px: default_width_px(),
            height_px: default_height_px(),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), PatternError> {
        if !(0.0..=1.0).contains(&self.fill_alpha) {
            return Err(PatternError::InvalidConfiguration(format!(
                "fill_alpha must be within [0, 1], got {}",
                self.fill_alpha
            )));
        }
        if !(0.0..=1.0).contains(&self.grid_alpha) {
            return Err(PatternError::InvalidConfiguration(format!(
                "grid_alpha must be within [0, 1], got {}",
                self.grid_alpha
            )));
        }
        if self.width_px == 0 || self.height_px == 0 {
            return Err(PatternError::InvalidConfiguration(format!(
                "output dimensions must be positive, got {}x{}",
                self.width_px, self.height_px
            )));
        }
        Ok(())
    }
}

// Main configuration structure, loaded from config.toml.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct PatternConfig {
    #[serde(default)]
    pub experiment: ExperimentConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl PatternConfig {
    /// Loads the configuration from a TOML file and validates it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let config_str = std::fs::read_to_string(path_ref).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path_ref.display(), e)
        })?;
        let config: PatternConfig = toml::from_str(&config_str).map_err(|e| {
            anyhow::anyhow!("Failed to parse TOML from '{}': {}", path_ref.display(), e)
        })?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PatternError> {
        self.experiment.validate()?;
        self.display.validate()
    }
}
