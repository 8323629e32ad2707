use anyhow::Result;
use log::info;
use pattern_common::{DisplayConfig, ExperimentConfig, PatternError};
use std::path::Path;

use crate::pattern;
use crate::render;

/// A configured double-slit illustration.
///
/// Owns its experiment parameters for its lifetime; the sample series is
/// produced fresh on every run and never cached.
#[derive(Debug)]
pub struct Experiment {
    config: ExperimentConfig,
}

impl Experiment {
    /// Validates the configuration up front so an invalid experiment can
    /// never be constructed.
    pub fn new(config: ExperimentConfig) -> Result<Self, PatternError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Generates the interference pattern and renders it to `output`.
    pub fn run(&self, display: &DisplayConfig, output: &Path) -> Result<()> {
        let series = pattern::generate(&self.config)?;
        info!(
            "Generated {} samples (peak intensity {:.1}).",
            series.len(),
            series.max_intensity()
        );

        render::render(&series, display, output)?;
        info!("Pattern image saved to {}", output.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let config = ExperimentConfig {
            slit_spacing: 0.0,
            ..ExperimentConfig::default()
        };
        let err = Experiment::new(config).expect_err("zero spacing must be rejected");
        assert!(matches!(err, PatternError::InvalidConfiguration(_)));
    }

    #[test]
    fn run_produces_an_image() {
        let path = std::env::temp_dir().join("slit_pattern_experiment_run.png");
        let _ = std::fs::remove_file(&path);

        let experiment = Experiment::new(ExperimentConfig::default()).expect("valid config");
        experiment
            .run(&DisplayConfig::default(), &path)
            .expect("run must succeed");

        assert!(path.exists(), "run must produce the image artifact");
        let _ = std::fs::remove_file(&path);
    }
}
