pub mod config;
pub mod error;
pub mod series;

// Re-export key types for easier use by dependent crates
pub use config::{DisplayConfig, ExperimentConfig, GridStyle, LineStyle, PatternConfig};
pub use error::PatternError;
pub use series::SampleSeries;
