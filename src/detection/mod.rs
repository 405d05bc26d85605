mod config;
mod detector;
mod rules;

pub use config::{BurstScope, DetectorConfig};
pub use detector::AnomalyDetector;
